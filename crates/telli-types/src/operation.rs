//! The operation selector exposed to the host's workflow configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The operation a batch of input items is executed against.
///
/// The serde representation uses the exact string tokens the host stores in
/// its workflow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "add-telli-contact")]
    AddContact,
    #[serde(rename = "schedule-telli-call")]
    ScheduleCall,
}

impl Operation {
    /// The wire token for this operation (e.g. `add-telli-contact`).
    pub fn token(&self) -> &'static str {
        match self {
            Operation::AddContact => "add-telli-contact",
            Operation::ScheduleCall => "schedule-telli-call",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add-telli-contact" => Ok(Operation::AddContact),
            "schedule-telli-call" => Ok(Operation::ScheduleCall),
            other => Err(format!("unknown operation: '{other}'")),
        }
    }
}
