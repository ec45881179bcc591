//! Host-facing input item shapes.
//!
//! The host hands the dispatcher one JSON object per item, keyed by the
//! camelCase field names declared in [`crate::catalog`]. These structs give
//! that surface a typed shape; the snake_case wire structs in `telli-types`
//! are built from them during payload assembly.

use serde::Deserialize;
use serde_json::Value;
use telli_types::error::ValidationError;

/// A single row from the repeatable contact-details input.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyValuePair {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: String,
}

/// Input fields for the add-contact operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddContactParams {
    pub external_contact_id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub salutation: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    /// Ordered rows; later rows overwrite earlier ones sharing a key.
    #[serde(default)]
    pub contact_details: Vec<KeyValuePair>,
}

/// Input fields for the schedule-call operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleCallParams {
    pub contact_id: String,
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default = "default_max_retry_days")]
    pub max_retry_days: u32,
    #[serde(default)]
    pub override_from_number: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuestionParams>,
}

fn default_max_retry_days() -> u32 {
    3
}

/// One row from the repeatable questions input.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionParams {
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub needed_information: Option<String>,
    #[serde(default)]
    pub example_question: Option<String>,
    #[serde(default)]
    pub response_format: Option<String>,
}

/// Parse one input item into a params struct.
///
/// Unknown keys (such as the batch-level `operation` selector) are ignored;
/// missing required fields or wrong value types become a validation error.
pub fn parse_item<T: serde::de::DeserializeOwned>(item: &Value) -> Result<T, ValidationError> {
    serde_json::from_value(item.clone()).map_err(|e| ValidationError::InvalidInput(e.to_string()))
}
