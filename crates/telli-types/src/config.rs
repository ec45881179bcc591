//! Connector configuration types.
//!
//! `ConnectorConfig` represents the optional `config.toml` that controls the
//! API base URL, the per-request timeout, and the batch fault-tolerance
//! default. All fields have defaults so a missing file is fine.

use serde::{Deserialize, Serialize};

/// The telli API base URL used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.telli.com/v1";

/// Top-level configuration for the connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Base URL of the telli API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout applied to each HTTP request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Replace failed items with error records instead of aborting the batch.
    #[serde(default)]
    pub continue_on_fail: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            continue_on_fail: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_config_default_values() {
        let config = ConnectorConfig::default();
        assert_eq!(config.base_url, "https://api.telli.com/v1");
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.continue_on_fail);
    }

    #[test]
    fn test_connector_config_partial_deserialization() {
        let json = r#"{"continue_on_fail": true}"#;
        let config: ConnectorConfig = serde_json::from_str(json).unwrap();
        assert!(config.continue_on_fail);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }
}
