//! Connector configuration loader.
//!
//! Reads an optional TOML file and deserializes it into
//! [`ConnectorConfig`]. Falls back to defaults when the file is missing or
//! malformed, so an unconfigured host still gets a working connector.

use std::path::Path;

use telli_types::config::ConnectorConfig;

/// Load connector configuration from a TOML file.
///
/// - If the file does not exist, returns [`ConnectorConfig::default()`].
/// - If the file exists but cannot be read or parsed, logs a warning and
///   returns the default.
pub async fn load_config(path: &Path) -> ConnectorConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return ConnectorConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ConnectorConfig::default();
        }
    };

    match toml::from_str::<ConnectorConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ConnectorConfig::default()
        }
    }
}
