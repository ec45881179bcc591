use thiserror::Error;

/// Errors raised while validating item input, before any request is sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid phone number format, expected E.164 (e.g. +12125551234)")]
    InvalidPhoneNumber,

    #[error("{field} exceeds the {max} character limit")]
    FieldTooLong { field: &'static str, max: usize },

    #[error("invalid item input: {0}")]
    InvalidInput(String),
}

/// Errors from talking to the telli API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` is the server's `message` field when the
    /// error body carries one, otherwise a generic fallback.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to parse API response: {0}")]
    Deserialization(String),
}

/// Errors from the batch dispatcher.
///
/// Item-scoped variants carry the index of the offending input item.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("the operation '{0}' is not supported")]
    UnsupportedOperation(String),

    #[error("validation failed for item {item_index}: {source}")]
    Validation {
        item_index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("request failed for item {item_index}: {source}")]
    Api {
        item_index: usize,
        #[source]
        source: ApiError,
    },
}

impl ConnectorError {
    /// The message without the item prefix, used for per-item error records
    /// when the host runs with fault tolerance enabled.
    pub fn detail(&self) -> String {
        match self {
            ConnectorError::UnsupportedOperation(_) => self.to_string(),
            ConnectorError::Validation { source, .. } => source.to_string(),
            ConnectorError::Api { source, .. } => source.to_string(),
        }
    }
}
