//! The port the dispatcher calls the telli API through.

use serde_json::Value;
use telli_types::call::ScheduleCallRequest;
use telli_types::contact::AddContactRequest;
use telli_types::error::ApiError;

/// Trait for the telli API backend.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The
/// production implementation lives in telli-infra (`TelliClient`); tests
/// substitute mocks.
pub trait CallingApi: Send + Sync {
    /// Create a contact. Returns the parsed JSON response body.
    fn add_contact(
        &self,
        request: &AddContactRequest,
    ) -> impl std::future::Future<Output = Result<Value, ApiError>> + Send;

    /// Schedule an outbound call. Returns the parsed JSON response body.
    fn schedule_call(
        &self,
        request: &ScheduleCallRequest,
    ) -> impl std::future::Future<Output = Result<Value, ApiError>> + Send;
}
