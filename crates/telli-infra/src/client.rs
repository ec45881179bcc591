//! TelliClient -- concrete [`CallingApi`] implementation for the telli API.
//!
//! Sends one authenticated POST per operation (`/add-contact`,
//! `/schedule-call`) and a GET for credential verification
//! (`/verify-api-key`).
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use telli_core::api::CallingApi;
use telli_types::call::ScheduleCallRequest;
use telli_types::config::ConnectorConfig;
use telli_types::contact::AddContactRequest;
use telli_types::error::ApiError;

/// HTTP client for the telli calling API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed while
/// building the `Authorization` header. The telli API expects the raw key,
/// without a `Bearer` prefix.
pub struct TelliClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl TelliClient {
    /// Create a new client from a resolved API key and connector config.
    pub fn new(api_key: SecretString, config: &ConnectorConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check the configured API key against `GET /verify-api-key`.
    ///
    /// Backs the credential test declared in the connector schema.
    pub async fn verify_api_key(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.url("/verify-api-key"))
            .header("Authorization", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }
        Ok(())
    }

    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "sending telli API request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.api_key.expose_secret())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}

// TelliClient intentionally does NOT derive Debug; the SecretString field
// keeps the key out of accidental format output either way.

impl CallingApi for TelliClient {
    async fn add_contact(&self, request: &AddContactRequest) -> Result<Value, ApiError> {
        self.post_json("/add-contact", request).await
    }

    async fn schedule_call(&self, request: &ScheduleCallRequest) -> Result<Value, ApiError> {
        self.post_json("/schedule-call", request).await
    }
}

/// Map a non-2xx response to [`ApiError::Api`], pulling the server's
/// `message` field out of a JSON error body when present.
fn api_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| "Unknown API error".to_string());
    ApiError::Api { status, message }
}
