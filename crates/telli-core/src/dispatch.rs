//! Sequential batch dispatcher.
//!
//! Turns a batch of input items into one API call each, strictly in input
//! order; item N+1 starts only after item N completed or failed. With
//! `continue_on_fail`, a failed item becomes an error record and the loop
//! moves on; otherwise the first failure aborts the whole batch.

use serde_json::{Value, json};
use telli_types::error::ConnectorError;
use telli_types::operation::Operation;

use crate::api::CallingApi;
use crate::params;
use crate::payload;

/// Execute a batch of input items.
///
/// The operation selector is read from the first item's `operation` field
/// and applies to the whole batch. Returns one output record per item,
/// preserving input order: the parsed API response on success, or -- with
/// `continue_on_fail` -- an error record carrying the message, the
/// operation token, and the item index.
///
/// An unknown operation token aborts regardless of `continue_on_fail`,
/// since no item in the batch could succeed.
pub async fn execute_batch<A: CallingApi>(
    api: &A,
    items: &[Value],
    continue_on_fail: bool,
) -> Result<Vec<Value>, ConnectorError> {
    let Some(first) = items.first() else {
        return Ok(Vec::new());
    };

    let token = first
        .get("operation")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let operation: Operation = token
        .parse()
        .map_err(|_| ConnectorError::UnsupportedOperation(token.to_string()))?;

    let mut output = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        tracing::debug!(operation = %operation, item = index, "dispatching item");
        match run_item(api, operation, item, index).await {
            Ok(response) => output.push(response),
            Err(error) if continue_on_fail => {
                tracing::warn!(operation = %operation, item = index, %error, "item failed, continuing");
                output.push(json!({
                    "error": error.detail(),
                    "operation": operation.token(),
                    "itemIndex": index,
                }));
            }
            Err(error) => return Err(error),
        }
    }

    Ok(output)
}

async fn run_item<A: CallingApi>(
    api: &A,
    operation: Operation,
    item: &Value,
    item_index: usize,
) -> Result<Value, ConnectorError> {
    match operation {
        Operation::AddContact => {
            let params = params::parse_item(item)
                .map_err(|source| ConnectorError::Validation { item_index, source })?;
            let request = payload::build_add_contact(params)
                .map_err(|source| ConnectorError::Validation { item_index, source })?;
            api.add_contact(&request)
                .await
                .map_err(|source| ConnectorError::Api { item_index, source })
        }
        Operation::ScheduleCall => {
            let params = params::parse_item(item)
                .map_err(|source| ConnectorError::Validation { item_index, source })?;
            let request = payload::build_schedule_call(params)
                .map_err(|source| ConnectorError::Validation { item_index, source })?;
            api.schedule_call(&request)
                .await
                .map_err(|source| ConnectorError::Api { item_index, source })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;
    use telli_types::call::ScheduleCallRequest;
    use telli_types::contact::AddContactRequest;
    use telli_types::error::ApiError;

    // --- Mock API ---

    /// Records every request body and answers from a canned script.
    struct MockApi {
        requests: Mutex<Vec<Value>>,
        failures: Vec<usize>,
    }

    impl MockApi {
        fn ok() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                failures: Vec::new(),
            }
        }

        /// Fail the Nth call (zero-based) with an API error.
        fn failing_on(calls: &[usize]) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                failures: calls.to_vec(),
            }
        }

        fn record(&self, body: Value) -> Result<Value, ApiError> {
            let mut requests = self.requests.lock().unwrap();
            let call = requests.len();
            requests.push(body);
            if self.failures.contains(&call) {
                return Err(ApiError::Api {
                    status: 500,
                    message: "boom".to_string(),
                });
            }
            Ok(json!({ "id": format!("resp-{call}") }))
        }
    }

    impl CallingApi for MockApi {
        fn add_contact(
            &self,
            request: &AddContactRequest,
        ) -> impl Future<Output = Result<Value, ApiError>> + Send {
            let result = self.record(serde_json::to_value(request).unwrap());
            async move { result }
        }

        fn schedule_call(
            &self,
            request: &ScheduleCallRequest,
        ) -> impl Future<Output = Result<Value, ApiError>> + Send {
            let result = self.record(serde_json::to_value(request).unwrap());
            async move { result }
        }
    }

    fn contact_item(index: usize, phone: &str) -> Value {
        json!({
            "operation": "add-telli-contact",
            "externalContactId": format!("ext-{index}"),
            "firstName": "John",
            "lastName": "Doe",
            "phoneNumber": phone,
        })
    }

    #[tokio::test]
    async fn test_empty_batch_yields_empty_output() {
        let api = MockApi::ok();
        let output = execute_batch(&api, &[], false).await.unwrap();
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_operation_aborts_even_with_continue_on_fail() {
        let api = MockApi::ok();
        let items = [json!({ "operation": "delete-telli-contact" })];
        let err = execute_batch(&api, &items, true).await.unwrap_err();
        assert!(matches!(err, ConnectorError::UnsupportedOperation(token) if token == "delete-telli-contact"));
    }

    #[tokio::test]
    async fn test_add_contact_sends_expected_body() {
        let api = MockApi::ok();
        let items = [contact_item(1, "+12125551234")];
        let output = execute_batch(&api, &items, false).await.unwrap();

        assert_eq!(output, vec![json!({ "id": "resp-0" })]);
        let requests = api.requests.lock().unwrap();
        assert_eq!(
            requests[0],
            json!({
                "first_name": "John",
                "last_name": "Doe",
                "phone_number": "+12125551234",
                "external_contact_id": "ext-1",
            })
        );
    }

    #[tokio::test]
    async fn test_schedule_call_sends_expected_body() {
        let api = MockApi::ok();
        let items = [json!({
            "operation": "schedule-telli-call",
            "contactId": "c-1",
            "maxRetryDays": 3,
        })];
        let output = execute_batch(&api, &items, false).await.unwrap();

        assert_eq!(output.len(), 1);
        let requests = api.requests.lock().unwrap();
        assert_eq!(
            requests[0],
            json!({
                "contact_id": "c-1",
                "max_retry_days": 3,
            })
        );
    }

    #[tokio::test]
    async fn test_validation_failure_aborts_without_continue_on_fail() {
        let api = MockApi::ok();
        let items = [
            contact_item(0, "+12125551234"),
            contact_item(1, "not-a-phone"),
            contact_item(2, "+4917642048466"),
        ];

        let err = execute_batch(&api, &items, false).await.unwrap_err();
        assert!(matches!(err, ConnectorError::Validation { item_index: 1, .. }));
        // item 2 must never have been sent
        assert_eq!(api.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_continue_on_fail_replaces_failed_item_in_order() {
        let api = MockApi::ok();
        let items = [
            contact_item(0, "+12125551234"),
            contact_item(1, "not-a-phone"),
            contact_item(2, "+4917642048466"),
        ];

        let output = execute_batch(&api, &items, true).await.unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(output[0], json!({ "id": "resp-0" }));
        assert_eq!(output[2], json!({ "id": "resp-1" }));

        let record = &output[1];
        assert_eq!(record["operation"], "add-telli-contact");
        assert_eq!(record["itemIndex"], 1);
        assert!(record["error"].as_str().unwrap().contains("E.164"));
    }

    #[tokio::test]
    async fn test_continue_on_fail_tolerates_api_errors() {
        let api = MockApi::failing_on(&[0]);
        let items = [
            contact_item(0, "+12125551234"),
            contact_item(1, "+4917642048466"),
        ];

        let output = execute_batch(&api, &items, true).await.unwrap();
        assert_eq!(output[0]["error"], "API error (500): boom");
        assert_eq!(output[0]["itemIndex"], 0);
        assert_eq!(output[1], json!({ "id": "resp-1" }));
    }

    #[tokio::test]
    async fn test_api_error_aborts_without_continue_on_fail() {
        let api = MockApi::failing_on(&[0]);
        let items = [contact_item(0, "+12125551234")];

        let err = execute_batch(&api, &items, false).await.unwrap_err();
        assert!(matches!(err, ConnectorError::Api { item_index: 0, .. }));
    }

    #[tokio::test]
    async fn test_malformed_item_becomes_validation_error_record() {
        let api = MockApi::ok();
        let items = [
            json!({ "operation": "add-telli-contact", "firstName": "John" }),
        ];

        let output = execute_batch(&api, &items, true).await.unwrap();
        assert_eq!(output[0]["itemIndex"], 0);
        assert!(output[0]["error"].as_str().unwrap().contains("invalid item input"));
    }
}
