//! Wire types for the schedule-call operation.

use serde::Serialize;

/// Request body for `POST /schedule-call`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleCallRequest {
    /// ID of an existing telli contact.
    pub contact_id: String,
    /// Agent to place the call; the account default is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    /// Days the call is retried before giving up.
    pub max_retry_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_from_number: Option<String>,
    /// Omitted entirely unless a message or at least one question is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_details: Option<CallDetails>,
}

/// Instructions handed to the agent for one scheduled call.
#[derive(Debug, Clone, Serialize)]
pub struct CallDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
}

/// A question the agent should ask during the call.
///
/// Answers surface in the downstream call analysis under
/// `answer_<field_name>`.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needed_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_question: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
}
