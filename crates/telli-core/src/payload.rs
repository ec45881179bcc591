//! Payload assembly: typed item params into telli wire bodies.
//!
//! The host supplies camelCase fields with empty-string defaults; the API
//! expects snake_case keys with absent optionals omitted outright. The
//! builders here validate first, then translate.

use std::collections::HashMap;

use telli_types::call::{CallDetails, Question, ScheduleCallRequest};
use telli_types::contact::AddContactRequest;
use telli_types::error::ValidationError;

use crate::params::{AddContactParams, QuestionParams, ScheduleCallParams};
use crate::validate;

/// Treat host-supplied empty strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Build the `POST /add-contact` body from one item's fields.
///
/// Validates the phone number and folds the repeatable key/value rows into
/// a single map; later rows overwrite earlier ones sharing a key. An empty
/// row list omits `contact_details` from the body entirely.
pub fn build_add_contact(params: AddContactParams) -> Result<AddContactRequest, ValidationError> {
    validate::validate_phone_number(&params.phone_number)?;

    let mut details = HashMap::new();
    for row in params.contact_details {
        details.insert(row.key, row.value);
    }

    Ok(AddContactRequest {
        first_name: params.first_name,
        last_name: params.last_name,
        phone_number: params.phone_number,
        external_contact_id: params.external_contact_id,
        email: non_empty(params.email),
        salutation: non_empty(params.salutation),
        timezone: non_empty(params.timezone),
        contact_details: if details.is_empty() { None } else { Some(details) },
    })
}

/// Build the `POST /schedule-call` body from one item's fields.
///
/// `call_details` is omitted unless a non-empty message or at least one
/// non-empty question survives assembly.
pub fn build_schedule_call(
    params: ScheduleCallParams,
) -> Result<ScheduleCallRequest, ValidationError> {
    validate::validate_call_details(params.message.as_deref(), &params.questions)?;

    let message = non_empty(params.message);
    let questions: Vec<Question> = params
        .questions
        .into_iter()
        .filter_map(build_question)
        .collect();

    let call_details = if message.is_none() && questions.is_empty() {
        None
    } else {
        Some(CallDetails {
            message,
            questions: if questions.is_empty() { None } else { Some(questions) },
        })
    };

    Ok(ScheduleCallRequest {
        contact_id: params.contact_id,
        agent_id: non_empty(params.agent_id),
        max_retry_days: params.max_retry_days,
        override_from_number: non_empty(params.override_from_number),
        call_details,
    })
}

/// Drop rows where every field is absent or empty.
fn build_question(row: QuestionParams) -> Option<Question> {
    let question = Question {
        field_name: non_empty(row.field_name),
        needed_information: non_empty(row.needed_information),
        example_question: non_empty(row.example_question),
        response_format: non_empty(row.response_format),
    };

    let empty = question.field_name.is_none()
        && question.needed_information.is_none()
        && question.example_question.is_none()
        && question.response_format.is_none();
    if empty { None } else { Some(question) }
}
