//! Format validation applied before any request is sent.

use std::sync::OnceLock;

use regex::Regex;
use telli_types::error::ValidationError;

use crate::params::QuestionParams;

/// Character cap on the call message and each question field.
pub const MAX_DETAIL_CHARS: usize = 500;

fn e164() -> &'static Regex {
    static E164: OnceLock<Regex> = OnceLock::new();
    E164.get_or_init(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern is valid"))
}

/// Check a phone number against E.164: a leading `+`, a non-zero first
/// digit, at most 15 digits total.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if e164().is_match(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneNumber)
    }
}

/// Enforce the length caps on the call message and every question row.
///
/// Each field is checked on its own so the error names the field the user
/// has to fix; the first violation wins.
pub fn validate_call_details(
    message: Option<&str>,
    questions: &[QuestionParams],
) -> Result<(), ValidationError> {
    if let Some(message) = message {
        check_len("message", message)?;
    }
    for question in questions {
        if let Some(v) = question.field_name.as_deref() {
            check_len("fieldName", v)?;
        }
        if let Some(v) = question.needed_information.as_deref() {
            check_len("neededInformation", v)?;
        }
        if let Some(v) = question.example_question.as_deref() {
            check_len("exampleQuestion", v)?;
        }
        if let Some(v) = question.response_format.as_deref() {
            check_len("responseFormat", v)?;
        }
    }
    Ok(())
}

fn check_len(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_DETAIL_CHARS {
        return Err(ValidationError::FieldTooLong {
            field,
            max: MAX_DETAIL_CHARS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        for phone in ["+12125551234", "+4917642048466", "+19", "+123456789012345"] {
            assert!(validate_phone_number(phone).is_ok(), "{phone} should pass");
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        for phone in [
            "12125551234",      // missing +
            "+01234567",        // leading zero
            "+1212555123a",     // non-digit
            "+1234567890123456", // 16 digits
            "+1 212 555 1234",  // spaces
            "+1",               // a single digit
            "",
        ] {
            let err = validate_phone_number(phone).unwrap_err();
            assert!(err.to_string().contains("E.164"), "{phone} should fail");
        }
    }

    #[test]
    fn test_message_cap_is_inclusive() {
        let at_cap = "x".repeat(500);
        assert!(validate_call_details(Some(&at_cap), &[]).is_ok());

        let over_cap = "x".repeat(501);
        let err = validate_call_details(Some(&over_cap), &[]).unwrap_err();
        assert_eq!(err.to_string(), "message exceeds the 500 character limit");
    }

    #[test]
    fn test_question_fields_are_checked_independently() {
        let question = QuestionParams {
            field_name: Some("budget".to_string()),
            needed_information: None,
            example_question: Some("y".repeat(501)),
            response_format: Some("free text".to_string()),
        };

        let err = validate_call_details(None, &[question]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "exampleQuestion exceeds the 500 character limit"
        );
    }

    #[test]
    fn test_cap_counts_characters_not_bytes() {
        // 500 umlauts are 1000 bytes but still within the cap
        let message = "ü".repeat(500);
        assert!(validate_call_details(Some(&message), &[]).is_ok());
    }

    #[test]
    fn test_absent_question_fields_are_not_checked() {
        let question = QuestionParams {
            field_name: None,
            needed_information: None,
            example_question: None,
            response_format: None,
        };
        assert!(validate_call_details(None, &[question]).is_ok());
    }
}
