//! Static field catalog for the two telli operations.
//!
//! A declarative description of what the host form shows per operation.
//! The host renders it; the dispatcher never interprets it. Format
//! validation happens later, in [`crate::validate`].

use telli_types::operation::Operation;
use telli_types::schema::{
    CredentialDescriptor, CredentialField, FieldDefault, FieldDescriptor, FieldKind,
    OperationDescriptor, TestRequest,
};

/// The selectable operations, in display order. The first entry is the host
/// form's default selection.
pub const OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        name: "Add Contact",
        value: Operation::AddContact,
        description: "Add a new contact to telli",
        action: "Add a new contact to telli",
    },
    OperationDescriptor {
        name: "Schedule Call",
        value: Operation::ScheduleCall,
        description: "Schedule a call with telli",
        action: "Schedule a call with telli",
    },
];

/// Every input field across both operations, grouped by operation.
pub const FIELDS: &[FieldDescriptor] = &[
    // add-contact
    FieldDescriptor {
        name: "externalContactId",
        display_name: "External Contact ID",
        kind: FieldKind::Text,
        required: true,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "Your unique internal identifier for the contact",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "firstName",
        display_name: "First Name",
        kind: FieldKind::Text,
        required: true,
        default: Some(FieldDefault::Text("")),
        placeholder: Some("John"),
        description: "The first name of the contact",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "lastName",
        display_name: "Last Name",
        kind: FieldKind::Text,
        required: true,
        default: Some(FieldDefault::Text("")),
        placeholder: Some("Doe"),
        description: "The last name of the contact",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "phoneNumber",
        display_name: "Phone Number",
        kind: FieldKind::Text,
        required: true,
        default: Some(FieldDefault::Text("")),
        placeholder: Some("+1 (234) 567-8901"),
        description: "Contact's phone number in E.164 format (e.g. +4917642048466)",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "email",
        display_name: "Email",
        kind: FieldKind::Text,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: Some("name@email.com"),
        description: "The email of the contact",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "salutation",
        display_name: "Salutation",
        kind: FieldKind::Text,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "Formal title or greeting (e.g. \"Mr.\", \"Ms.\", \"Herr\", \"Frau\"). \
                      If empty, will auto guess based on first name for German calls.",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "timezone",
        display_name: "Timezone",
        kind: FieldKind::Text,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "IANA timezone identifier (e.g. Europe/Berlin). \
                      Defaults to account timezone if not set.",
        operation: Operation::AddContact,
    },
    FieldDescriptor {
        name: "contactDetails",
        display_name: "Contact Details",
        kind: FieldKind::KeyValueList,
        required: false,
        default: None,
        placeholder: None,
        description: "Custom variables passed to the AI agent (should be discussed in advance). \
                      Keys should be lowercase snake_case. \
                      Later rows overwrite earlier rows sharing a key.",
        operation: Operation::AddContact,
    },
    // schedule-call
    FieldDescriptor {
        name: "contactId",
        display_name: "Contact ID",
        kind: FieldKind::Text,
        required: true,
        default: Some(FieldDefault::Text("")),
        placeholder: Some("3c90c3cc-0d44-4b50-8888-8dd25736052a"),
        description: "ID of the contact to schedule call with",
        operation: Operation::ScheduleCall,
    },
    FieldDescriptor {
        name: "agentId",
        display_name: "Agent ID",
        kind: FieldKind::Text,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "Optional agent ID to use for the call. \
                      If not set, the default agent will be used.",
        operation: Operation::ScheduleCall,
    },
    FieldDescriptor {
        name: "maxRetryDays",
        display_name: "Max Retry Days",
        kind: FieldKind::Number,
        required: false,
        default: Some(FieldDefault::Number(3)),
        placeholder: None,
        description: "Optional number of days to retry the call. \
                      Defaults to the account's max retry days.",
        operation: Operation::ScheduleCall,
    },
    FieldDescriptor {
        name: "overrideFromNumber",
        display_name: "Override From Number",
        kind: FieldKind::Text,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "Override the from number for the call",
        operation: Operation::ScheduleCall,
    },
    FieldDescriptor {
        name: "message",
        display_name: "Message",
        kind: FieldKind::MultilineText,
        required: false,
        default: Some(FieldDefault::Text("")),
        placeholder: None,
        description: "Message passed to the agent for this call. At most 500 characters.",
        operation: Operation::ScheduleCall,
    },
    FieldDescriptor {
        name: "questions",
        display_name: "Questions",
        kind: FieldKind::QuestionList,
        required: false,
        default: None,
        placeholder: None,
        description: "Questions the agent should ask during the call. Answers appear \
                      in the call analysis under answer_<fieldName>.",
        operation: Operation::ScheduleCall,
    },
];

/// The credential the connector authenticates with. The API key is sent
/// verbatim in the `Authorization` header.
pub const CREDENTIAL: CredentialDescriptor = CredentialDescriptor {
    name: "telliApi",
    display_name: "telli API",
    documentation_url: "https://docs.telli.com/api",
    fields: &[CredentialField {
        name: "apiKey",
        display_name: "API Key",
        required: true,
    }],
    test_request: TestRequest {
        method: "GET",
        path: "/verify-api-key",
    },
};

/// Fields visible when `operation` is selected, in declaration order.
pub fn fields_for(operation: Operation) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(move |field| field.operation == operation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_default_is_add_contact() {
        assert_eq!(OPERATIONS[0].value, Operation::AddContact);
        assert_eq!(OPERATIONS.len(), 2);
    }

    #[test]
    fn test_add_contact_fields() {
        let fields: Vec<_> = fields_for(Operation::AddContact).collect();
        assert_eq!(fields.len(), 8);

        let required: Vec<_> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(
            required,
            ["externalContactId", "firstName", "lastName", "phoneNumber"]
        );
    }

    #[test]
    fn test_schedule_call_fields() {
        let fields: Vec<_> = fields_for(Operation::ScheduleCall).collect();
        assert_eq!(fields.len(), 6);

        let required: Vec<_> = fields.iter().filter(|f| f.required).map(|f| f.name).collect();
        assert_eq!(required, ["contactId"]);
    }

    #[test]
    fn test_max_retry_days_default() {
        let field = FIELDS.iter().find(|f| f.name == "maxRetryDays").unwrap();
        assert_eq!(field.default, Some(FieldDefault::Number(3)));
        assert_eq!(field.kind, FieldKind::Number);
    }

    #[test]
    fn test_field_names_are_unique_per_operation() {
        for op in [Operation::AddContact, Operation::ScheduleCall] {
            let mut names: Vec<_> = fields_for(op).map(|f| f.name).collect();
            let before = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), before);
        }
    }

    #[test]
    fn test_credential_descriptor() {
        assert_eq!(CREDENTIAL.name, "telliApi");
        assert_eq!(CREDENTIAL.fields.len(), 1);
        assert!(CREDENTIAL.fields[0].required);
        assert_eq!(CREDENTIAL.test_request.method, "GET");
        assert_eq!(CREDENTIAL.test_request.path, "/verify-api-key");
    }
}
