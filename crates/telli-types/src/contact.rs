//! Wire types for the add-contact operation.

use std::collections::HashMap;

use serde::Serialize;

/// Request body for `POST /add-contact`.
///
/// Field names match the telli API exactly. Optional fields are skipped
/// entirely when absent -- the API must never see a `null` or empty-string
/// key for a field the caller did not supply.
#[derive(Debug, Clone, Serialize)]
pub struct AddContactRequest {
    pub first_name: String,
    pub last_name: String,
    /// E.164 phone number, validated before the request is built.
    pub phone_number: String,
    /// The caller's own identifier for the contact.
    pub external_contact_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    /// IANA timezone identifier (e.g. `Europe/Berlin`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Custom variables forwarded to the downstream AI calling agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_details: Option<HashMap<String, String>>,
}
