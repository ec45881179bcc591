//! Form-schema descriptors consumed by the host's form renderer.
//!
//! Purely descriptive metadata -- no validation happens here. The host
//! renders the fields for the selected operation, applies the declared
//! defaults and placeholders, and hands resolved values back to the
//! dispatcher as per-item JSON objects.

use serde::Serialize;

use crate::operation::Operation;

/// One selectable operation, as shown in the host's operation dropdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub value: Operation,
    pub description: &'static str,
    /// Short imperative label for the host's action list.
    pub action: &'static str,
}

/// Kind of input widget a field is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    MultilineText,
    /// Numeric input.
    Number,
    /// Repeatable key/value rows.
    KeyValueList,
    /// Repeatable question rows (fieldName, neededInformation,
    /// exampleQuestion, responseFormat).
    QuestionList,
}

/// Default value pre-filled by the host form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldDefault {
    Text(&'static str),
    Number(i64),
}

/// A single visible input field for one operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Parameter name the host hands back with the item values.
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Repeatable list fields start out empty and carry no default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    pub description: &'static str,
    /// The operation this field is visible for.
    pub operation: Operation,
}

/// The credential the connector requires, plus how the host can verify it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
    pub name: &'static str,
    pub display_name: &'static str,
    pub documentation_url: &'static str,
    /// Fields the host prompts for when creating the credential.
    pub fields: &'static [CredentialField],
    /// Request the host issues to check the credential is valid.
    pub test_request: TestRequest,
}

/// One input field of a credential form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialField {
    pub name: &'static str,
    pub display_name: &'static str,
    pub required: bool,
}

/// A bare request descriptor for credential verification.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    pub method: &'static str,
    /// Path relative to the configured base URL.
    pub path: &'static str,
}
