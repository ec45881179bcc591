//! Shared domain types for the telli connector.
//!
//! This crate contains the types used across the connector: the operation
//! selector, the wire payload structs for the telli calling API, the
//! field-schema and credential descriptors consumed by the host's form
//! renderer, connector configuration, and the error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod call;
pub mod config;
pub mod contact;
pub mod error;
pub mod operation;
pub mod schema;
