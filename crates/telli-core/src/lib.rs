//! Business logic for the telli connector.
//!
//! This crate defines the `CallingApi` port that the infrastructure layer
//! implements, the static field catalog consumed by the host's form
//! renderer, and the sequential batch dispatcher that turns input items into
//! API calls. It depends only on `telli-types` -- never on reqwest or any
//! IO crate.

pub mod api;
pub mod catalog;
pub mod dispatch;
pub mod params;
pub mod payload;
pub mod validate;
