//! Infrastructure layer for the telli connector.
//!
//! Contains the reqwest-based [`client::TelliClient`] implementing the
//! `CallingApi` port defined in `telli-core`, and the configuration loader.

pub mod client;
pub mod config;
