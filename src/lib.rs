//! Client-side models for the unified CRM log endpoints.
//!
//! This crate is a leaf: it holds the log response record
//! ([`LogEntryRecord`]), the mapping conversion every model type implements
//! ([`ToMapping`]), and the helpers that decode raw JSON payloads into
//! records. Transport and the rest of the client live elsewhere.

pub mod errors;
pub mod mapping;
pub mod models;
pub mod wire;

pub use errors::ModelError;
pub use mapping::{Mapping, ToMapping};
pub use models::LogEntryRecord;
