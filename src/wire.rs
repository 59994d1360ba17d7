//! Decode helpers for raw JSON payloads from the log endpoints.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use crate::errors::ModelError;

/// Decode a raw JSON response body into a model type
pub fn from_json_str<T: DeserializeOwned>(body: &str) -> Result<T, ModelError> {
    let payload: Value = serde_json::from_str(body).map_err(ModelError::Syntax)?;

    from_json_value(payload)
}

/// Decode an already-parsed JSON value into a model type
pub fn from_json_value<T: DeserializeOwned>(payload: Value) -> Result<T, ModelError> {
    let decoded = serde_json::from_value(payload).map_err(ModelError::Shape)?;

    trace!("Decoded {} payload", std::any::type_name::<T>());
    Ok(decoded)
}
