use thiserror::Error;

/// Errors surfaced while decoding wire payloads into model types.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid JSON payload: {0}")]
    Syntax(serde_json::Error),

    #[error("Payload shape mismatch: {0}")]
    Shape(serde_json::Error),
}
