//! # Client Errors
//!
//! Every fallible operation in the crate returns [`ClientError`]. Record
//! construction fails only on bad input; everything that touches the network
//! surfaces the transport's own error unchanged inside
//! [`ClientError::Transport`].

/// Errors raised while wrapping documents or talking to the API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Expected a JSON object for {kind}, found {found}")]
    NotAnObject { kind: String, found: &'static str },
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
    #[error("{kind} has no attribute `{name}`")]
    UnknownAttribute { kind: String, name: String },
    #[error("{kind} is missing field `{field}`")]
    MissingField { kind: String, field: String },
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
}

impl ClientError {
    /// Wraps an arbitrary transport failure.
    pub fn transport(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ClientError::Transport(error.into())
    }

    pub(crate) fn missing(kind: &str, field: &str) -> Self {
        ClientError::MissingField {
            kind: kind.to_string(),
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
