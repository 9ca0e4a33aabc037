use thiserror::Error;

/// Errors returned by the JSON module.
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("invalid cast: expected {expected}, found {found}")]
    InvalidCast {
        expected: &'static str,
        found: &'static str,
    },
    #[error("key not found: {0}")]
    KeyNotFound(String),
    #[error("format error: {0}")]
    Format(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

impl JsonError {
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    pub fn invalid_cast(expected: &'static str, found: &'static str) -> Self {
        Self::InvalidCast { expected, found }
    }
}
