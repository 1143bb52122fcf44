//! Error types for the serialization engine.
//!
//! None of these ever reach a caller of [`render`](crate::render): the
//! renderer recovers from every one of them. They are public so that
//! [`CustomValue`](crate::CustomValue) implementations can report failures
//! and so that the fallible building blocks can be used directly.

use std::fmt;

/// Failure while encoding a value into its structured text form.
#[derive(Debug)]
pub enum RenderError {
    /// serde_json failed to convert or write a value.
    Json(serde_json::Error),
    /// Nesting went past the configured depth limit.
    DepthExceeded(usize),
    /// More values were visited than the configured node budget allows.
    BudgetExceeded(usize),
    /// Encoded bytes were not valid UTF-8.
    Utf8(std::string::FromUtf8Error),
    /// A custom value reported a failure of its own.
    Custom(String),
}

impl RenderError {
    /// Creates a [`RenderError::Custom`] from any displayable message.
    pub fn custom(message: impl fmt::Display) -> Self {
        RenderError::Custom(message.to_string())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Json(e) => write!(f, "JSON error: {e}"),
            RenderError::DepthExceeded(max) => {
                write!(f, "Value nested deeper than {max} levels")
            }
            RenderError::BudgetExceeded(max) => {
                write!(f, "Value has more than {max} nodes")
            }
            RenderError::Utf8(e) => write!(f, "Invalid UTF-8 in output: {e}"),
            RenderError::Custom(msg) => write!(f, "Custom value error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Json(e) => Some(e),
            RenderError::Utf8(e) => Some(e),
            RenderError::DepthExceeded(_)
            | RenderError::BudgetExceeded(_)
            | RenderError::Custom(_) => None,
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Json(err)
    }
}

impl From<std::string::FromUtf8Error> for RenderError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        RenderError::Utf8(err)
    }
}
