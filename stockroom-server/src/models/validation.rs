//! Validation error types

use std::fmt;

/// Request input that failed to parse into a typed model
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// JSON body missing, malformed, or with missing/mistyped fields
    Body { reason: String },

    /// Path segment that doesn't parse (e.g., non-integer id)
    Path { field: &'static str, reason: String },

    /// Query string parameter that doesn't parse
    Query { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
            Self::Path { field, reason } => write!(f, "invalid {}: {}", field, reason),
            Self::Query { reason } => write!(f, "invalid query parameters: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
