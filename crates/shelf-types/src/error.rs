use thiserror::Error;

/// Errors produced while interpreting resource documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("missing field: {field}")]
    MissingField { field: String },

    #[error("field {field} has wrong type: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("{what} must be a JSON object")]
    NotAnObject { what: String },

    #[error("field {field} is {found:?}, expected {expected:?}")]
    Mismatch {
        field: String,
        expected: String,
        found: String,
    },

    #[error("invalid name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TypeError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
        }
    }
}

impl From<serde_json::Error> for TypeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result alias for identity-model operations.
pub type TypeResult<T> = Result<T, TypeError>;
