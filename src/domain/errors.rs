use serde::Serialize;
use thiserror::Error;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed ({} violation(s))", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error("resource not found")]
    NotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
