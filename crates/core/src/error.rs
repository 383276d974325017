//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only caller misuse and malformed values end up here. Business rule
/// rejections (failed validation, duplicate ids, already-ordered items) are
/// reported by services as a plain `false`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure, zero).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A required argument was missing. Carries the parameter name.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_argument(param: &'static str) -> Self {
        Self::InvalidArgument(param)
    }
}

/// Unwrap a required argument or fail with [`DomainError::InvalidArgument`].
pub fn require<T>(value: Option<T>, param: &'static str) -> DomainResult<T> {
    value.ok_or(DomainError::InvalidArgument(param))
}
