//! The error type returned across the crate boundary.
//!
//! [`DemoError`] folds the domain and application layers together so callers
//! match on one type and still get per-variant hints.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{self, DomainError};

#[derive(Debug, Error, Clone)]
pub enum DemoError {
    /// A selector or pattern id did not parse.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Running a demo or writing its lines failed.
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl DemoError {
    /// What the user can try next.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category().into(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse classification used by front ends to style messages and pick exit
/// codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

impl From<domain::ErrorCategory> for ErrorCategory {
    fn from(category: domain::ErrorCategory) -> Self {
        match category {
            domain::ErrorCategory::Validation => Self::Validation,
            domain::ErrorCategory::NotFound => Self::NotFound,
        }
    }
}

pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_family_is_a_validation_error() {
        let err: DemoError = DomainError::UnknownFamily { value: "9".into() }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("1, 2")));
    }

    #[test]
    fn unknown_pattern_is_not_found() {
        let err: DemoError = DomainError::UnknownPattern { id: "builder".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn failed_write_is_internal_and_keeps_reason() {
        let err: DemoError = ApplicationError::Output {
            reason: "broken pipe".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("broken pipe"));
    }
}
