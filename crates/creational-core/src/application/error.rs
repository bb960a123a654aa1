//! Application layer errors.
//!
//! These errors represent failures in orchestration, not pattern logic.
//! Selector parsing errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running a demo.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A demo was asked to run with no factories or creators selected.
    #[error("Nothing selected for {pattern}")]
    NothingSelected { pattern: &'static str },

    /// The console port failed to write a line.
    #[error("Output failed: {reason}")]
    Output { reason: String },

    /// Console buffer lock poisoned.
    #[error("Console lock poisoned")]
    ConsoleLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NothingSelected { pattern } => vec![
                format!("Select at least one variant for {}", pattern),
                "Omit the selection flags to run every variant".into(),
                "Check the demo section of your config file".into(),
            ],
            Self::Output { reason } => vec![
                format!("Writing output failed: {}", reason),
                "Check that standard output is still open".into(),
            ],
            Self::ConsoleLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NothingSelected { .. } => ErrorCategory::Validation,
            Self::Output { .. } | Self::ConsoleLockError => ErrorCategory::Internal,
        }
    }
}
