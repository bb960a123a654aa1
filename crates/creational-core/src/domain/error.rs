use thiserror::Error;

/// Root domain error type.
///
/// Building products never fails; the only domain failures come from
/// turning user text into a selector.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown product family '{value}'")]
    UnknownFamily { value: String },

    #[error("Unknown creator variant '{value}'")]
    UnknownVariant { value: String },

    #[error("Unknown pattern '{id}'")]
    UnknownPattern { id: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFamily { value } => vec![
                format!("'{}' is not a product family", value),
                "Available families: 1, 2".into(),
                "Example: creational abstract-factory --family 2".into(),
            ],
            Self::UnknownVariant { value } => vec![
                format!("'{}' is not a creator variant", value),
                "Available creators: 1, 2".into(),
                "Example: creational factory-method --creator 1".into(),
            ],
            Self::UnknownPattern { id } => vec![
                format!("No pattern registered as '{}'", id),
                "Try: creational list".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownFamily { .. } | Self::UnknownVariant { .. } => ErrorCategory::Validation,
            Self::UnknownPattern { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
