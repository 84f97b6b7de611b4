//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The working-directory port could not report a directory.
    #[error("Cannot read the current working directory: {reason}")]
    WorkingDirectoryUnavailable { reason: String },

    /// The working-directory port returned a relative path.
    #[error("Working directory must be absolute, got {path}")]
    RelativeWorkingDirectory { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkingDirectoryUnavailable { .. } => vec![
                "Check that the current directory still exists".into(),
                "Or pass an absolute project directory".into(),
            ],
            Self::RelativeWorkingDirectory { .. } => {
                vec!["This is likely a configuration error".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkingDirectoryUnavailable { .. } | Self::RelativeWorkingDirectory { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}
