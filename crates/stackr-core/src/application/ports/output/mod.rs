//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `stackr-adapters` crate provides implementations.

use std::path::PathBuf;

use crate::error::StackrResult;

/// Port for the project-name syntax check.
///
/// Implemented by:
/// - `stackr_adapters::SyntaxNameValidator` (production)
///
/// ## Contract
///
/// - Receives a single path segment, never a full path
/// - Pure: same input, same answer
/// - `Err` carries a human-readable reason
#[cfg_attr(test, mockall::automock)]
pub trait ProjectNameValidator: Send + Sync {
    fn validate(&self, candidate: &str) -> Result<(), String>;
}

/// Port for reading the working directory.
///
/// Implemented by:
/// - `stackr_adapters::ProcessWorkingDirectory` (production)
/// - `stackr_adapters::FixedWorkingDirectory` (testing)
///
/// Read at most once per resolution, never written.
#[cfg_attr(test, mockall::automock)]
pub trait WorkingDirectory: Send + Sync {
    fn current_dir(&self) -> StackrResult<PathBuf>;
}
