//! Infrastructure adapters for stackr.
//!
//! This crate implements the ports defined in `stackr-core::application::ports`.
//! It contains everything that touches the process environment.

pub mod name_validator;
pub mod package_manager;
pub mod working_dir;

// Re-export commonly used adapters
pub use name_validator::{NameError, SyntaxNameValidator};
pub use package_manager::{USER_AGENT_VAR, detect_from_env, detect_package_manager};
pub use working_dir::{FixedWorkingDirectory, ProcessWorkingDirectory};
