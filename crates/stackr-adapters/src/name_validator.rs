//! Project-name syntax validator.
//!
//! The checks mirror what package managers and common filesystems accept for
//! a directory that will hold a JavaScript workspace.

use stackr_core::application::ports::ProjectNameValidator;
use thiserror::Error;

/// Longest name accepted, in characters.
pub const MAX_NAME_LEN: usize = 255;

const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Why a project name was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Project name cannot be empty")]
    Empty,

    #[error("Project name cannot exceed {MAX_NAME_LEN} characters")]
    TooLong,

    #[error("Project name cannot start with a dot (except for '.')")]
    LeadingDot,

    #[error("Project name cannot start with a dash")]
    LeadingDash,

    #[error("Project name contains invalid character '{0}'")]
    InvalidChar(char),

    #[error("Project name contains a control character")]
    ControlChar,

    #[error("Project name is reserved: '{0}'")]
    Reserved(String),
}

/// Validates project names by syntax alone; never touches the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxNameValidator;

impl SyntaxNameValidator {
    pub fn new() -> Self {
        Self
    }

    /// Typed form of [`ProjectNameValidator::validate`].
    pub fn check(&self, name: &str) -> Result<(), NameError> {
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(NameError::TooLong);
        }
        if name == "." {
            return Ok(());
        }
        if name.starts_with('.') {
            return Err(NameError::LeadingDot);
        }
        if name.starts_with('-') {
            return Err(NameError::LeadingDash);
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(NameError::InvalidChar(c));
        }
        if name.chars().any(char::is_control) {
            return Err(NameError::ControlChar);
        }
        if name.eq_ignore_ascii_case("node_modules") {
            return Err(NameError::Reserved(name.to_string()));
        }
        Ok(())
    }
}

impl ProjectNameValidator for SyntaxNameValidator {
    fn validate(&self, name: &str) -> Result<(), String> {
        self.check(name).map_err(|e| e.to_string())
    }
}
