//! Working-directory adapters.

use std::path::{Path, PathBuf};

use stackr_core::{
    application::{ApplicationError, ports::WorkingDirectory},
    error::StackrResult,
};
use tracing::debug;

/// Reads the process working directory through `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl ProcessWorkingDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current_dir(&self) -> StackrResult<PathBuf> {
        let cwd = std::env::current_dir().map_err(|e| {
            let reason = e.to_string();
            ApplicationError::WorkingDirectoryUnavailable { reason }
        })?;
        debug!(cwd = %cwd.display(), "Read working directory");
        Ok(cwd)
    }
}

/// A fixed directory, for tests and for callers resolving on behalf of
/// another location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedWorkingDirectory {
    path: PathBuf,
}

impl FixedWorkingDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WorkingDirectory for FixedWorkingDirectory {
    fn current_dir(&self) -> StackrResult<PathBuf> {
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn process_directory_is_absolute() {
        let cwd = ProcessWorkingDirectory::new().current_dir().unwrap();
        assert!(cwd.is_absolute());
    }

    #[test]
    fn fixed_directory_returns_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let wd = FixedWorkingDirectory::new(dir.path());
        assert_eq!(wd.current_dir().unwrap(), dir.path());
        assert_eq!(wd.path(), dir.path());
    }
}
