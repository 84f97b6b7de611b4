//! Application layer for stackr.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ResolveService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::ResolveService;

// Re-export port traits (for adapter implementation)
pub use ports::{ProjectNameValidator, WorkingDirectory};

pub use error::ApplicationError;
