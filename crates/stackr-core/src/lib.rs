//! stackr Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for stackr, the
//! stack compatibility resolver, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stackr-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ResolveService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ProjectNameValidator, WorkingDirectory)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      stackr-adapters (Infrastructure)   │
//! │ (SyntaxNameValidator, ProcessWorkingDir)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Normalizer, Cascades, Rules, Resolver) │
//! │            No I/O, no logging           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stackr_core::prelude::*;
//!
//! let service = ResolveService::new(names, working_dir);
//! let input = CliInput {
//!     backend: Some("hono".into()),
//!     frontend: Some(vec!["next".into()]),
//!     ..Default::default()
//! };
//! let resolution = service.resolve(&input).unwrap();
//! println!("{}", resolution.config);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ResolveService,
        ports::{ProjectNameValidator, WorkingDirectory},
    };
    pub use crate::domain::{
        Advisory, CliInput, Dimension, ProjectConfig, Resolution, RuleId, StackDefaults,
    };
    pub use crate::error::{StackrError, StackrResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
