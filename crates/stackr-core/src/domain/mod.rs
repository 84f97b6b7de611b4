// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for stackr.
//!
//! This module contains the whole compatibility engine as pure functions
//! over in-memory values. The working directory and the project-name check
//! come in as arguments; nothing here performs I/O.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, environment, or process access
//! - **No logging**: Only std library + thiserror + serde
//! - **Immutable output**: `ProjectConfig` exposes accessors only
//! - **Table-driven rules**: capabilities and rules are static data
//!
// Public API - what the world sees
pub mod capabilities;
pub mod cascade;
pub mod common;
pub mod defaults;
pub mod entities;
pub mod error;
pub mod normalizer;
pub mod resolver;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use defaults::StackDefaults;
pub use entities::{Advisory, CliInput, PartialConfig, ProjectConfig, ProvidedFlags, Resolution};
pub use error::{DomainError, ErrorCategory};
pub use normalizer::Normalized;
pub use resolver::resolve;
pub use rules::{ADVISORIES, RULES, RuleId};
pub use value_objects::{
    Addon, Api, Backend, Database, DatabaseSetup, Dimension, Example, Frontend, Orm,
    PackageManager, Runtime, SENTINEL_NONE,
};
