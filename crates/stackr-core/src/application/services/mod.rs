//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a stack".

pub mod resolve_service;

pub use resolve_service::ResolveService;
