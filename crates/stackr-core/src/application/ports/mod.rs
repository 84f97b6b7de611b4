//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackr-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProjectNameValidator`: project-name syntax check
//!   - `WorkingDirectory`: current directory accessor
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ProjectNameValidator, WorkingDirectory};

#[cfg(test)]
pub use output::{MockProjectNameValidator, MockWorkingDirectory};
