pub mod config;
pub mod input;

pub use crate::domain::DomainError;
pub use config::{Advisory, PartialConfig, ProjectConfig, Resolution};
pub use input::{CliInput, ProvidedFlags};
