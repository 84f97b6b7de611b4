//! Pure end-to-end resolution.
//!
//! ```text
//! CliInput ─► normalize ─► seed backend ─► cascade ─► defaults ─► RULES ─► ADVISORIES ─► Resolution
//! ```
//!
//! Every phase is a plain function so the application layer can drive them
//! one by one (and log between them). `resolve` is the same pipeline for
//! callers that need no instrumentation.

use std::path::Path;

use crate::domain::{
    cascade,
    defaults::StackDefaults,
    entities::{CliInput, PartialConfig, ProjectConfig, Resolution},
    error::DomainError,
    normalizer::{self, Normalized, check_name},
    rules,
};

/// Resolve raw input into a checked configuration or the first violation.
pub fn resolve<V>(
    input: &CliInput,
    cwd: &Path,
    defaults: &StackDefaults,
    validate_name: V,
) -> Result<Resolution, DomainError>
where
    V: Fn(&str) -> Result<(), String>,
{
    let Normalized {
        mut partial,
        provided,
    } = normalizer::normalize(input, cwd, &validate_name)?;
    defaults.seed_backend(&mut partial);
    cascade::apply(&mut partial, &provided)?;
    let config = complete(partial, cwd, defaults, &validate_name)?;
    rules::check_all(&config)?;
    let advisories = rules::advise(&config);
    Ok(Resolution { config, advisories })
}

/// Default phase. A configured default project name goes through the same
/// name check as an explicit one.
pub(crate) fn complete<V>(
    partial: PartialConfig,
    cwd: &Path,
    defaults: &StackDefaults,
    validate_name: &V,
) -> Result<ProjectConfig, DomainError>
where
    V: Fn(&str) -> Result<(), String>,
{
    if partial.project_name.is_none() {
        check_name(&defaults.project_name, validate_name)?;
    }
    Ok(defaults.fill(partial, cwd))
}
