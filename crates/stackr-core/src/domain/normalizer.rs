//! Raw input → `(PartialConfig, ProvidedFlags)`.
//!
//! Only dimension-local rules live here. Cross-dimension constraints are
//! the resolver's job. Checks run in a fixed order and the first failure
//! wins:
//!
//! 1. single-valued tokens are parsed
//! 2. `api = none` with examples (unless the backend is convex)
//! 3. project name resolution
//! 4. multi-valued dimensions: frontend, addons, examples

use std::path::Path;
use std::str::FromStr;

use crate::domain::{
    common::{base_name, last_segment, resolve_path},
    entities::{CliInput, PartialConfig, ProvidedFlags, config::dedup},
    error::DomainError,
    value_objects::{Api, Backend, Dimension, SENTINEL_NONE},
};

/// Normalizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub partial: PartialConfig,
    pub provided: ProvidedFlags,
}

/// Normalize raw caller input.
///
/// `validate_name` is the external project-name syntax check; it receives a
/// single path segment and returns a human-readable reason on rejection.
/// `cwd` anchors relative project directories.
pub fn normalize<V>(
    input: &CliInput,
    cwd: &Path,
    validate_name: V,
) -> Result<Normalized, DomainError>
where
    V: Fn(&str) -> Result<(), String>,
{
    let provided = input.provided_flags();
    let mut partial = PartialConfig {
        api: parse_opt(input.api.as_deref())?,
        backend: parse_opt(input.backend.as_deref())?,
        database: parse_opt(input.database.as_deref())?,
        orm: parse_opt(input.orm.as_deref())?,
        runtime: parse_opt(input.runtime.as_deref())?,
        db_setup: parse_opt(input.db_setup.as_deref())?,
        package_manager: parse_opt(input.package_manager.as_deref())?,
        auth: input.auth,
        git: input.git,
        install: input.install,
        ..PartialConfig::default()
    };

    if partial.api == Some(Api::None)
        && has_real_tokens(input.examples.as_deref())
        && partial.backend != Some(Backend::Convex)
    {
        return Err(DomainError::ExamplesRequireApi);
    }

    resolve_project(input, cwd, &validate_name, &mut partial)?;

    partial.frontend = parse_multi(Dimension::Frontend, input.frontend.as_deref())?;
    partial.addons = parse_multi(Dimension::Addons, input.addons.as_deref())?;
    partial.examples = parse_multi(Dimension::Examples, input.examples.as_deref())?;

    Ok(Normalized { partial, provided })
}

fn parse_opt<T>(raw: Option<&str>) -> Result<Option<T>, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    raw.map(str::parse).transpose()
}

fn is_sentinel(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case(SENTINEL_NONE)
}

/// Present and contains anything other than the sentinel.
fn has_real_tokens(tokens: Option<&[String]>) -> bool {
    tokens.is_some_and(|t| t.iter().any(|tok| !is_sentinel(tok)))
}

/// Sentinel alone → empty; sentinel mixed → error; otherwise parsed and
/// deduplicated in first-occurrence order. Empty input counts as absent.
fn parse_multi<T>(
    dimension: Dimension,
    raw: Option<&[String]>,
) -> Result<Option<Vec<T>>, DomainError>
where
    T: FromStr<Err = DomainError> + PartialEq,
{
    let Some(tokens) = raw.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    if tokens.iter().any(|t| is_sentinel(t)) {
        if tokens.len() > 1 {
            return Err(DomainError::SentinelCombined { dimension });
        }
        return Ok(Some(Vec::new()));
    }

    let parsed = tokens
        .iter()
        .map(|t| t.parse::<T>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(dedup(parsed)))
}

/// Explicit name → validate its last segment; otherwise derive the name
/// from the resolved project directory. Neither → leave unset.
fn resolve_project<V>(
    input: &CliInput,
    cwd: &Path,
    validate_name: &V,
    partial: &mut PartialConfig,
) -> Result<(), DomainError>
where
    V: Fn(&str) -> Result<(), String>,
{
    let explicit = input
        .project_name
        .as_deref()
        .filter(|n| !n.trim().is_empty());
    let directory = input
        .project_directory
        .as_deref()
        .filter(|d| !d.trim().is_empty());

    let (name, relative) = match (explicit, directory) {
        (Some(name), dir) => {
            let segment = last_segment(name);
            check_name(segment, validate_name)?;
            let relative = dir.unwrap_or(name);
            let name = if segment == "." {
                base_name(&resolve_path(cwd, name))
            } else {
                segment.to_owned()
            };
            (name, relative)
        }
        (None, Some(dir)) => {
            let derived = base_name(&resolve_path(cwd, dir));
            check_name(&derived, validate_name)?;
            (derived, dir)
        }
        (None, None) => return Ok(()),
    };

    partial.project_dir = Some(resolve_path(cwd, relative));
    partial.relative_path = Some(relative.to_owned());
    partial.project_name = Some(name);
    Ok(())
}

/// Run the external predicate and wrap its rejection.
pub(crate) fn check_name<V>(candidate: &str, validate_name: &V) -> Result<(), DomainError>
where
    V: Fn(&str) -> Result<(), String>,
{
    validate_name(candidate).map_err(|reason| DomainError::InvalidProjectName {
        name: candidate.to_owned(),
        reason,
    })
}
