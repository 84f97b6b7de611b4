//! Backend-mode cascades.
//!
//! `backend = convex` and `backend = none` replace the whole server side, so
//! they force auth, database, orm, api, runtime and db-setup off. A value the
//! caller *explicitly* chose is never overwritten silently: every conflicting
//! flag is collected and reported together. Defaulted values are simply
//! replaced.
//!
//! This is the only place that reports more than one violation at a time.

use crate::domain::{
    capabilities,
    entities::{PartialConfig, ProvidedFlags},
    error::DomainError,
    value_objects::{
        Api, Backend, Database, DatabaseSetup, Dimension, Example, Frontend, Orm, Runtime,
    },
};

/// Apply the cascades in order: convex, none, then the runtime-none check.
pub fn apply(partial: &mut PartialConfig, provided: &ProvidedFlags) -> Result<(), DomainError> {
    match partial.backend {
        Some(backend @ Backend::Convex) => {
            reject_conflicts(backend, partial, provided)?;
            reject_frontends(backend, partial, provided)?;
            force_off(partial);
            partial.examples = Some(vec![Example::Todo]);
        }
        Some(backend @ Backend::None) => {
            reject_conflicts(backend, partial, provided)?;
            force_off(partial);
            partial.examples = Some(Vec::new());
        }
        Some(backend) => {
            if provided.contains(Dimension::Backend)
                && provided.contains(Dimension::Runtime)
                && partial.runtime == Some(Runtime::None)
            {
                return Err(DomainError::RuntimeNoneRequiresBackendMode { backend });
            }
        }
        None => {}
    }
    Ok(())
}

/// Collect every explicitly provided, non-off server-side flag.
fn reject_conflicts(
    backend: Backend,
    partial: &PartialConfig,
    provided: &ProvidedFlags,
) -> Result<(), DomainError> {
    let mut flags = Vec::new();

    if provided.contains(Dimension::Auth) && partial.auth == Some(true) {
        flags.push(Dimension::Auth.flag().to_owned());
    }
    let database = partial.database.filter(|v| !v.is_off());
    let orm = partial.orm.filter(|v| !v.is_off());
    let api = partial.api.filter(|v| !v.is_off());
    let runtime = partial.runtime.filter(|v| !v.is_off());
    let db_setup = partial.db_setup.filter(|v| !v.is_off());
    let explicit = [
        (Dimension::Database, database.map(|v| v.to_string())),
        (Dimension::Orm, orm.map(|v| v.to_string())),
        (Dimension::Api, api.map(|v| v.to_string())),
        (Dimension::Runtime, runtime.map(|v| v.to_string())),
        (Dimension::DbSetup, db_setup.map(|v| v.to_string())),
    ];
    for (dimension, value) in explicit {
        match value {
            Some(value) if provided.contains(dimension) => {
                flags.push(format!("{} {value}", dimension.flag()));
            }
            _ => {}
        }
    }
    if backend == Backend::None
        && provided.contains(Dimension::Examples)
        && partial.examples.as_ref().is_some_and(|ex| !ex.is_empty())
    {
        flags.push(Dimension::Examples.flag().to_owned());
    }

    if flags.is_empty() {
        Ok(())
    } else {
        Err(DomainError::IncompatibleWithBackend { backend, flags })
    }
}

/// Frontends the backend cannot serve, in selection order.
fn reject_frontends(
    backend: Backend,
    partial: &PartialConfig,
    provided: &ProvidedFlags,
) -> Result<(), DomainError> {
    if !provided.contains(Dimension::Frontend) {
        return Ok(());
    }
    let banned: Vec<_> = partial
        .frontend
        .iter()
        .flatten()
        .copied()
        .filter(|fe| !serves_convex(*fe))
        .collect();
    if banned.is_empty() {
        Ok(())
    } else {
        Err(DomainError::FrontendsIncompatibleWithBackend {
            backend,
            frontends: banned,
        })
    }
}

fn serves_convex(frontend: Frontend) -> bool {
    match capabilities::find_frontend(frontend) {
        Some(def) => def.supports_convex,
        None => true,
    }
}

fn force_off(partial: &mut PartialConfig) {
    partial.auth = Some(false);
    partial.database = Some(Database::None);
    partial.orm = Some(Orm::None);
    partial.api = Some(Api::None);
    partial.runtime = Some(Runtime::None);
    partial.db_setup = Some(DatabaseSetup::None);
}
