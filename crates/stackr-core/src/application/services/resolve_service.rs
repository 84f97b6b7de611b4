//! Resolve Service - main application orchestrator.
//!
//! This service drives the resolution pipeline phase by phase:
//! 1. Read the working directory (once)
//! 2. Normalize raw input
//! 3. Apply backend-mode cascades
//! 4. Fill defaults
//! 5. Walk the rule table, then collect advisories
//!
//! The domain functions it calls are pure; logging happens here, between
//! phases.

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ProjectNameValidator, WorkingDirectory},
    },
    domain::{
        CliInput, Normalized, Resolution, StackDefaults, cascade, normalizer,
        resolver, rules,
    },
    error::StackrResult,
};

/// Main resolution service.
pub struct ResolveService {
    names: Box<dyn ProjectNameValidator>,
    working_dir: Box<dyn WorkingDirectory>,
    defaults: StackDefaults,
}

impl ResolveService {
    /// Create a new resolve service with the given adapters and the
    /// declared defaults.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stackr_core::application::{ResolveService, ports::*};
    ///
    /// let service = ResolveService::new(
    ///     names,       // impl ProjectNameValidator
    ///     working_dir, // impl WorkingDirectory
    /// );
    /// ```
    pub fn new(
        names: Box<dyn ProjectNameValidator>,
        working_dir: Box<dyn WorkingDirectory>,
    ) -> Self {
        Self {
            names,
            working_dir,
            defaults: StackDefaults::default(),
        }
    }

    /// Replace the declared defaults (e.g. with values from a config file).
    pub fn with_defaults(mut self, defaults: StackDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn defaults(&self) -> &StackDefaults {
        &self.defaults
    }

    /// Resolve raw input into a checked configuration.
    ///
    /// Fails with the first violated rule; advisories are returned with the
    /// configuration and logged at warn level.
    #[instrument(skip_all)]
    pub fn resolve(&self, input: &CliInput) -> StackrResult<Resolution> {
        let cwd = self.current_dir()?;
        let validate = |candidate: &str| self.names.validate(candidate);

        let Normalized {
            mut partial,
            provided,
        } = normalizer::normalize(input, &cwd, &validate)?;
        debug!(
            provided = ?provided.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
            "Input normalized"
        );

        self.defaults.seed_backend(&mut partial);
        cascade::apply(&mut partial, &provided)?;
        debug!(backend = ?partial.backend, "Backend cascades applied");

        let config = resolver::complete(partial, &cwd, &self.defaults, &validate)?;
        debug!(%config, "Defaults filled");

        rules::check_all(&config)
            .inspect_err(|e| debug!(rule = %e.rule_id(), "Rule violated"))?;

        let advisories = rules::advise(&config);
        for advisory in &advisories {
            warn!(rule = %advisory.rule_id, "{}", advisory.message);
        }

        info!(
            project = config.project_name(),
            backend = %config.backend(),
            "Stack resolved"
        );
        Ok(Resolution { config, advisories })
    }

    fn current_dir(&self) -> StackrResult<PathBuf> {
        let cwd = self.working_dir.current_dir()?;
        if !cwd.is_absolute() {
            let err = ApplicationError::RelativeWorkingDirectory { path: cwd };
            return Err(err.into());
        }
        Ok(cwd)
    }
}
