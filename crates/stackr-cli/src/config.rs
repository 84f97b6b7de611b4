//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`StackDefaults`]
//! carried in its `defaults` section.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`STACKR_DEFAULTS__BACKEND=express`)
//! 3. `--config FILE`
//! 4. `.stackr.toml` in the current directory
//! 5. User config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use stackr_core::domain::StackDefaults;
use tracing::debug;

use crate::cli::global::OutputFormat;

/// File name of the per-project configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stackr.toml";

/// Environment prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "STACKR";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fallback for every stack dimension the user leaves unset.
    pub defaults: StackDefaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration by layering every source over the built-in
    /// defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// implicit locations it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let user_file = Self::config_path();
        Self::load_from(user_file.as_deref(), config_file.map(PathBuf::as_path))
    }

    fn load_from(user_file: Option<&Path>, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let seed = Config::try_from(&Self::default()).context("Failed to seed")?;
        let mut builder = Config::builder().add_source(seed);

        if let Some(path) = user_file {
            debug!(path = %path.display(), "Reading user config");
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Reading explicit config");
            builder = builder.add_source(File::from(path).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build config")?
            .try_deserialize::<Self>()
            .context("Failed to deserialize config")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness;
    /// `None` when no home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stackr", "stackr")
            .map(|d| d.config_dir().join("config.toml"))
    }
}
