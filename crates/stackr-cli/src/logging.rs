//! Stderr diagnostics for the `stackr` binary.
//!
//! `stackr-core` and `stackr-adapters` emit events while a selection is
//! resolved; this module is the only place a subscriber is installed.
//! Levels follow [`Verbosity`]. A set `RUST_LOG` replaces the computed
//! filter entirely.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events describe a resolution.
const STACKR_TARGETS: [&str; 3] = ["stackr", "stackr_core", "stackr_adapters"];

/// How much of a resolution is narrated on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    /// `--quiet`: errors only.
    Quiet,
    /// Advisories (warnings) and errors.
    Normal,
    /// `-v`: the resolved stack summary.
    Summary,
    /// `-vv`: normalize, cascade, defaults and rules phases.
    Phases,
    /// `-vvv`: trace output, dependencies included.
    Everything,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Summary,
            2 => Self::Phases,
            _ => Self::Everything,
        }
    }

    fn directives(self) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Summary => "info",
            Self::Phases => "debug",
            Self::Everything => return "trace".to_owned(),
        };
        let scoped: Vec<String> = STACKR_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect();
        // Dependencies stay at warn unless everything was requested.
        format!("warn,{}", scoped.join(","))
    }
}

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    // Phase names carry the context; module targets would only add noise.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(verbosity == Verbosity::Everything)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("stackr: diagnostics already initialised: {e}"))?;

    Ok(())
}
