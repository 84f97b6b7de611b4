//! Flags shared by every `stackr` subcommand.
//!
//! Flattened into [`super::Cli`], so `stackr -v check ...` and
//! `stackr check -v ...` mean the same thing.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log the resolution phases to stderr.
    ///
    /// `-v` prints the resolved stack summary, `-vv` every phase
    /// (normalize, cascade, defaults, rules), `-vvv` everything.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log resolution phases (-v, -vv, -vvv)",
        long_help = "Log resolution phases to stderr:
    (none)  - advisories and errors only
    -v      - the resolved stack summary
    -vv     - each phase: normalize, cascade, defaults, rules
    -vvv    - trace output from every crate"
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. Requested JSON is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only errors and requested JSON"
    )]
    pub quiet: bool,

    /// Plain text on every stream. Honours `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Never colour output"
    )]
    pub no_color: bool,

    /// Extra config file layered over the user and `.stackr.toml` files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Config file with [defaults] and [output] tables"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are rendered"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of results on stdout. Also accepted as `[output] format`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Config file value, else human on a TTY and plain otherwise.
    #[default]
    Auto,
    /// Coloured stack table.
    Human,
    /// Stack table without colour.
    Plain,
    /// The resolution as a JSON document.
    Json,
}
