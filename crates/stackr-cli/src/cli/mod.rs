//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here: stack tokens stay plain
//! strings so that the core reports unknown values with its own allowed list.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackr",
    bin_name = "stackr",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resolve and check a full-stack project configuration",
    long_about = "stackr turns a partial set of stack choices into a complete, \
                  compatible project configuration, or explains which rule \
                  the choices break.",
    after_help = "EXAMPLES:\n\
        \x20 stackr resolve my-app --backend hono --database sqlite --orm drizzle\n\
        \x20 stackr check --frontend next,native-nativewind --json\n\
        \x20 stackr list --dimension frontend\n\
        \x20 stackr completions bash > /usr/share/bash-completion/completions/stackr",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve stack choices into a checked configuration.
    #[command(
        visible_alias = "check",
        about = "Resolve and check a stack configuration",
        after_help = "EXAMPLES:\n\
            \x20 stackr resolve my-app --backend hono --frontend next --api trpc\n\
            \x20 stackr resolve --backend convex --frontend react-router\n\
            \x20 stackr resolve --input stack.json --no-install --json"
    )]
    Resolve(ResolveArgs),

    /// List allowed tokens per dimension.
    #[command(
        visible_alias = "ls",
        about = "List allowed values",
        after_help = "EXAMPLES:\n\
            \x20 stackr list\n\
            \x20 stackr list --dimension db-setup\n\
            \x20 stackr list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackr completions bash > ~/.local/share/bash-completion/completions/stackr\n\
            \x20 stackr completions zsh  > ~/.zfunc/_stackr\n\
            \x20 stackr completions fish > ~/.config/fish/completions/stackr.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the stackr configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackr config get defaults.backend\n\
            \x20 stackr config list\n\
            \x20 stackr config path"
    )]
    Config(ConfigCommands),
}

// ── resolve ───────────────────────────────────────────────────────────────────

/// Arguments for `stackr resolve`.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Project directory, relative to the current directory.  Its last
    /// segment becomes the project name unless `--project-name` is given.
    #[arg(value_name = "DIR", help = "Project directory")]
    pub directory: Option<String>,

    #[arg(long = "project-name", value_name = "NAME", help = "Project name")]
    pub project_name: Option<String>,

    #[arg(long, value_name = "API", help = "API layer (trpc, orpc, none)")]
    pub api: Option<String>,

    #[arg(long, value_name = "BACKEND", help = "Backend framework")]
    pub backend: Option<String>,

    #[arg(long, value_name = "DATABASE", help = "Database engine")]
    pub database: Option<String>,

    #[arg(long, value_name = "ORM", help = "ORM / ODM")]
    pub orm: Option<String>,

    #[arg(long, overrides_with = "no_auth", help = "Include authentication")]
    pub auth: bool,

    #[arg(
        long = "no-auth",
        overrides_with = "auth",
        help = "Exclude authentication"
    )]
    pub no_auth: bool,

    #[arg(long, value_name = "RUNTIME", help = "Server runtime")]
    pub runtime: Option<String>,

    #[arg(
        long = "db-setup",
        value_name = "SETUP",
        help = "Database provisioning"
    )]
    pub db_setup: Option<String>,

    #[arg(long = "package-manager", value_name = "PM", help = "Package manager")]
    pub package_manager: Option<String>,

    /// Comma-separated or repeated.  `none` alone selects no frontend.
    #[arg(
        long,
        value_delimiter = ',',
        value_name = "FRONTEND",
        help = "Frontends"
    )]
    pub frontend: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',', value_name = "ADDON", help = "Add-ons")]
    pub addons: Option<Vec<String>>,

    #[arg(long, value_delimiter = ',', value_name = "EXAMPLE", help = "Examples")]
    pub examples: Option<Vec<String>>,

    #[arg(long, overrides_with = "no_git", help = "Initialise a git repository")]
    pub git: bool,

    #[arg(
        long = "no-git",
        overrides_with = "git",
        help = "Skip git initialisation"
    )]
    pub no_git: bool,

    #[arg(long, overrides_with = "no_install", help = "Install dependencies")]
    pub install: bool,

    #[arg(
        long = "no-install",
        overrides_with = "install",
        help = "Skip dependency installation"
    )]
    pub no_install: bool,

    /// JSON file holding the same fields (camelCase); flags win over it.
    #[arg(long, value_name = "FILE", help = "Read choices from a JSON file")]
    pub input: Option<PathBuf>,

    /// Shorthand for `--output-format json`.
    #[arg(long, help = "Print the resolution as JSON")]
    pub json: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackr list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Restrict to one dimension, e.g. `frontend` or `db-setup`.
    #[arg(short = 'd', long = "dimension", value_name = "DIMENSION")]
    pub dimension: Option<String>,

    /// Table for reading, JSON for tooling.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "How the option list is rendered"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `dimension=token` per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackr completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackr config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.backend`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    fn resolve_args(args: &[&str]) -> ResolveArgs {
        let argv = ["stackr", "resolve"].iter().chain(args).copied();
        match Cli::parse_from(argv).command {
            Commands::Resolve(args) => args,
            other => panic!("expected Resolve command, got {other:?}"),
        }
    }

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn check_is_an_alias_for_resolve() {
        let cli = Cli::parse_from(["stackr", "check", "--backend", "hono"]);
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }

    #[test]
    fn multi_valued_flags_split_on_commas() {
        let args = resolve_args(&[
            "--frontend",
            "next,native-nativewind",
            "--addons",
            "biome",
        ]);
        assert_eq!(
            args.frontend,
            Some(vec!["next".to_string(), "native-nativewind".to_string()])
        );
        assert_eq!(args.addons, Some(vec!["biome".to_string()]));
        assert_eq!(args.examples, None);
    }

    #[test]
    fn repeated_multi_valued_flags_accumulate() {
        let args = resolve_args(&["--addons", "biome", "--addons", "husky"]);
        assert_eq!(
            args.addons,
            Some(vec!["biome".to_string(), "husky".to_string()])
        );
    }

    #[test]
    fn directory_is_positional() {
        let args = resolve_args(&["apps/web", "--backend", "express"]);
        assert_eq!(args.directory.as_deref(), Some("apps/web"));
        assert_eq!(args.backend.as_deref(), Some("express"));
    }

    #[test]
    fn last_of_auth_and_no_auth_wins() {
        let args = resolve_args(&["--auth", "--no-auth"]);
        assert!(!args.auth);
        assert!(args.no_auth);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stackr", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_set_is_not_offered() {
        let result = Cli::try_parse_from(["stackr", "config", "set", "defaults.backend", "hono"]);
        assert!(result.is_err());
    }
}
