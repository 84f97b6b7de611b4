//! Implementation of the `stackr resolve` command.

use std::path::Path;

use stackr_adapters::{ProcessWorkingDirectory, SyntaxNameValidator, detect_from_env};
use stackr_core::{
    application::ResolveService,
    domain::{CliInput, ProjectConfig, Resolution, StackDefaults},
};
use tracing::{debug, instrument};

use crate::{
    cli::ResolveArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: ResolveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let json = args.json || output.is_json();

    let mut input = input_from_args(&args);
    if let Some(path) = &args.input {
        input = read_input_file(path)?.merged_with(input);
    }
    debug!(provided = input.provided_flags().len(), "Collected input");

    let service = ResolveService::new(
        Box::new(SyntaxNameValidator::new()),
        Box::new(ProcessWorkingDirectory::new()),
    )
    .with_defaults(effective_defaults(config.defaults));

    let resolution = service.resolve(&input)?;

    if json {
        output.json(&resolution)?;
    } else {
        render(&resolution, &output)?;
    }
    Ok(())
}

/// Translate flags into the core's raw input.  Only flags the user passed
/// become `Some`, so the cascades can tell explicit choices from defaults.
fn input_from_args(args: &ResolveArgs) -> CliInput {
    CliInput {
        project_name: args.project_name.clone(),
        project_directory: args.directory.clone(),
        api: args.api.clone(),
        backend: args.backend.clone(),
        database: args.database.clone(),
        orm: args.orm.clone(),
        auth: switch(args.auth, args.no_auth),
        runtime: args.runtime.clone(),
        db_setup: args.db_setup.clone(),
        package_manager: args.package_manager.clone(),
        frontend: args.frontend.clone(),
        addons: args.addons.clone(),
        examples: args.examples.clone(),
        git: switch(args.git, args.no_git),
        install: switch(args.install, args.no_install),
    }
}

fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn read_input_file(path: &Path) -> CliResult<CliInput> {
    if !path.exists() {
        return Err(CliError::InputFileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str::<CliInput>(&text)
        .with_cli_context(|| format!("Malformed input file {}", path.display()))
}

/// The invoking package manager, when known, replaces the configured one.
fn effective_defaults(mut defaults: StackDefaults) -> StackDefaults {
    if let Some(pm) = detect_from_env() {
        defaults.package_manager = pm;
    }
    defaults
}

fn render(resolution: &Resolution, output: &OutputManager) -> CliResult<()> {
    let config = &resolution.config;
    output.header(&format!("Resolved stack for '{}'", config.project_name()))?;
    for (label, value) in rows(config) {
        output.field(label, &value)?;
    }
    for advisory in &resolution.advisories {
        output.warning(&format!("{} ({})", advisory.message, advisory.rule_id))?;
    }
    output.success("Configuration is compatible")?;
    Ok(())
}

fn rows(config: &ProjectConfig) -> Vec<(&'static str, String)> {
    fn list<T: ToString>(items: &[T]) -> String {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.iter().map(T::to_string).collect::<Vec<_>>().join(", ")
        }
    }

    vec![
        ("directory", config.project_dir().display().to_string()),
        ("frontend", list(config.frontend())),
        ("backend", config.backend().to_string()),
        ("runtime", config.runtime().to_string()),
        ("api", config.api().to_string()),
        ("database", config.database().to_string()),
        ("orm", config.orm().to_string()),
        ("db-setup", config.db_setup().to_string()),
        ("auth", config.auth().to_string()),
        ("addons", list(config.addons())),
        ("examples", list(config.examples())),
        ("package manager", config.package_manager().to_string()),
        ("git", config.git().to_string()),
        ("install", config.install().to_string()),
    ]
}
