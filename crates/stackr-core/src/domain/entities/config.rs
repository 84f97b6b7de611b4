//! Partial and resolved stack configurations.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    defaults::StackDefaults,
    rules::RuleId,
    value_objects::{
        Addon, Api, Backend, Database, DatabaseSetup, Example, Frontend, Orm, PackageManager,
        Runtime,
    },
};

// ── Partial ───────────────────────────────────────────────────────────────────

/// Normalizer output: only the dimensions the caller touched, already
/// parsed, deduplicated and sentinel-free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub project_name: Option<String>,
    pub project_dir: Option<PathBuf>,
    pub relative_path: Option<String>,
    pub api: Option<Api>,
    pub backend: Option<Backend>,
    pub database: Option<Database>,
    pub orm: Option<Orm>,
    pub auth: Option<bool>,
    pub runtime: Option<Runtime>,
    pub db_setup: Option<DatabaseSetup>,
    pub package_manager: Option<PackageManager>,
    pub frontend: Option<Vec<Frontend>>,
    pub addons: Option<Vec<Addon>>,
    pub examples: Option<Vec<Example>>,
    pub git: Option<bool>,
    pub install: Option<bool>,
}

// ── Resolved ──────────────────────────────────────────────────────────────────

/// A fully populated, rule-checked stack configuration.
///
/// Only the resolver constructs one. Every invariant of the rule table
/// holds on any value a caller can observe, so downstream generators need
/// no further checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    project_name: String,
    project_dir: PathBuf,
    relative_path: String,
    frontend: Vec<Frontend>,
    backend: Backend,
    runtime: Runtime,
    database: Database,
    orm: Orm,
    auth: bool,
    addons: Vec<Addon>,
    examples: Vec<Example>,
    git: bool,
    package_manager: PackageManager,
    install: bool,
    db_setup: DatabaseSetup,
    api: Api,
}

impl ProjectConfig {
    pub(crate) fn builder() -> ProjectConfigBuilder {
        ProjectConfigBuilder::default()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
    pub fn frontend(&self) -> &[Frontend] {
        &self.frontend
    }
    pub const fn backend(&self) -> Backend {
        self.backend
    }
    pub const fn runtime(&self) -> Runtime {
        self.runtime
    }
    pub const fn database(&self) -> Database {
        self.database
    }
    pub const fn orm(&self) -> Orm {
        self.orm
    }
    pub const fn auth(&self) -> bool {
        self.auth
    }
    pub fn addons(&self) -> &[Addon] {
        &self.addons
    }
    pub fn examples(&self) -> &[Example] {
        &self.examples
    }
    pub const fn git(&self) -> bool {
        self.git
    }
    pub const fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
    pub const fn install(&self) -> bool {
        self.install
    }
    pub const fn db_setup(&self) -> DatabaseSetup {
        self.db_setup
    }
    pub const fn api(&self) -> Api {
        self.api
    }
}

impl fmt::Display for ProjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |items: Vec<String>| {
            if items.is_empty() {
                "none".to_string()
            } else {
                items.join(", ")
            }
        };
        write!(
            f,
            "{} [{}] backend={} runtime={} api={} database={} orm={} auth={} db-setup={} addons=[{}] examples=[{}]",
            self.project_name,
            list(self.frontend.iter().map(ToString::to_string).collect()),
            self.backend,
            self.runtime,
            self.api,
            self.database,
            self.orm,
            self.auth,
            self.db_setup,
            list(self.addons.iter().map(ToString::to_string).collect()),
            list(self.examples.iter().map(ToString::to_string).collect()),
        )
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// In-crate builder. Starts from [`StackDefaults::default`] so tests only
/// spell out the fields they care about.
#[derive(Debug, Clone)]
pub(crate) struct ProjectConfigBuilder {
    inner: ProjectConfig,
}

impl Default for ProjectConfigBuilder {
    fn default() -> Self {
        let defaults = StackDefaults::default();
        Self {
            inner: ProjectConfig {
                project_dir: PathBuf::from(&defaults.project_name),
                relative_path: defaults.project_name.clone(),
                project_name: defaults.project_name,
                frontend: defaults.frontend,
                backend: defaults.backend,
                runtime: defaults.runtime,
                database: defaults.database,
                orm: defaults.orm,
                auth: defaults.auth,
                addons: defaults.addons,
                examples: defaults.examples,
                git: defaults.git,
                package_manager: defaults.package_manager,
                install: defaults.install,
                db_setup: defaults.db_setup,
                api: defaults.api,
            },
        }
    }
}

impl ProjectConfigBuilder {
    pub fn project(mut self, name: String, dir: PathBuf, relative_path: String) -> Self {
        self.inner.project_name = name;
        self.inner.project_dir = dir;
        self.inner.relative_path = relative_path;
        self
    }
    pub fn frontend(mut self, frontend: Vec<Frontend>) -> Self {
        self.inner.frontend = dedup(frontend);
        self
    }
    pub fn backend(mut self, backend: Backend) -> Self {
        self.inner.backend = backend;
        self
    }
    pub fn runtime(mut self, runtime: Runtime) -> Self {
        self.inner.runtime = runtime;
        self
    }
    pub fn database(mut self, database: Database) -> Self {
        self.inner.database = database;
        self
    }
    pub fn orm(mut self, orm: Orm) -> Self {
        self.inner.orm = orm;
        self
    }
    pub fn auth(mut self, auth: bool) -> Self {
        self.inner.auth = auth;
        self
    }
    pub fn addons(mut self, addons: Vec<Addon>) -> Self {
        self.inner.addons = dedup(addons);
        self
    }
    pub fn examples(mut self, examples: Vec<Example>) -> Self {
        self.inner.examples = dedup(examples);
        self
    }
    pub fn git(mut self, git: bool) -> Self {
        self.inner.git = git;
        self
    }
    pub fn package_manager(mut self, package_manager: PackageManager) -> Self {
        self.inner.package_manager = package_manager;
        self
    }
    pub fn install(mut self, install: bool) -> Self {
        self.inner.install = install;
        self
    }
    pub fn db_setup(mut self, db_setup: DatabaseSetup) -> Self {
        self.inner.db_setup = db_setup;
        self
    }
    pub fn api(mut self, api: Api) -> Self {
        self.inner.api = api;
        self
    }
    pub fn build(self) -> ProjectConfig {
        self.inner
    }
}

/// Remove duplicates, keeping the first occurrence of each value.
pub(crate) fn dedup<T: PartialEq>(items: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

// ── Resolution output ─────────────────────────────────────────────────────────

/// A non-fatal finding attached to a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub rule_id: RuleId,
    pub message: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Successful resolution: the configuration plus any advisories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub config: ProjectConfig,
    pub advisories: Vec<Advisory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        assert_eq!(
            dedup(vec![Addon::Biome, Addon::Husky, Addon::Biome]),
            vec![Addon::Biome, Addon::Husky]
        );
    }

    #[test]
    fn serializes_with_camel_case_keys_and_kebab_tokens() {
        let config = ProjectConfig::builder()
            .db_setup(DatabaseSetup::Turso)
            .frontend(vec![Frontend::NativeNativewind])
            .build();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["dbSetup"], "turso");
        assert_eq!(json["packageManager"], "npm");
        assert_eq!(json["frontend"][0], "native-nativewind");
        assert_eq!(json["projectName"], "my-stack-app");
    }

    #[test]
    fn builder_starts_from_the_declared_defaults() {
        let config = ProjectConfig::builder().build();
        let defaults = StackDefaults::default();
        assert_eq!(config.project_name(), defaults.project_name);
        assert_eq!(config.frontend(), defaults.frontend.as_slice());
        assert_eq!(config.backend(), defaults.backend);
        assert_eq!(config.addons(), defaults.addons.as_slice());
        assert_eq!(config.api(), defaults.api);
    }

    #[test]
    fn display_summarises_the_stack() {
        let config = ProjectConfig::builder().addons(vec![]).build();
        let text = config.to_string();
        assert!(text.contains("backend=hono"));
        assert!(text.contains("addons=[none]"));
    }
}
