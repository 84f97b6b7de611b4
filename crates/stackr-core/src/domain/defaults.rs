//! Declared defaults and the default phase of resolution.
//!
//! The default phase runs after the backend-mode cascades and before the
//! rule table. It only fills dimensions that are still unset; an explicit
//! (or cascaded) value is never changed here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{
    capabilities,
    common::resolve_path,
    entities::{PartialConfig, ProjectConfig},
    value_objects::{
        Addon, Api, Backend, Database, DatabaseSetup, Example, Frontend, Orm, PackageManager,
        Runtime,
    },
};

/// Fallback value for every dimension.
///
/// Deserialized from the `[defaults]` table of the CLI config, so keys are
/// snake_case and values are the CLI tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDefaults {
    pub project_name: String,
    pub frontend: Vec<Frontend>,
    pub backend: Backend,
    pub runtime: Runtime,
    pub database: Database,
    pub orm: Orm,
    pub auth: bool,
    pub addons: Vec<Addon>,
    pub examples: Vec<Example>,
    pub git: bool,
    pub install: bool,
    pub db_setup: DatabaseSetup,
    pub api: Api,
    pub package_manager: PackageManager,
}

impl Default for StackDefaults {
    fn default() -> Self {
        Self {
            project_name: "my-stack-app".into(),
            frontend: vec![Frontend::TanstackRouter],
            backend: Backend::Hono,
            runtime: Runtime::Bun,
            database: Database::Sqlite,
            orm: Orm::Drizzle,
            auth: true,
            addons: vec![Addon::Turborepo],
            examples: Vec::new(),
            git: true,
            install: true,
            db_setup: DatabaseSetup::None,
            api: Api::Trpc,
            package_manager: PackageManager::Npm,
        }
    }
}

impl StackDefaults {
    /// Put the default backend into an unset `partial.backend` before the
    /// cascades run. The dimension stays out of `ProvidedFlags`, so a
    /// defaulted `convex` or `none` overwrites defaulted server-side values
    /// and only conflicts with explicit ones.
    pub(crate) fn seed_backend(&self, partial: &mut PartialConfig) {
        partial.backend.get_or_insert(self.backend);
    }

    /// Fill every unset dimension of `partial` and build the draft config.
    ///
    /// Dependent defaults keep a defaulted field from contradicting an
    /// explicit one:
    /// - database follows an explicit `orm = none | mongoose` or a bound db-setup
    /// - orm follows a resolved `database = none | mongodb`
    /// - auth is off when the resolved database is `none`
    /// - api is `orpc` when a selected frontend cannot use tRPC
    ///
    /// The project name must already be resolved unless the default name is
    /// wanted; `cwd` anchors the default project directory.
    pub(crate) fn fill(&self, partial: PartialConfig, cwd: &Path) -> ProjectConfig {
        let database = partial.database.unwrap_or_else(|| {
            match (partial.orm, partial.db_setup.and_then(capabilities::required_database)) {
                (Some(Orm::None), _) => Database::None,
                (Some(Orm::Mongoose), _) => Database::Mongodb,
                (_, Some(bound)) => bound,
                _ => self.database,
            }
        });

        let orm = partial.orm.unwrap_or(match database {
            Database::None => Orm::None,
            Database::Mongodb if !capabilities::DOCUMENT_ORMS.contains(&self.orm) => Orm::Prisma,
            _ => self.orm,
        });

        let auth = partial.auth.unwrap_or(self.auth && !database.is_off());

        let frontend = partial.frontend.unwrap_or_else(|| self.frontend.clone());

        let api = partial.api.unwrap_or_else(|| {
            let trpc_blocked = capabilities::selected_in_registry_order(&frontend)
                .any(|def| !def.supports_trpc);
            if self.api == Api::Trpc && trpc_blocked {
                capabilities::TRPC_ALTERNATIVE
            } else {
                self.api
            }
        });

        let project_name = partial
            .project_name
            .unwrap_or_else(|| self.project_name.clone());
        let relative_path = partial
            .relative_path
            .unwrap_or_else(|| project_name.clone());
        let project_dir = partial
            .project_dir
            .unwrap_or_else(|| resolve_path(cwd, &relative_path));

        ProjectConfig::builder()
            .project(project_name, project_dir, relative_path)
            .frontend(frontend)
            .backend(partial.backend.unwrap_or(self.backend))
            .runtime(partial.runtime.unwrap_or(self.runtime))
            .database(database)
            .orm(orm)
            .auth(auth)
            .addons(partial.addons.unwrap_or_else(|| self.addons.clone()))
            .examples(partial.examples.unwrap_or_else(|| self.examples.clone()))
            .git(partial.git.unwrap_or(self.git))
            .package_manager(partial.package_manager.unwrap_or(self.package_manager))
            .install(partial.install.unwrap_or(self.install))
            .db_setup(partial.db_setup.unwrap_or(self.db_setup))
            .api(api)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn fill(partial: PartialConfig) -> ProjectConfig {
        StackDefaults::default().fill(partial, Path::new("/work"))
    }

    #[test]
    fn empty_partial_yields_declared_defaults() {
        let config = fill(PartialConfig::default());
        assert_eq!(config.project_name(), "my-stack-app");
        assert_eq!(config.project_dir(), Path::new("/work/my-stack-app"));
        assert_eq!(config.frontend(), &[Frontend::TanstackRouter]);
        assert_eq!(config.backend(), Backend::Hono);
        assert_eq!(config.runtime(), Runtime::Bun);
        assert_eq!(config.database(), Database::Sqlite);
        assert_eq!(config.orm(), Orm::Drizzle);
        assert!(config.auth());
        assert_eq!(config.addons(), &[Addon::Turborepo]);
        assert!(config.examples().is_empty());
        assert_eq!(config.db_setup(), DatabaseSetup::None);
        assert_eq!(config.api(), Api::Trpc);
        assert_eq!(config.package_manager(), PackageManager::Npm);
    }

    #[test]
    fn explicit_orm_none_turns_default_database_off() {
        let config = fill(PartialConfig {
            orm: Some(Orm::None),
            ..Default::default()
        });
        assert_eq!(config.database(), Database::None);
        assert!(!config.auth());
    }

    #[test]
    fn explicit_database_none_turns_default_orm_off() {
        let config = fill(PartialConfig {
            database: Some(Database::None),
            ..Default::default()
        });
        assert_eq!(config.orm(), Orm::None);
        assert!(!config.auth());
    }

    #[test]
    fn mongodb_picks_a_document_orm() {
        let config = fill(PartialConfig {
            database: Some(Database::Mongodb),
            ..Default::default()
        });
        assert_eq!(config.orm(), Orm::Prisma);

        let config = fill(PartialConfig {
            orm: Some(Orm::Mongoose),
            ..Default::default()
        });
        assert_eq!(config.database(), Database::Mongodb);
    }

    #[test]
    fn db_setup_binding_picks_database() {
        let config = fill(PartialConfig {
            db_setup: Some(DatabaseSetup::Neon),
            ..Default::default()
        });
        assert_eq!(config.database(), Database::Postgres);
    }

    #[test]
    fn trpc_incompatible_frontend_defaults_api_to_orpc() {
        let config = fill(PartialConfig {
            frontend: Some(vec![Frontend::Svelte]),
            ..Default::default()
        });
        assert_eq!(config.api(), Api::Orpc);
    }

    #[test]
    fn explicit_values_are_never_changed() {
        let config = fill(PartialConfig {
            frontend: Some(vec![Frontend::Nuxt]),
            api: Some(Api::Trpc),
            database: Some(Database::Postgres),
            orm: Some(Orm::None),
            auth: Some(true),
            ..Default::default()
        });
        assert_eq!(config.api(), Api::Trpc);
        assert_eq!(config.database(), Database::Postgres);
        assert_eq!(config.orm(), Orm::None);
        assert!(config.auth());
    }

    #[test]
    fn explicit_directory_is_kept() {
        let config = fill(PartialConfig {
            project_name: Some("web".into()),
            project_dir: Some(PathBuf::from("/elsewhere/web")),
            relative_path: Some("../elsewhere/web".into()),
            ..Default::default()
        });
        assert_eq!(config.project_dir(), Path::new("/elsewhere/web"));
        assert_eq!(config.relative_path(), "../elsewhere/web");
    }

    #[test]
    fn defaults_deserialize_from_partial_table() {
        let defaults: StackDefaults =
            serde_json::from_str(r#"{"backend":"express","package_manager":"pnpm"}"#).unwrap();
        assert_eq!(defaults.backend, Backend::Express);
        assert_eq!(defaults.package_manager, PackageManager::Pnpm);
        assert_eq!(defaults.database, Database::Sqlite);
    }
}
