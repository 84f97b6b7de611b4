//! Ordered compatibility rule table.
//!
//! Each entry is an independent predicate over a fully populated
//! [`ProjectConfig`], tagged with a stable [`RuleId`]. The resolver walks
//! [`RULES`] top to bottom and stops at the first violation, so table order
//! is part of the contract: an input breaking several rules always reports
//! the same one.
//!
//! Advisories are evaluated after every rule has passed. They never fail a
//! resolution.
//!
//! # Adding a Rule
//!
//! 1. Add a `RuleId` variant and its `as_str` spelling
//! 2. Write a `fn(&ProjectConfig) -> Result<(), DomainError>` below
//! 3. Insert it into [`RULES`] at the position its group requires

use std::fmt;

use serde::Serialize;

use crate::domain::{
    capabilities::{self, FrontendFamily},
    entities::{Advisory, ProjectConfig},
    error::DomainError,
    value_objects::{Addon, Api, Database, DatabaseSetup, Example, Frontend, Orm},
};

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Stable identifier of every check the resolver can fail on.
///
/// `as_str` spellings are public API: scripts match on them in `--json`
/// output, so never rename one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum RuleId {
    // normalizer
    InputUnknownValue,
    InputSentinelCombined,
    InputExamplesRequireApi,
    InputProjectName,
    InputMalformed,
    // cascades
    BackendModeFlags,
    BackendModeFrontends,
    RuntimeNoneRequiresBackendMode,
    // a. orm/database pairing
    OrmMongooseRequiresMongodb,
    DatabaseMongodbRequiresDocumentOrm,
    OrmDrizzleRejectsMongodb,
    // b. requires
    DatabaseRequiresOrm,
    OrmRequiresDatabase,
    // c.
    AuthRequiresDatabase,
    // d. provisioning
    DbSetupRequiresDatabase,
    DbSetupTurso,
    DbSetupNeon,
    DbSetupPrismaPostgres,
    DbSetupMongodbAtlas,
    DbSetupSupabase,
    // e. frontend families
    FrontendSingleWeb,
    FrontendSingleNative,
    // f.
    ApiTrpcFrontend,
    // g.
    AddonsFrontend,
    // h. advisory
    AddonsHuskyWithoutBiome,
    // j. examples
    ExamplesTodoRequiresDatabase,
    ExamplesAiBackend,
    ExamplesAiFrontend,
}

impl RuleId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InputUnknownValue => "input.unknown-value",
            Self::InputSentinelCombined => "input.sentinel-combined",
            Self::InputExamplesRequireApi => "input.examples-require-api",
            Self::InputProjectName => "input.project-name",
            Self::InputMalformed => "input.malformed",
            Self::BackendModeFlags => "backend.mode-flags",
            Self::BackendModeFrontends => "backend.mode-frontends",
            Self::RuntimeNoneRequiresBackendMode => "runtime.none-requires-backend-mode",
            Self::OrmMongooseRequiresMongodb => "orm.mongoose-requires-mongodb",
            Self::DatabaseMongodbRequiresDocumentOrm => "database.mongodb-requires-document-orm",
            Self::OrmDrizzleRejectsMongodb => "orm.drizzle-rejects-mongodb",
            Self::DatabaseRequiresOrm => "database.requires-orm",
            Self::OrmRequiresDatabase => "orm.requires-database",
            Self::AuthRequiresDatabase => "auth.requires-database",
            Self::DbSetupRequiresDatabase => "db-setup.requires-database",
            Self::DbSetupTurso => "db-setup.turso",
            Self::DbSetupNeon => "db-setup.neon",
            Self::DbSetupPrismaPostgres => "db-setup.prisma-postgres",
            Self::DbSetupMongodbAtlas => "db-setup.mongodb-atlas",
            Self::DbSetupSupabase => "db-setup.supabase",
            Self::FrontendSingleWeb => "frontend.single-web",
            Self::FrontendSingleNative => "frontend.single-native",
            Self::ApiTrpcFrontend => "api.trpc-frontend",
            Self::AddonsFrontend => "addons.frontend",
            Self::AddonsHuskyWithoutBiome => "addons.husky-without-biome",
            Self::ExamplesTodoRequiresDatabase => "examples.todo-requires-database",
            Self::ExamplesAiBackend => "examples.ai-backend",
            Self::ExamplesAiFrontend => "examples.ai-frontend",
        }
    }

    /// The binding rule checked for a provisioning method.
    pub const fn for_db_setup(setup: DatabaseSetup) -> Self {
        match setup {
            DatabaseSetup::Turso => Self::DbSetupTurso,
            DatabaseSetup::Neon => Self::DbSetupNeon,
            DatabaseSetup::PrismaPostgres => Self::DbSetupPrismaPostgres,
            DatabaseSetup::MongodbAtlas => Self::DbSetupMongodbAtlas,
            DatabaseSetup::Supabase => Self::DbSetupSupabase,
            DatabaseSetup::None => Self::DbSetupRequiresDatabase,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RuleId> for &'static str {
    fn from(id: RuleId) -> Self {
        id.as_str()
    }
}

// ── Table ────────────────────────────────────────────────────────────────────

pub type RuleCheck = fn(&ProjectConfig) -> Result<(), DomainError>;

/// One fail-fast compatibility rule.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub check: RuleCheck,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.id).finish()
    }
}

/// The validation phase, in evaluation order.
pub static RULES: &[Rule] = &[
    // a.
    Rule {
        id: RuleId::OrmMongooseRequiresMongodb,
        check: mongoose_requires_mongodb,
    },
    Rule {
        id: RuleId::DatabaseMongodbRequiresDocumentOrm,
        check: mongodb_requires_document_orm,
    },
    Rule {
        id: RuleId::OrmDrizzleRejectsMongodb,
        check: drizzle_rejects_mongodb,
    },
    // b.
    Rule {
        id: RuleId::DatabaseRequiresOrm,
        check: database_requires_orm,
    },
    Rule {
        id: RuleId::OrmRequiresDatabase,
        check: orm_requires_database,
    },
    // c.
    Rule {
        id: RuleId::AuthRequiresDatabase,
        check: auth_requires_database,
    },
    // d.
    Rule {
        id: RuleId::DbSetupRequiresDatabase,
        check: db_setup_requires_database,
    },
    Rule {
        id: RuleId::DbSetupTurso,
        check: db_setup_turso,
    },
    Rule {
        id: RuleId::DbSetupNeon,
        check: db_setup_neon,
    },
    Rule {
        id: RuleId::DbSetupPrismaPostgres,
        check: db_setup_prisma_postgres,
    },
    Rule {
        id: RuleId::DbSetupMongodbAtlas,
        check: db_setup_mongodb_atlas,
    },
    Rule {
        id: RuleId::DbSetupSupabase,
        check: db_setup_supabase,
    },
    // e.
    Rule {
        id: RuleId::FrontendSingleWeb,
        check: single_web_frontend,
    },
    Rule {
        id: RuleId::FrontendSingleNative,
        check: single_native_frontend,
    },
    // f.
    Rule {
        id: RuleId::ApiTrpcFrontend,
        check: trpc_frontend,
    },
    // g.
    Rule {
        id: RuleId::AddonsFrontend,
        check: addons_frontend,
    },
    // j.
    Rule {
        id: RuleId::ExamplesTodoRequiresDatabase,
        check: todo_requires_database,
    },
    Rule {
        id: RuleId::ExamplesAiBackend,
        check: ai_backend,
    },
    Rule {
        id: RuleId::ExamplesAiFrontend,
        check: ai_frontend,
    },
];

pub type AdvisoryCheck = fn(&ProjectConfig) -> Option<Advisory>;

/// One non-fatal check.
#[derive(Clone, Copy)]
pub struct AdvisoryRule {
    pub id: RuleId,
    pub check: AdvisoryCheck,
}

impl fmt::Debug for AdvisoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdvisoryRule").field(&self.id).finish()
    }
}

pub static ADVISORIES: &[AdvisoryRule] = &[AdvisoryRule {
    id: RuleId::AddonsHuskyWithoutBiome,
    check: husky_without_biome,
}];

/// Run every rule in order, returning the first violation.
pub fn check_all(config: &ProjectConfig) -> Result<(), DomainError> {
    RULES.iter().try_for_each(|rule| (rule.check)(config))
}

/// Collect every advisory that applies, in table order.
pub fn advise(config: &ProjectConfig) -> Vec<Advisory> {
    ADVISORIES
        .iter()
        .filter_map(|rule| (rule.check)(config))
        .collect()
}

// ── a. ORM / database pairing ────────────────────────────────────────────────

fn mongoose_requires_mongodb(config: &ProjectConfig) -> Result<(), DomainError> {
    if config.orm() == Orm::Mongoose && config.database() != Database::Mongodb {
        return Err(DomainError::OrmRequiresDatabaseKind {
            orm: Orm::Mongoose,
            required: Database::Mongodb,
            found: config.database(),
        });
    }
    Ok(())
}

fn mongodb_requires_document_orm(config: &ProjectConfig) -> Result<(), DomainError> {
    let orm = config.orm();
    // `orm = none` with a database is reported by `database.requires-orm`.
    if config.database() == Database::Mongodb
        && !orm.is_off()
        && !capabilities::DOCUMENT_ORMS.contains(&orm)
    {
        return Err(DomainError::DatabaseRequiresOrmKind {
            database: Database::Mongodb,
            allowed: capabilities::DOCUMENT_ORMS.to_vec(),
            found: orm,
        });
    }
    Ok(())
}

fn drizzle_rejects_mongodb(config: &ProjectConfig) -> Result<(), DomainError> {
    if config.orm() == Orm::Drizzle
        && !capabilities::orm_supports_database(Orm::Drizzle, config.database())
    {
        return Err(DomainError::OrmUnsupportedDatabase {
            orm: Orm::Drizzle,
            database: config.database(),
        });
    }
    Ok(())
}

// ── b. requires ──────────────────────────────────────────────────────────────

fn database_requires_orm(config: &ProjectConfig) -> Result<(), DomainError> {
    if !config.database().is_off() && config.orm().is_off() {
        return Err(DomainError::DatabaseWithoutOrm {
            database: config.database(),
        });
    }
    Ok(())
}

fn orm_requires_database(config: &ProjectConfig) -> Result<(), DomainError> {
    if !config.orm().is_off() && config.database().is_off() {
        return Err(DomainError::OrmWithoutDatabase { orm: config.orm() });
    }
    Ok(())
}

// ── c. auth ──────────────────────────────────────────────────────────────────

fn auth_requires_database(config: &ProjectConfig) -> Result<(), DomainError> {
    if config.auth() && config.database().is_off() {
        return Err(DomainError::AuthWithoutDatabase);
    }
    Ok(())
}

// ── d. provisioning ──────────────────────────────────────────────────────────

fn db_setup_requires_database(config: &ProjectConfig) -> Result<(), DomainError> {
    if !config.db_setup().is_off() && config.database().is_off() {
        return Err(DomainError::DbSetupWithoutDatabase {
            setup: config.db_setup(),
        });
    }
    Ok(())
}

fn db_setup_binding(config: &ProjectConfig, setup: DatabaseSetup) -> Result<(), DomainError> {
    if config.db_setup() != setup {
        return Ok(());
    }
    match capabilities::required_database(setup) {
        Some(required) if required != config.database() => {
            Err(DomainError::DbSetupDatabaseMismatch {
                setup,
                required,
                found: config.database(),
            })
        }
        _ => Ok(()),
    }
}

fn db_setup_turso(config: &ProjectConfig) -> Result<(), DomainError> {
    db_setup_binding(config, DatabaseSetup::Turso)
}

fn db_setup_neon(config: &ProjectConfig) -> Result<(), DomainError> {
    db_setup_binding(config, DatabaseSetup::Neon)
}

fn db_setup_prisma_postgres(config: &ProjectConfig) -> Result<(), DomainError> {
    db_setup_binding(config, DatabaseSetup::PrismaPostgres)
}

fn db_setup_mongodb_atlas(config: &ProjectConfig) -> Result<(), DomainError> {
    db_setup_binding(config, DatabaseSetup::MongodbAtlas)
}

fn db_setup_supabase(config: &ProjectConfig) -> Result<(), DomainError> {
    db_setup_binding(config, DatabaseSetup::Supabase)
}

// ── e. frontend families ─────────────────────────────────────────────────────

fn single_web_frontend(config: &ProjectConfig) -> Result<(), DomainError> {
    let web = capabilities::frontends_in_family(config.frontend(), FrontendFamily::Web);
    if web.len() > 1 {
        return Err(DomainError::MultipleWebFrontends { frontends: web });
    }
    Ok(())
}

fn single_native_frontend(config: &ProjectConfig) -> Result<(), DomainError> {
    let native = capabilities::frontends_in_family(config.frontend(), FrontendFamily::Native);
    if native.len() > 1 {
        return Err(DomainError::MultipleNativeFrontends { frontends: native });
    }
    Ok(())
}

// ── f. API / frontend ────────────────────────────────────────────────────────

fn trpc_frontend(config: &ProjectConfig) -> Result<(), DomainError> {
    if config.api() != Api::Trpc {
        return Ok(());
    }
    match capabilities::selected_in_registry_order(config.frontend()).find(|d| !d.supports_trpc) {
        Some(def) => Err(DomainError::ApiFrontendIncompatible {
            api: Api::Trpc,
            frontend: def.frontend,
            alternative: capabilities::TRPC_ALTERNATIVE,
        }),
        None => Ok(()),
    }
}

// ── g. add-on / frontend ─────────────────────────────────────────────────────

fn addons_frontend(config: &ProjectConfig) -> Result<(), DomainError> {
    let addons = config.addons();
    let sensitive: Vec<Addon> = capabilities::FRONTEND_SENSITIVE_ADDONS
        .iter()
        .copied()
        .filter(|a| addons.contains(a))
        .collect();
    if sensitive.is_empty() {
        return Ok(());
    }

    let compatible = config.frontend().iter().any(|fe| supports_all(&sensitive, *fe));
    if compatible {
        return Ok(());
    }

    // The last sensitive add-on in table order names the failure (tauri over pwa).
    let addon = sensitive[sensitive.len() - 1];
    Err(DomainError::AddonFrontendIncompatible {
        addon,
        supported: frontends_supporting(addon),
        selected: config.frontend().to_vec(),
    })
}

fn supports_all(addons: &[Addon], frontend: Frontend) -> bool {
    addons
        .iter()
        .all(|addon| capabilities::addon_supports_frontend(*addon, frontend))
}

fn frontends_supporting(addon: Addon) -> Vec<Frontend> {
    Frontend::ALL
        .iter()
        .copied()
        .filter(|fe| capabilities::addon_supports_frontend(addon, *fe))
        .collect()
}

// ── h. advisories ────────────────────────────────────────────────────────────

fn husky_without_biome(config: &ProjectConfig) -> Option<Advisory> {
    let addons = config.addons();
    (addons.contains(&Addon::Husky) && !addons.contains(&Addon::Biome)).then(|| Advisory {
        rule_id: RuleId::AddonsHuskyWithoutBiome,
        message: "Husky addon is recommended to be used with Biome for lint-staged configuration."
            .into(),
    })
}

// ── j. examples ──────────────────────────────────────────────────────────────

fn todo_requires_database(config: &ProjectConfig) -> Result<(), DomainError> {
    let backend = config.backend();
    if config.examples().contains(&Example::Todo)
        && !backend.is_mode()
        && config.database().is_off()
    {
        return Err(DomainError::ExampleRequiresDatabase {
            example: Example::Todo,
            backend,
        });
    }
    Ok(())
}

fn ai_backend(config: &ProjectConfig) -> Result<(), DomainError> {
    let backend = config.backend();
    if config.examples().contains(&Example::Ai)
        && capabilities::AI_EXAMPLE_UNSUPPORTED_BACKENDS.contains(&backend)
    {
        return Err(DomainError::ExampleBackendIncompatible {
            example: Example::Ai,
            backend,
        });
    }
    Ok(())
}

fn ai_frontend(config: &ProjectConfig) -> Result<(), DomainError> {
    if !config.examples().contains(&Example::Ai) {
        return Ok(());
    }
    match capabilities::selected_in_registry_order(config.frontend())
        .find(|d| !d.supports_ai_example)
    {
        Some(def) => Err(DomainError::ExampleFrontendIncompatible {
            example: Example::Ai,
            frontend: def.frontend,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Backend;
    use std::collections::HashSet;

    fn hono() -> ProjectConfig {
        ProjectConfig::builder().build()
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut seen = HashSet::new();
        for rule in RULES {
            assert!(seen.insert(rule.id.as_str()), "duplicate id {}", rule.id);
        }
        for rule in ADVISORIES {
            assert!(seen.insert(rule.id.as_str()), "duplicate id {}", rule.id);
        }
    }

    #[test]
    fn table_order_is_stable() {
        let ids: Vec<&str> = RULES.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "orm.mongoose-requires-mongodb",
                "database.mongodb-requires-document-orm",
                "orm.drizzle-rejects-mongodb",
                "database.requires-orm",
                "orm.requires-database",
                "auth.requires-database",
                "db-setup.requires-database",
                "db-setup.turso",
                "db-setup.neon",
                "db-setup.prisma-postgres",
                "db-setup.mongodb-atlas",
                "db-setup.supabase",
                "frontend.single-web",
                "frontend.single-native",
                "api.trpc-frontend",
                "addons.frontend",
                "examples.todo-requires-database",
                "examples.ai-backend",
                "examples.ai-frontend",
            ]
        );
    }

    #[test]
    fn every_rule_reports_its_own_id() {
        let failing = [
            (
                RuleId::OrmMongooseRequiresMongodb,
                ProjectConfig::builder().orm(Orm::Mongoose).build(),
            ),
            (
                RuleId::DatabaseMongodbRequiresDocumentOrm,
                ProjectConfig::builder().database(Database::Mongodb).build(),
            ),
            (
                RuleId::DatabaseRequiresOrm,
                ProjectConfig::builder().orm(Orm::None).auth(false).build(),
            ),
            (
                RuleId::OrmRequiresDatabase,
                ProjectConfig::builder()
                    .database(Database::None)
                    .auth(false)
                    .build(),
            ),
            (
                RuleId::AuthRequiresDatabase,
                ProjectConfig::builder()
                    .database(Database::None)
                    .orm(Orm::None)
                    .build(),
            ),
            (
                RuleId::DbSetupNeon,
                ProjectConfig::builder()
                    .db_setup(DatabaseSetup::Neon)
                    .build(),
            ),
            (
                RuleId::FrontendSingleWeb,
                ProjectConfig::builder()
                    .frontend(vec![Frontend::Next, Frontend::Nuxt])
                    .api(Api::Orpc)
                    .build(),
            ),
            (
                RuleId::ApiTrpcFrontend,
                ProjectConfig::builder()
                    .frontend(vec![Frontend::Svelte])
                    .build(),
            ),
            (
                RuleId::AddonsFrontend,
                ProjectConfig::builder()
                    .frontend(vec![Frontend::TanstackStart])
                    .addons(vec![Addon::Pwa])
                    .build(),
            ),
            (
                RuleId::ExamplesAiBackend,
                ProjectConfig::builder()
                    .backend(Backend::Elysia)
                    .examples(vec![Example::Ai])
                    .build(),
            ),
        ];
        for (id, config) in failing {
            let err = check_all(&config).unwrap_err();
            assert_eq!(err.rule_id(), id, "{config:?}");
        }
    }

    #[test]
    fn defaults_pass_every_rule() {
        assert!(check_all(&hono()).is_ok());
        assert!(advise(&hono()).is_empty());
    }

    #[test]
    fn drizzle_rejects_mongodb_in_isolation() {
        let config = ProjectConfig::builder()
            .database(Database::Mongodb)
            .orm(Orm::Drizzle)
            .build();
        // The document-orm rule is earlier in the table and wins.
        assert_eq!(
            check_all(&config).unwrap_err().rule_id(),
            RuleId::DatabaseMongodbRequiresDocumentOrm
        );
        assert_eq!(
            drizzle_rejects_mongodb(&config).unwrap_err(),
            DomainError::OrmUnsupportedDatabase {
                orm: Orm::Drizzle,
                database: Database::Mongodb,
            }
        );
        let prisma = ProjectConfig::builder()
            .database(Database::Mongodb)
            .orm(Orm::Prisma)
            .build();
        assert!(check_all(&prisma).is_ok());
    }

    #[test]
    fn trpc_names_first_frontend_in_registry_order() {
        let config = ProjectConfig::builder()
            .frontend(vec![
                Frontend::Angular,
                Frontend::NativeUnistyles,
                Frontend::Nuxt,
            ])
            .build();
        // Two web frontends trip the family rule first; check trpc in isolation.
        match trpc_frontend(&config).unwrap_err() {
            DomainError::ApiFrontendIncompatible {
                frontend,
                alternative,
                ..
            } => {
                assert_eq!(frontend, Frontend::Nuxt);
                assert_eq!(alternative, Api::Orpc);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn tauri_reason_wins_when_both_addons_present() {
        let config = ProjectConfig::builder()
            .frontend(vec![Frontend::Svelte])
            .api(Api::Orpc)
            .addons(vec![Addon::Pwa, Addon::Tauri])
            .build();
        match check_all(&config).unwrap_err() {
            DomainError::AddonFrontendIncompatible { addon, supported, .. } => {
                assert_eq!(addon, Addon::Tauri);
                assert!(supported.contains(&Frontend::Svelte));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn pwa_and_tauri_need_one_frontend_supporting_both() {
        let ok = ProjectConfig::builder()
            .frontend(vec![Frontend::Solid])
            .api(Api::Orpc)
            .addons(vec![Addon::Pwa, Addon::Tauri])
            .build();
        assert!(check_all(&ok).is_ok());

        let no_frontend = ProjectConfig::builder()
            .frontend(vec![])
            .addons(vec![Addon::Pwa])
            .build();
        assert_eq!(
            check_all(&no_frontend).unwrap_err().rule_id(),
            RuleId::AddonsFrontend
        );
    }

    #[test]
    fn todo_example_needs_database_only_with_a_real_backend() {
        let config = ProjectConfig::builder()
            .database(Database::None)
            .orm(Orm::None)
            .auth(false)
            .examples(vec![Example::Todo])
            .build();
        assert_eq!(
            check_all(&config).unwrap_err().rule_id(),
            RuleId::ExamplesTodoRequiresDatabase
        );

        let convex = ProjectConfig::builder()
            .backend(Backend::Convex)
            .database(Database::None)
            .orm(Orm::None)
            .auth(false)
            .api(Api::None)
            .examples(vec![Example::Todo])
            .build();
        assert!(check_all(&convex).is_ok());
    }

    #[test]
    fn ai_example_rejects_solid_and_angular() {
        for fe in [Frontend::Solid, Frontend::Angular] {
            let config = ProjectConfig::builder()
                .frontend(vec![fe])
                .api(Api::Orpc)
                .examples(vec![Example::Ai])
                .build();
            match check_all(&config).unwrap_err() {
                DomainError::ExampleFrontendIncompatible { frontend, .. } => {
                    assert_eq!(frontend, fe)
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn husky_without_biome_is_advisory_only() {
        let config = ProjectConfig::builder().addons(vec![Addon::Husky]).build();
        assert!(check_all(&config).is_ok());
        let advisories = advise(&config);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].rule_id, RuleId::AddonsHuskyWithoutBiome);

        let with_biome = ProjectConfig::builder()
            .addons(vec![Addon::Husky, Addon::Biome])
            .build();
        assert!(advise(&with_biome).is_empty());
    }

    #[test]
    fn rule_id_serializes_as_its_spelling() {
        let json = serde_json::to_string(&RuleId::DbSetupPrismaPostgres).unwrap();
        assert_eq!(json, "\"db-setup.prisma-postgres\"");
    }
}
