//! Stack capability registry.
//!
//! Every cross-dimension fact the rule table needs is described exactly once
//! here: which family a frontend belongs to, which API/add-ons/backends it
//! works with, which database a provisioning method binds to, and which
//! databases an ORM can drive. The rules in `rules.rs` only *query* these
//! tables; they never carry their own token lists.
//!
//! # Adding a New Frontend
//!
//! 1. Add a variant to `Frontend` in `value_objects.rs`
//! 2. Add one [`FrontendDef`] entry to [`FRONTEND_REGISTRY`]
//! 3. That's it. Family limits, tRPC/add-on/example checks all follow.

use crate::domain::value_objects::{
    Addon, Api, Backend, Database, DatabaseSetup, Frontend, Orm,
};

// ── Frontends ────────────────────────────────────────────────────────────────

/// The two disjoint frontend families. Each is limited to one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrontendFamily {
    Web,
    Native,
}

impl FrontendFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Native => "native",
        }
    }
}

/// Everything the rule table needs to know about one frontend.
#[derive(Debug, Clone, Copy)]
pub struct FrontendDef {
    pub frontend: Frontend,
    pub family: FrontendFamily,
    /// Can be paired with `api = trpc`.
    pub supports_trpc: bool,
    /// Can be paired with `backend = convex`.
    pub supports_convex: bool,
    /// Can host the `pwa` add-on.
    pub supports_pwa: bool,
    /// Can host the `tauri` add-on.
    pub supports_tauri: bool,
    /// Can host the `ai` example.
    pub supports_ai_example: bool,
}

/// Single source of truth for frontend capabilities.
///
/// Ordering is semantic: when a rule has to report "the first" offending
/// frontend it walks this table top to bottom.
pub static FRONTEND_REGISTRY: &[FrontendDef] = &[
    FrontendDef {
        frontend: Frontend::TanstackRouter,
        family: FrontendFamily::Web,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: true,
        supports_tauri: true,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::ReactRouter,
        family: FrontendFamily::Web,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: true,
        supports_tauri: true,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::TanstackStart,
        family: FrontendFamily::Web,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: false,
        supports_tauri: false,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::Next,
        family: FrontendFamily::Web,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: true,
        supports_tauri: true,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::Nuxt,
        family: FrontendFamily::Web,
        supports_trpc: false,
        supports_convex: false,
        supports_pwa: false,
        supports_tauri: true,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::NativeNativewind,
        family: FrontendFamily::Native,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: false,
        supports_tauri: false,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::NativeUnistyles,
        family: FrontendFamily::Native,
        supports_trpc: true,
        supports_convex: true,
        supports_pwa: false,
        supports_tauri: false,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::Svelte,
        family: FrontendFamily::Web,
        supports_trpc: false,
        supports_convex: true,
        supports_pwa: false,
        supports_tauri: true,
        supports_ai_example: true,
    },
    FrontendDef {
        frontend: Frontend::Solid,
        family: FrontendFamily::Web,
        supports_trpc: false,
        supports_convex: false,
        supports_pwa: true,
        supports_tauri: true,
        supports_ai_example: false,
    },
    FrontendDef {
        frontend: Frontend::Angular,
        family: FrontendFamily::Web,
        supports_trpc: false,
        supports_convex: false,
        supports_pwa: true,
        supports_tauri: true,
        supports_ai_example: false,
    },
];

/// Find the capability definition for a frontend.
///
/// Returns `None` only for an unregistered variant, which is a programming
/// error caught by `assert_registry_integrity`.
pub fn find_frontend(frontend: Frontend) -> Option<&'static FrontendDef> {
    FRONTEND_REGISTRY.iter().find(|def| def.frontend == frontend)
}

pub fn family_of(frontend: Frontend) -> Option<FrontendFamily> {
    find_frontend(frontend).map(|def| def.family)
}

/// Registry entries for the selected frontends, in registry order.
pub fn selected_in_registry_order(
    selected: &[Frontend],
) -> impl Iterator<Item = &'static FrontendDef> + '_ {
    FRONTEND_REGISTRY
        .iter()
        .filter(move |def| selected.contains(&def.frontend))
}

/// Selected frontends of one family, in selection order.
pub fn frontends_in_family(selected: &[Frontend], family: FrontendFamily) -> Vec<Frontend> {
    selected
        .iter()
        .copied()
        .filter(|fe| family_of(*fe) == Some(family))
        .collect()
}

/// Every registered frontend matching a predicate, in registry order.
pub fn frontends_where(pred: impl Fn(&FrontendDef) -> bool) -> Vec<Frontend> {
    FRONTEND_REGISTRY
        .iter()
        .filter(|def| pred(def))
        .map(|def| def.frontend)
        .collect()
}

/// The API to suggest when tRPC is not available for a frontend.
pub const TRPC_ALTERNATIVE: Api = Api::Orpc;

// ── Frontend-sensitive add-ons ───────────────────────────────────────────────

/// Whether a frontend can host the given add-on. Add-ons without a frontend
/// requirement return `true` for every frontend.
pub fn addon_supports_frontend(addon: Addon, frontend: Frontend) -> bool {
    let Some(def) = find_frontend(frontend) else {
        return false;
    };
    match addon {
        Addon::Pwa => def.supports_pwa,
        Addon::Tauri => def.supports_tauri,
        Addon::Starlight | Addon::Biome | Addon::Husky | Addon::Turborepo => true,
    }
}

/// Add-ons that only work with some frontends.
pub const FRONTEND_SENSITIVE_ADDONS: &[Addon] = &[Addon::Pwa, Addon::Tauri];

// ── Database provisioning ────────────────────────────────────────────────────

/// A provisioning method and the only database it can provision.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseSetupDef {
    pub setup: DatabaseSetup,
    pub requires: Database,
}

/// Provisioning bindings. Ordering is the order the rule table checks them.
pub static DB_SETUP_REGISTRY: &[DatabaseSetupDef] = &[
    DatabaseSetupDef {
        setup: DatabaseSetup::Turso,
        requires: Database::Sqlite,
    },
    DatabaseSetupDef {
        setup: DatabaseSetup::Neon,
        requires: Database::Postgres,
    },
    DatabaseSetupDef {
        setup: DatabaseSetup::PrismaPostgres,
        requires: Database::Postgres,
    },
    DatabaseSetupDef {
        setup: DatabaseSetup::MongodbAtlas,
        requires: Database::Mongodb,
    },
    DatabaseSetupDef {
        setup: DatabaseSetup::Supabase,
        requires: Database::Postgres,
    },
];

/// The database a provisioning method binds to, if any.
pub fn required_database(setup: DatabaseSetup) -> Option<Database> {
    DB_SETUP_REGISTRY
        .iter()
        .find(|def| def.setup == setup)
        .map(|def| def.requires)
}

// ── ORMs ─────────────────────────────────────────────────────────────────────

/// ORMs that can drive a document database.
pub const DOCUMENT_ORMS: &[Orm] = &[Orm::Mongoose, Orm::Prisma];

/// Whether an ORM can drive the given database. `Orm::None` and
/// `Database::None` are handled by the requires rules, not here.
pub fn orm_supports_database(orm: Orm, database: Database) -> bool {
    match (orm, database) {
        (Orm::Mongoose, db) => db == Database::Mongodb,
        (Orm::Drizzle, db) => db != Database::Mongodb,
        (Orm::Prisma, _) | (Orm::None, _) => true,
    }
}

// ── Backends ─────────────────────────────────────────────────────────────────

/// Backends the `ai` example cannot be generated for.
pub const AI_EXAMPLE_UNSUPPORTED_BACKENDS: &[Backend] = &[Backend::Elysia];

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    for fe in Frontend::ALL {
        let count = FRONTEND_REGISTRY
            .iter()
            .filter(|def| def.frontend == *fe)
            .count();
        assert_eq!(count, 1, "Frontend {fe:?} registered {count} times");
    }

    for setup in DatabaseSetup::ALL {
        let registered = required_database(*setup).is_some();
        assert_eq!(
            registered,
            !setup.is_off(),
            "DatabaseSetup {setup:?}: every provisioning method needs exactly one binding"
        );
    }

    for def in DB_SETUP_REGISTRY {
        assert!(
            !def.requires.is_off(),
            "DatabaseSetup {:?} binds to the 'none' database",
            def.setup
        );
    }

    // pwa ∩ tauri must stay non-empty, otherwise selecting both could never pass.
    assert!(
        !frontends_where(|d| d.supports_pwa && d.supports_tauri).is_empty(),
        "No frontend supports both pwa and tauri"
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_internally_consistent() {
        assert_registry_integrity();
    }

    #[test]
    fn families_partition_the_frontend_domain() {
        let web = frontends_where(|d| d.family == FrontendFamily::Web);
        let native = frontends_where(|d| d.family == FrontendFamily::Native);
        assert_eq!(web.len() + native.len(), Frontend::ALL.len());
        assert_eq!(
            native,
            vec![Frontend::NativeNativewind, Frontend::NativeUnistyles]
        );
    }

    #[test]
    fn trpc_incompatible_frontends_in_registry_order() {
        assert_eq!(
            frontends_where(|d| !d.supports_trpc),
            vec![
                Frontend::Nuxt,
                Frontend::Svelte,
                Frontend::Solid,
                Frontend::Angular
            ]
        );
    }

    #[test]
    fn convex_bans_nuxt_solid_angular() {
        assert_eq!(
            frontends_where(|d| !d.supports_convex),
            vec![Frontend::Nuxt, Frontend::Solid, Frontend::Angular]
        );
    }

    #[test]
    fn pwa_and_tauri_sets() {
        assert_eq!(
            frontends_where(|d| d.supports_pwa),
            vec![
                Frontend::TanstackRouter,
                Frontend::ReactRouter,
                Frontend::Next,
                Frontend::Solid,
                Frontend::Angular
            ]
        );
        assert!(addon_supports_frontend(Addon::Tauri, Frontend::Nuxt));
        assert!(!addon_supports_frontend(Addon::Pwa, Frontend::Nuxt));
        let biome_on_native = addon_supports_frontend(Addon::Biome, Frontend::NativeUnistyles);
        assert!(biome_on_native);
    }

    #[test]
    fn db_setup_bindings() {
        assert_eq!(
            required_database(DatabaseSetup::Turso),
            Some(Database::Sqlite)
        );
        assert_eq!(
            required_database(DatabaseSetup::Neon),
            Some(Database::Postgres)
        );
        assert_eq!(
            required_database(DatabaseSetup::MongodbAtlas),
            Some(Database::Mongodb)
        );
        assert_eq!(required_database(DatabaseSetup::None), None);
    }

    #[test]
    fn orm_database_support() {
        assert!(orm_supports_database(Orm::Prisma, Database::Mongodb));
        assert!(orm_supports_database(Orm::Mongoose, Database::Mongodb));
        assert!(!orm_supports_database(Orm::Mongoose, Database::Postgres));
        assert!(!orm_supports_database(Orm::Drizzle, Database::Mongodb));
        assert!(orm_supports_database(Orm::Drizzle, Database::Mysql));
    }

    #[test]
    fn selected_frontends_come_back_in_registry_order() {
        let picked = [Frontend::Angular, Frontend::Nuxt];
        let order: Vec<_> = selected_in_registry_order(&picked)
            .map(|d| d.frontend)
            .collect();
        assert_eq!(order, vec![Frontend::Nuxt, Frontend::Angular]);
    }
}
