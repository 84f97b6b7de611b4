//! Domain value objects: one closed token enum per configuration dimension.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO compatibility logic. Families, bindings and bans live in
//! `capabilities.rs`. This file defines the types, their token spelling and
//! their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the `Variant = "token"` line to the enum's `token_enum!` block
//! 2. Add a capability entry in `capabilities.rs` if the value participates
//!    in a family or binding
//! 3. Done. Parsing, display and serde all derive from the token.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sentinel token meaning "explicitly nothing" in multi-valued dimensions.
pub const SENTINEL_NONE: &str = "none";

/// Generates a closed token enum with `ALL`, `TOKENS`, `as_str`, `Display`
/// and a case-insensitive `FromStr` that reports the owning dimension.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $dimension:path {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl $name {
            /// Every value of the domain, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Token spelling of every value, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(DomainError::UnknownValue {
                        dimension: $dimension,
                        value: s.to_owned(),
                        expected: Self::TOKENS.join(", "),
                    }),
                }
            }
        }
    };
}

// ── Dimension ────────────────────────────────────────────────────────────────

/// A named axis of configuration choice.
///
/// `as_str` is the camelCase key used in JSON input/output and in
/// `ProvidedFlags`; `flag` is the CLI spelling used in conflict reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Api,
    Backend,
    Database,
    Orm,
    Auth,
    Runtime,
    DbSetup,
    PackageManager,
    Frontend,
    Addons,
    Examples,
    Git,
    Install,
}

impl Dimension {
    pub const ALL: &'static [Self] = &[
        Self::Api,
        Self::Backend,
        Self::Database,
        Self::Orm,
        Self::Auth,
        Self::Runtime,
        Self::DbSetup,
        Self::PackageManager,
        Self::Frontend,
        Self::Addons,
        Self::Examples,
        Self::Git,
        Self::Install,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Backend => "backend",
            Self::Database => "database",
            Self::Orm => "orm",
            Self::Auth => "auth",
            Self::Runtime => "runtime",
            Self::DbSetup => "dbSetup",
            Self::PackageManager => "packageManager",
            Self::Frontend => "frontend",
            Self::Addons => "addons",
            Self::Examples => "examples",
            Self::Git => "git",
            Self::Install => "install",
        }
    }

    /// Command-line flag spelling, e.g. `--db-setup`.
    pub const fn flag(&self) -> &'static str {
        match self {
            Self::Api => "--api",
            Self::Backend => "--backend",
            Self::Database => "--database",
            Self::Orm => "--orm",
            Self::Auth => "--auth",
            Self::Runtime => "--runtime",
            Self::DbSetup => "--db-setup",
            Self::PackageManager => "--package-manager",
            Self::Frontend => "--frontend",
            Self::Addons => "--addons",
            Self::Examples => "--examples",
            Self::Git => "--git",
            Self::Install => "--install",
        }
    }

    /// Whether the dimension accepts a collection of tokens.
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::Frontend | Self::Addons | Self::Examples)
    }

    /// Allowed tokens for this dimension (booleans report `true`/`false`;
    /// multi-valued dimensions include the `none` sentinel).
    pub fn tokens(self) -> Vec<&'static str> {
        let mut tokens = match self {
            Self::Api => Api::TOKENS.to_vec(),
            Self::Backend => Backend::TOKENS.to_vec(),
            Self::Database => Database::TOKENS.to_vec(),
            Self::Orm => Orm::TOKENS.to_vec(),
            Self::Runtime => Runtime::TOKENS.to_vec(),
            Self::DbSetup => DatabaseSetup::TOKENS.to_vec(),
            Self::PackageManager => PackageManager::TOKENS.to_vec(),
            Self::Frontend => Frontend::TOKENS.to_vec(),
            Self::Addons => Addon::TOKENS.to_vec(),
            Self::Examples => Example::TOKENS.to_vec(),
            Self::Auth | Self::Git | Self::Install => vec!["true", "false"],
        };
        if self.is_multi_valued() {
            tokens.push(SENTINEL_NONE);
        }
        tokens
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], "").to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().to_ascii_lowercase() == wanted)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "unknown dimension '{s}' (expected one of: {})",
                    Self::ALL
                        .iter()
                        .map(Dimension::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

// ── Single-valued dimensions ─────────────────────────────────────────────────

token_enum! {
    /// API layer between frontend and backend.
    pub enum Api in Dimension::Api {
        Trpc = "trpc",
        Orpc = "orpc",
        None = "none",
    }
}

token_enum! {
    /// Backend framework. `Convex` and `None` are backend *modes* that force
    /// the server-side dimensions off.
    pub enum Backend in Dimension::Backend {
        Hono = "hono",
        Express = "express",
        Fastify = "fastify",
        Next = "next",
        Elysia = "elysia",
        Convex = "convex",
        None = "none",
    }
}

token_enum! {
    /// Database engine.
    pub enum Database in Dimension::Database {
        None = "none",
        Sqlite = "sqlite",
        Postgres = "postgres",
        Mysql = "mysql",
        Mongodb = "mongodb",
    }
}

token_enum! {
    /// Object-relational (or object-document) mapper.
    pub enum Orm in Dimension::Orm {
        Drizzle = "drizzle",
        Prisma = "prisma",
        Mongoose = "mongoose",
        None = "none",
    }
}

token_enum! {
    /// JavaScript runtime for the backend.
    pub enum Runtime in Dimension::Runtime {
        Bun = "bun",
        Node = "node",
        None = "none",
    }
}

token_enum! {
    /// Hosted database provisioning method.
    pub enum DatabaseSetup in Dimension::DbSetup {
        Turso = "turso",
        Neon = "neon",
        PrismaPostgres = "prisma-postgres",
        MongodbAtlas = "mongodb-atlas",
        Supabase = "supabase",
        None = "none",
    }
}

token_enum! {
    /// Package manager used for install commands.
    pub enum PackageManager in Dimension::PackageManager {
        Npm = "npm",
        Pnpm = "pnpm",
        Bun = "bun",
    }
}

impl Api {
    pub const fn is_off(self) -> bool {
        matches!(self, Self::None)
    }
}

impl Backend {
    /// `convex` and `none` replace the whole server side.
    pub const fn is_mode(self) -> bool {
        matches!(self, Self::Convex | Self::None)
    }
}

impl Database {
    pub const fn is_off(self) -> bool {
        matches!(self, Self::None)
    }
}

impl Orm {
    pub const fn is_off(self) -> bool {
        matches!(self, Self::None)
    }
}

impl Runtime {
    pub const fn is_off(self) -> bool {
        matches!(self, Self::None)
    }
}

impl DatabaseSetup {
    pub const fn is_off(self) -> bool {
        matches!(self, Self::None)
    }
}

// ── Multi-valued dimensions ──────────────────────────────────────────────────
//
// The `none` sentinel is deliberately not a variant: it is handled by the
// normalizer and never survives into a resolved configuration.

token_enum! {
    /// Frontend application. Declaration order is the registry order used
    /// when a rule has to name "the first" offending frontend.
    pub enum Frontend in Dimension::Frontend {
        TanstackRouter = "tanstack-router",
        ReactRouter = "react-router",
        TanstackStart = "tanstack-start",
        Next = "next",
        Nuxt = "nuxt",
        NativeNativewind = "native-nativewind",
        NativeUnistyles = "native-unistyles",
        Svelte = "svelte",
        Solid = "solid",
        Angular = "angular",
    }
}

token_enum! {
    /// Optional tooling add-on.
    pub enum Addon in Dimension::Addons {
        Pwa = "pwa",
        Tauri = "tauri",
        Starlight = "starlight",
        Biome = "biome",
        Husky = "husky",
        Turborepo = "turborepo",
    }
}

token_enum! {
    /// Example application bundled into the project.
    pub enum Example in Dimension::Examples {
        Todo = "todo",
        Ai = "ai",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_round_trip_through_display() {
        for fe in Frontend::ALL {
            assert_eq!(fe.to_string().parse::<Frontend>().unwrap(), *fe);
        }
        for setup in DatabaseSetup::ALL {
            assert_eq!(setup.as_str().parse::<DatabaseSetup>().unwrap(), *setup);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Postgres".parse::<Database>().unwrap(), Database::Postgres);
        assert_eq!(" TRPC ".parse::<Api>().unwrap(), Api::Trpc);
    }

    #[test]
    fn unknown_token_reports_dimension_and_domain() {
        let err = "oracle".parse::<Database>().unwrap_err();
        match err {
            DomainError::UnknownValue {
                dimension,
                value,
                expected,
            } => {
                assert_eq!(dimension, Dimension::Database);
                assert_eq!(value, "oracle");
                assert!(expected.contains("postgres"));
                assert!(expected.contains("mongodb"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sentinel_is_not_a_frontend_variant() {
        assert!("none".parse::<Frontend>().is_err());
        assert!("none".parse::<Addon>().is_err());
        assert!("none".parse::<Example>().is_err());
    }

    #[test]
    fn serde_uses_kebab_tokens() {
        let json = serde_json::to_string(&DatabaseSetup::PrismaPostgres).unwrap();
        assert_eq!(json, "\"prisma-postgres\"");
        let fe: Frontend = serde_json::from_str("\"native-nativewind\"").unwrap();
        assert_eq!(fe, Frontend::NativeNativewind);
    }

    #[test]
    fn dimension_accepts_kebab_and_camel_spellings() {
        assert_eq!("db-setup".parse::<Dimension>().unwrap(), Dimension::DbSetup);
        assert_eq!("dbSetup".parse::<Dimension>().unwrap(), Dimension::DbSetup);
        assert_eq!(
            "package_manager".parse::<Dimension>().unwrap(),
            Dimension::PackageManager
        );
        assert!("colour".parse::<Dimension>().is_err());
    }

    #[test]
    fn multi_valued_dimensions_list_the_sentinel() {
        assert!(Dimension::Frontend.tokens().contains(&SENTINEL_NONE));
        assert!(!Dimension::Database.tokens().is_empty());
        assert_eq!(Dimension::Auth.tokens(), vec!["true", "false"]);
    }

    #[test]
    fn backend_modes() {
        assert!(Backend::Convex.is_mode());
        assert!(Backend::None.is_mode());
        assert!(!Backend::Hono.is_mode());
    }
}
