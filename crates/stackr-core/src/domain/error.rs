// ============================================================================
// domain/error.rs - RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::domain::rules::RuleId;
use crate::domain::value_objects::{
    Addon, Api, Backend, Database, DatabaseSetup, Dimension, Example, Frontend, Orm,
};

/// Root domain error type.
///
/// Every variant is:
/// - Cloneable and comparable (resolution is deterministic, so are errors)
/// - Identified by a stable [`RuleId`]
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Malformed input (normalizer)
    // ========================================================================
    #[error("invalid value '{value}' for {dimension} (expected one of: {expected})")]
    UnknownValue {
        dimension: Dimension,
        value: String,
        expected: String,
    },

    #[error("cannot combine 'none' with other {dimension} values")]
    SentinelCombined { dimension: Dimension },

    #[error("cannot use '--examples' when '--api' is set to 'none'")]
    ExamplesRequireApi,

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // Backend-mode cascade conflicts
    // ========================================================================
    #[error(
        "the following flags are incompatible with '--backend {backend}': {}",
        flags.join(", ")
    )]
    IncompatibleWithBackend {
        backend: Backend,
        flags: Vec<String>,
    },

    #[error(
        "the following frontends are not compatible with '--backend {backend}': {}",
        join_tokens(frontends)
    )]
    FrontendsIncompatibleWithBackend {
        backend: Backend,
        frontends: Vec<Frontend>,
    },

    #[error("'--runtime none' requires '--backend convex' or '--backend none' (got '{backend}')")]
    RuntimeNoneRequiresBackendMode { backend: Backend },

    // ========================================================================
    // Pairing / requires
    // ========================================================================
    #[error("{orm} ORM requires the {required} database (got '{found}')")]
    OrmRequiresDatabaseKind {
        orm: Orm,
        required: Database,
        found: Database,
    },

    #[error(
        "{database} database requires one of [{}] ORM (got '{found}')",
        join_tokens(allowed)
    )]
    DatabaseRequiresOrmKind {
        database: Database,
        allowed: Vec<Orm>,
        found: Orm,
    },

    #[error("{orm} ORM does not support the {database} database")]
    OrmUnsupportedDatabase { orm: Orm, database: Database },

    #[error("database '{database}' requires an ORM")]
    DatabaseWithoutOrm { database: Database },

    #[error("ORM '{orm}' requires a database")]
    OrmWithoutDatabase { orm: Orm },

    #[error("authentication requires a database")]
    AuthWithoutDatabase,

    #[error("database setup '{setup}' requires a database")]
    DbSetupWithoutDatabase { setup: DatabaseSetup },

    #[error("{setup} setup requires the {required} database (got '{found}')")]
    DbSetupDatabaseMismatch {
        setup: DatabaseSetup,
        required: Database,
        found: Database,
    },

    // ========================================================================
    // Combination exclusivity
    // ========================================================================
    #[error("cannot select multiple web frontends: {}", join_tokens(frontends))]
    MultipleWebFrontends { frontends: Vec<Frontend> },

    #[error("cannot select multiple native frontends: {}", join_tokens(frontends))]
    MultipleNativeFrontends { frontends: Vec<Frontend> },

    #[error("{api} API is not supported with the '{frontend}' frontend")]
    ApiFrontendIncompatible {
        api: Api,
        frontend: Frontend,
        alternative: Api,
    },

    #[error(
        "incompatible addon/frontend combination: {addon} requires one of [{}]",
        join_tokens(supported)
    )]
    AddonFrontendIncompatible {
        addon: Addon,
        supported: Vec<Frontend>,
        selected: Vec<Frontend>,
    },

    #[error("the '{example}' example requires a database when backend '{backend}' is selected")]
    ExampleRequiresDatabase { example: Example, backend: Backend },

    #[error("the '{example}' example is not compatible with the '{backend}' backend")]
    ExampleBackendIncompatible { example: Example, backend: Backend },

    #[error("the '{example}' example is not compatible with the '{frontend}' frontend")]
    ExampleFrontendIncompatible {
        example: Example,
        frontend: Frontend,
    },
}

fn join_tokens<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl DomainError {
    /// Stable identifier of the check that produced this error.
    pub fn rule_id(&self) -> RuleId {
        match self {
            Self::UnknownValue { .. } => RuleId::InputUnknownValue,
            Self::SentinelCombined { .. } => RuleId::InputSentinelCombined,
            Self::ExamplesRequireApi => RuleId::InputExamplesRequireApi,
            Self::InvalidProjectName { .. } => RuleId::InputProjectName,
            Self::InvalidInput(_) => RuleId::InputMalformed,
            Self::IncompatibleWithBackend { .. } => RuleId::BackendModeFlags,
            Self::FrontendsIncompatibleWithBackend { .. } => RuleId::BackendModeFrontends,
            Self::RuntimeNoneRequiresBackendMode { .. } => RuleId::RuntimeNoneRequiresBackendMode,
            Self::OrmRequiresDatabaseKind { .. } => RuleId::OrmMongooseRequiresMongodb,
            Self::DatabaseRequiresOrmKind { .. } => RuleId::DatabaseMongodbRequiresDocumentOrm,
            Self::OrmUnsupportedDatabase { .. } => RuleId::OrmDrizzleRejectsMongodb,
            Self::DatabaseWithoutOrm { .. } => RuleId::DatabaseRequiresOrm,
            Self::OrmWithoutDatabase { .. } => RuleId::OrmRequiresDatabase,
            Self::AuthWithoutDatabase => RuleId::AuthRequiresDatabase,
            Self::DbSetupWithoutDatabase { .. } => RuleId::DbSetupRequiresDatabase,
            Self::DbSetupDatabaseMismatch { setup, .. } => RuleId::for_db_setup(*setup),
            Self::MultipleWebFrontends { .. } => RuleId::FrontendSingleWeb,
            Self::MultipleNativeFrontends { .. } => RuleId::FrontendSingleNative,
            Self::ApiFrontendIncompatible { .. } => RuleId::ApiTrpcFrontend,
            Self::AddonFrontendIncompatible { .. } => RuleId::AddonsFrontend,
            Self::ExampleRequiresDatabase { .. } => RuleId::ExamplesTodoRequiresDatabase,
            Self::ExampleBackendIncompatible { .. } => RuleId::ExamplesAiBackend,
            Self::ExampleFrontendIncompatible { .. } => RuleId::ExamplesAiFrontend,
        }
    }

    /// The dimensions this error is about.
    pub fn dimensions(&self) -> Vec<Dimension> {
        use Dimension as D;
        match self {
            Self::UnknownValue { dimension, .. } | Self::SentinelCombined { dimension } => {
                vec![*dimension]
            }
            Self::ExamplesRequireApi => vec![D::Api, D::Examples],
            Self::InvalidProjectName { .. } | Self::InvalidInput(_) => vec![],
            Self::IncompatibleWithBackend { .. } => vec![
                D::Backend,
                D::Auth,
                D::Database,
                D::Orm,
                D::Api,
                D::Runtime,
                D::DbSetup,
                D::Examples,
            ],
            Self::FrontendsIncompatibleWithBackend { .. } => vec![D::Backend, D::Frontend],
            Self::RuntimeNoneRequiresBackendMode { .. } => vec![D::Backend, D::Runtime],
            Self::OrmRequiresDatabaseKind { .. }
            | Self::DatabaseRequiresOrmKind { .. }
            | Self::OrmUnsupportedDatabase { .. }
            | Self::DatabaseWithoutOrm { .. }
            | Self::OrmWithoutDatabase { .. } => vec![D::Database, D::Orm],
            Self::AuthWithoutDatabase => vec![D::Auth, D::Database],
            Self::DbSetupWithoutDatabase { .. } | Self::DbSetupDatabaseMismatch { .. } => {
                vec![D::DbSetup, D::Database]
            }
            Self::MultipleWebFrontends { .. } | Self::MultipleNativeFrontends { .. } => {
                vec![D::Frontend]
            }
            Self::ApiFrontendIncompatible { .. } => vec![D::Api, D::Frontend],
            Self::AddonFrontendIncompatible { .. } => vec![D::Addons, D::Frontend],
            Self::ExampleRequiresDatabase { .. } => vec![D::Examples, D::Backend, D::Database],
            Self::ExampleBackendIncompatible { .. } => vec![D::Examples, D::Backend],
            Self::ExampleFrontendIncompatible { .. } => vec![D::Examples, D::Frontend],
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownValue {
                dimension,
                expected,
                ..
            } => vec![
                format!("Allowed values for {}: {expected}", dimension.flag()),
                "Try: stackr list".into(),
            ],
            Self::SentinelCombined { dimension } => vec![format!(
                "Use '{} none' on its own, or drop 'none' from the list",
                dimension.flag()
            )],
            Self::ExamplesRequireApi => vec![
                "Remove the --examples flag".into(),
                "Or choose an API type: --api trpc or --api orpc".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use a name without leading '.' or '-'".into(),
                "Avoid the characters < > : \" | ? *".into(),
                "Examples: my-app, my_app, app123".into(),
            ],
            Self::InvalidInput(msg) => vec![format!("Details: {msg}")],
            Self::IncompatibleWithBackend { backend, .. } => vec![
                "Remove the flags listed above".into(),
                format!("'--backend {backend}' sets them automatically"),
            ],
            Self::FrontendsIncompatibleWithBackend { .. } => {
                vec!["Choose a different frontend or backend".into()]
            }
            Self::RuntimeNoneRequiresBackendMode { .. } => vec![
                "Choose '--runtime bun' or '--runtime node'".into(),
                "Or remove the --runtime flag".into(),
            ],
            Self::OrmRequiresDatabaseKind { required, .. } => vec![
                format!("Use '--database {required}'"),
                "Or choose a different ORM".into(),
            ],
            Self::DatabaseRequiresOrmKind { allowed, .. } => {
                let mut out: Vec<String> =
                    allowed.iter().map(|orm| format!("Use '--orm {orm}'")).collect();
                out.push("Or choose a different database".into());
                out
            }
            Self::OrmUnsupportedDatabase { .. } => vec![
                "Use '--orm mongoose' or '--orm prisma'".into(),
                "Or choose a different database".into(),
            ],
            Self::DatabaseWithoutOrm { .. } => vec![
                "Choose '--orm drizzle', '--orm prisma', or '--orm mongoose'".into(),
            ],
            Self::OrmWithoutDatabase { .. } => vec![
                "Choose a database".into(),
                "Or set '--orm none'".into(),
            ],
            Self::AuthWithoutDatabase => vec![
                "Choose a database".into(),
                "Or set '--no-auth'".into(),
            ],
            Self::DbSetupWithoutDatabase { .. } => vec![
                "Choose a database".into(),
                "Or set '--db-setup none'".into(),
            ],
            Self::DbSetupDatabaseMismatch { required, .. } => vec![
                format!("Use '--database {required}'"),
                "Or choose a different setup".into(),
            ],
            Self::MultipleWebFrontends { .. } => {
                vec!["Choose only one web frontend".into()]
            }
            Self::MultipleNativeFrontends { .. } => {
                vec!["Choose only one native frontend".into()]
            }
            Self::ApiFrontendIncompatible {
                frontend,
                alternative,
                ..
            } => vec![
                format!("Use '--api {alternative}' or '--api none'"),
                format!("Or remove '{frontend}' from --frontend"),
            ],
            Self::AddonFrontendIncompatible { addon, .. } => vec![
                format!("Add a frontend that supports {addon}"),
                format!("Or remove '{addon}' from --addons"),
            ],
            Self::ExampleRequiresDatabase { example, .. } => vec![
                "Choose a database".into(),
                format!("Or remove '{example}' from --examples"),
            ],
            Self::ExampleBackendIncompatible { example, .. }
            | Self::ExampleFrontendIncompatible { example, .. } => {
                vec![format!("Remove '{example}' from --examples")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownValue { .. }
            | Self::SentinelCombined { .. }
            | Self::ExamplesRequireApi
            | Self::InvalidProjectName { .. }
            | Self::InvalidInput(_) => ErrorCategory::Validation,
            _ => ErrorCategory::Compatibility,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Compatibility,
}
