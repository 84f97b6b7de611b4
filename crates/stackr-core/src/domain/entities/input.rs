//! Raw caller input and the record of what the caller explicitly chose.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Dimension;

/// Raw, unparsed selections as they arrive from the command line or an
/// input file. Every field is optional; tokens are validated by the
/// normalizer, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CliInput {
    pub project_name: Option<String>,
    pub project_directory: Option<String>,
    pub api: Option<String>,
    pub backend: Option<String>,
    pub database: Option<String>,
    pub orm: Option<String>,
    pub auth: Option<bool>,
    pub runtime: Option<String>,
    pub db_setup: Option<String>,
    pub package_manager: Option<String>,
    pub frontend: Option<Vec<String>>,
    pub addons: Option<Vec<String>>,
    pub examples: Option<Vec<String>>,
    pub git: Option<bool>,
    pub install: Option<bool>,
}

impl CliInput {
    /// Dimensions present in this input, regardless of value.
    ///
    /// An empty token sequence counts as absent.
    pub fn provided_flags(&self) -> ProvidedFlags {
        let present = |d: Dimension| match d {
            Dimension::Api => self.api.is_some(),
            Dimension::Backend => self.backend.is_some(),
            Dimension::Database => self.database.is_some(),
            Dimension::Orm => self.orm.is_some(),
            Dimension::Auth => self.auth.is_some(),
            Dimension::Runtime => self.runtime.is_some(),
            Dimension::DbSetup => self.db_setup.is_some(),
            Dimension::PackageManager => self.package_manager.is_some(),
            Dimension::Frontend => non_empty(&self.frontend),
            Dimension::Addons => non_empty(&self.addons),
            Dimension::Examples => non_empty(&self.examples),
            Dimension::Git => self.git.is_some(),
            Dimension::Install => self.install.is_some(),
        };
        Dimension::ALL.iter().copied().filter(|d| present(*d)).collect()
    }

    /// Overlay `other` on top of `self`: fields set in `other` win.
    ///
    /// Used by the CLI to combine an `--input` file with explicit flags.
    pub fn merged_with(self, other: CliInput) -> CliInput {
        CliInput {
            project_name: other.project_name.or(self.project_name),
            project_directory: other.project_directory.or(self.project_directory),
            api: other.api.or(self.api),
            backend: other.backend.or(self.backend),
            database: other.database.or(self.database),
            orm: other.orm.or(self.orm),
            auth: other.auth.or(self.auth),
            runtime: other.runtime.or(self.runtime),
            db_setup: other.db_setup.or(self.db_setup),
            package_manager: other.package_manager.or(self.package_manager),
            frontend: other.frontend.or(self.frontend),
            addons: other.addons.or(self.addons),
            examples: other.examples.or(self.examples),
            git: other.git.or(self.git),
            install: other.install.or(self.install),
        }
    }
}

fn non_empty(tokens: &Option<Vec<String>>) -> bool {
    tokens.as_ref().is_some_and(|t| !t.is_empty())
}

/// The set of dimensions the caller explicitly specified.
///
/// Cascades use this to tell "the user chose X" apart from "X is the
/// default": only the former can conflict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvidedFlags(BTreeSet<Dimension>);

impl ProvidedFlags {
    pub fn contains(&self, dimension: Dimension) -> bool {
        self.0.contains(&dimension)
    }

    pub fn insert(&mut self, dimension: Dimension) -> bool {
        self.0.insert(dimension)
    }

    pub fn iter(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Dimension> for ProvidedFlags {
    fn from_iter<I: IntoIterator<Item = Dimension>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
