//! New project scaffolding.

pub mod files;
mod layout;
pub mod retrofit;
mod writer;

use std::path::PathBuf;

use sprout_core::{Database, Language, PackageManager, Template};

pub use layout::directories;
pub use writer::{ProjectWriter, WriteSummary};

/// Fully resolved settings for a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub name: String,
    pub path: PathBuf,
    pub language: Language,
    pub database: Database,
    pub template: Template,
    pub package_manager: PackageManager,
}

impl ProjectConfig {
    /// Create a configuration.
    ///
    /// Templates without an Express server never get a database, whatever
    /// was requested.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        template: Template,
        language: Language,
        database: Database,
        package_manager: PackageManager,
    ) -> Self {
        let database = if template.supports_database() {
            database
        } else {
            Database::None
        };
        Self {
            name: name.into(),
            path: path.into(),
            language,
            database,
            template,
            package_manager,
        }
    }

    pub fn is_typed(&self) -> bool {
        self.language.is_typed()
    }

    pub fn extension(&self) -> &'static str {
        self.language.extension()
    }

    pub fn has_database(&self) -> bool {
        !self.database.is_none()
    }
}
