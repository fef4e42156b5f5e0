//! The sprout.toml project metadata record.
//!
//! `sprout init` writes this file once, recording the settings the project
//! was created with. Later commands read it back instead of guessing the
//! settings from lockfiles and dependency lists.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sprout_core::{Database, Language, PackageManager, Template};

use crate::{Error, Result};

pub const METADATA_FILE: &str = "sprout.toml";

/// Format version written by this release.
pub const METADATA_VERSION: u32 = 1;

/// Root of sprout.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Format version of the record
    pub version: u32,

    /// Settings chosen at creation time
    pub project: ProjectSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    pub name: String,
    pub template: Template,
    pub language: Language,
    #[serde(default = "default_database")]
    pub database: Database,
    #[serde(default)]
    pub package_manager: PackageManager,
}

fn default_database() -> Database {
    Database::None
}

impl ProjectMetadata {
    pub fn new(
        name: impl Into<String>,
        template: Template,
        language: Language,
        database: Database,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            version: METADATA_VERSION,
            project: ProjectSettings {
                name: name.into(),
                template,
                language,
                database,
                package_manager,
            },
        }
    }

    /// Read sprout.toml from `dir`, or `None` when the project has no record.
    pub fn open(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(METADATA_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string()).map(Some)
    }

    /// Parse sprout.toml content with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::metadata(e, content, filename))
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.project.database = database;
        self
    }

    /// Render the record as TOML.
    pub fn render(&self) -> String {
        let settings = &self.project;
        format!(
            r#"# Settings this project was created with.
# sprout make / sprout add read them back; keep this file under version control.
version = {}

[project]
name = {}
template = "{}"
language = "{}"
database = "{}"
package_manager = "{}"
"#,
            self.version,
            toml::Value::from(settings.name.as_str()),
            settings.template,
            settings.language,
            settings.database,
            settings.package_manager,
        )
    }

    /// Write the record to `dir`, replacing an existing one.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join(METADATA_FILE);
        std::fs::write(&path, self.render()).map_err(|e| Error::write(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn sample() -> ProjectMetadata {
        ProjectMetadata::new(
            "my-api",
            Template::Api,
            Language::TypeScript,
            Database::Sqlite,
            PackageManager::Yarn,
        )
    }

    #[test]
    fn test_render_is_parseable() {
        let metadata = sample();
        let parsed =
            ProjectMetadata::from_str_with_filename(&metadata.render(), METADATA_FILE).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_render_layout() {
        let rendered = sample().render();
        assert!(rendered.contains("version = 1\n"));
        assert!(rendered.contains("name = \"my-api\"\n"));
        assert!(rendered.contains("template = \"api\"\n"));
        assert!(rendered.contains("language = \"typescript\"\n"));
        assert!(rendered.contains("database = \"sqlite\"\n"));
        assert!(rendered.contains("package_manager = \"yarn\"\n"));
    }

    #[test]
    fn test_optional_fields_default() {
        let parsed = ProjectMetadata::from_str_with_filename(
            r#"
version = 1

[project]
name = "lib"
template = "library"
language = "javascript"
"#,
            METADATA_FILE,
        )
        .unwrap();

        assert_eq!(parsed.project.database, Database::None);
        assert_eq!(parsed.project.package_manager, PackageManager::Pnpm);
    }

    #[test]
    fn test_unknown_template_is_an_error() {
        let result = ProjectMetadata::from_str_with_filename(
            "version = 1\n[project]\nname = \"x\"\ntemplate = \"desktop\"\nlanguage = \"typescript\"\n",
            METADATA_FILE,
        );
        assert!(matches!(result.map_err(|e| *e), Err(Error::Metadata { .. })));
    }

    #[test]
    fn test_open_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        assert!(ProjectMetadata::open(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_save_and_open() {
        let temp = TempDir::new().unwrap();
        let metadata = sample().with_database(Database::Postgresql);

        metadata.save(temp.path()).unwrap();
        let reopened = ProjectMetadata::open(temp.path()).unwrap().unwrap();

        assert_eq!(reopened, metadata);
        assert_eq!(reopened.project.database, Database::Postgresql);
    }
}
