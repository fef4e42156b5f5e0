//! Init command report data structures.

use std::path::PathBuf;

use sprout_core::{Database, Language, PackageManager, Template};

use super::output::{Output, Report};
use crate::shell::Step;

/// Report data from creating a project.
#[derive(Debug)]
pub struct InitReport {
    /// Project name.
    pub name: String,
    /// Project directory, as given.
    pub path: PathBuf,
    pub template: Template,
    pub language: Language,
    pub database: Database,
    pub package_manager: PackageManager,
    /// Written files, relative to the project root.
    pub files: Vec<PathBuf>,
    /// Commands that finish the setup.
    pub setup: Vec<Step>,
    /// Whether the setup commands already ran.
    pub installed: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.title(&format!("Created {}", self.name));
        out.key_value("Template", self.template.as_str());
        out.key_value("Language", self.language.as_str());
        if self.template.supports_database() {
            out.key_value("Database", self.database.as_str());
        }
        out.key_value("Package manager", self.package_manager.as_str());
        out.newline();

        out.section("Files");
        for file in &self.files {
            out.added_item(&file.display().to_string());
        }
        out.newline();

        if self.database == Database::Postgresql {
            out.warning("update DATABASE_URL in .env with your PostgreSQL connection string");
        }
        if self.database == Database::Sqlite && self.package_manager == PackageManager::Pnpm {
            out.warning("if better-sqlite3 fails to load, run 'pnpm approve-builds' and reinstall");
        }

        out.section("Next steps");
        let mut steps = vec![format!("cd {}", self.path.display())];
        if !self.installed {
            steps.extend(self.setup.iter().map(Step::to_string));
        }
        steps.push(self.package_manager.run_display("dev"));
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
