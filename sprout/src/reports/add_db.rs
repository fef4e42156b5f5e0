//! Add db command report data structures.

use std::path::PathBuf;

use sprout_core::{Database, PackageManager};

use super::output::{Output, Report};
use crate::shell::Step;

/// Report data from adding a database to a project.
#[derive(Debug)]
pub struct AddDbReport {
    pub database: Database,
    /// New files, relative to the project root.
    pub created: Vec<PathBuf>,
    /// Rewritten files, relative to the project root.
    pub updated: Vec<PathBuf>,
    pub package_manager: PackageManager,
    /// Commands that finish the setup.
    pub setup: Vec<Step>,
    /// Whether the setup commands already ran.
    pub installed: bool,
}

impl Report for AddDbReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.title(&format!("Added {} database", self.database));

        out.section("Files");
        for file in &self.created {
            out.added_item(&file.display().to_string());
        }
        for file in &self.updated {
            out.changed_item(&file.display().to_string());
        }
        out.newline();

        if self.database == Database::Postgresql {
            out.warning("update DATABASE_URL in .env with your PostgreSQL connection string");
        }

        out.section("Next steps");
        let mut steps = Vec::new();
        if !self.installed {
            steps.extend(self.setup.iter().map(Step::to_string));
        }
        steps.push("Generate a resource with 'sprout make <entity>'".to_string());
        for (i, step) in steps.iter().enumerate() {
            out.numbered_item(i + 1, step);
        }
    }
}
