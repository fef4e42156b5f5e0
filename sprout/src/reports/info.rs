//! Info command report data structures.

use std::path::PathBuf;

use sprout_core::{Database, Language, PackageManager, Template};
use sprout_manifest::DetectionSource;

use super::output::{Output, Report};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Package name from package.json or sprout.toml.
    pub name: Option<String>,
    /// Project root.
    pub root: PathBuf,
    pub template: Option<Template>,
    pub language: Language,
    pub package_manager: PackageManager,
    /// Recorded database, when sprout.toml names one.
    pub database: Option<Database>,
    pub has_database: bool,
    /// Entry point, relative to the project root.
    pub entry_point: PathBuf,
    /// Route files under `src/routes`.
    pub routes: Vec<String>,
    pub source: DetectionSource,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();

        let name = self.name.as_deref().unwrap_or("(unnamed)");
        out.preformatted(&format!("  {}", name));
        out.preformatted(&format!("  {}", "─".repeat(name.chars().count())));
        out.newline();

        out.key_value("Root", &self.root.display().to_string());
        if let Some(template) = self.template {
            out.key_value("Template", template.as_str());
        }
        out.key_value("Language", self.language.as_str());
        out.key_value("Package manager", self.package_manager.as_str());
        let database = match (self.database, self.has_database) {
            (Some(database), _) => database.as_str(),
            (None, true) => "prisma",
            (None, false) => "none",
        };
        out.key_value("Database", database);
        out.key_value("Entry point", &self.entry_point.display().to_string());
        let source = match self.source {
            DetectionSource::Metadata => "sprout.toml",
            DetectionSource::Heuristic => "inferred from project files",
        };
        out.key_value("Detected from", source);
        out.newline();

        if !self.routes.is_empty() {
            out.section("Routes");
            for route in &self.routes {
                out.list_item(route);
            }
            out.newline();
        }

        if self.source == DetectionSource::Heuristic {
            out.warning("no sprout.toml found; settings were inferred and may be incomplete");
        }
    }
}
