//! Make command report data structures.

use std::path::PathBuf;

use sprout_codegen::{ResourceKind, patch::Anchor, patch::PatchOutcome};
use sprout_core::PackageManager;

use super::output::{Output, Report};

/// What happened to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    Injected { imports: Anchor, mounts: Anchor },
    AlreadyPresent,
}

/// Report data from generating a resource.
#[derive(Debug)]
pub struct MakeReport {
    /// Entity name as given.
    pub entity: String,
    /// Model name in the Prisma schema.
    pub model: String,
    /// Mount path of the router.
    pub route: String,
    pub kind: ResourceKind,
    /// Written files, relative to the project root.
    pub files: Vec<PathBuf>,
    /// Entry point, relative to the project root.
    pub entry_point: PathBuf,
    pub schema: Option<PatchOutcome>,
    pub routes: Option<RouteOutcome>,
    pub package_manager: PackageManager,
    /// Whether `db:generate` and `db:push` already ran.
    pub synced: bool,
}

impl MakeReport {
    /// Whether the Prisma client should be regenerated after this run.
    pub fn needs_db_sync(&self) -> bool {
        self.schema.is_some()
    }
}

impl Report for MakeReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.title(&format!("Generated {} ({})", self.entity, self.kind));

        out.section("Files");
        for file in &self.files {
            out.added_item(&file.display().to_string());
        }
        match self.schema {
            Some(PatchOutcome::Applied) => out.changed_item("prisma/schema.prisma"),
            Some(PatchOutcome::AlreadyPresent) => out.warning(&format!(
                "model {} already exists in prisma/schema.prisma, left unchanged",
                self.model
            )),
            None => {}
        }

        let entry = self.entry_point.display().to_string();
        match self.routes {
            Some(RouteOutcome::Injected { imports, mounts }) => {
                out.changed_item(&format!("{} (mounted at {})", entry, self.route));
                if imports.is_compatibility_path() || mounts.is_compatibility_path() {
                    out.warning(&format!(
                        "{} has no sprout markers, routes were placed next to existing code; check the result",
                        entry
                    ));
                }
            }
            Some(RouteOutcome::AlreadyPresent) => out.warning(&format!(
                "{} routes are already registered in {}, left unchanged",
                self.entity, entry
            )),
            None => {}
        }
        out.newline();

        if self.kind.includes_model() {
            out.section("Next steps");
            let mut steps = vec![format!(
                "Add fields to the {} model in prisma/schema.prisma",
                self.model
            )];
            let verb = if self.synced { "Re-run" } else { "Run" };
            steps.push(format!(
                "{} {} and {}",
                verb,
                self.package_manager.run_display("db:generate"),
                self.package_manager.run_display("db:push")
            ));
            for (i, step) in steps.iter().enumerate() {
                out.numbered_item(i + 1, step);
            }
        }
    }
}
