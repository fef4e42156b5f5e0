use clap::Args;
use eyre::{Context, Result, bail};
use sprout_codegen::{Entity, ResourceKind};
use sprout_manifest::detect;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Output, Report, TerminalOutput},
    settings::{DialoguerPrompter, Resolver},
    shell::Step,
};

#[derive(Args)]
pub struct MakeCommand {
    /// Entity name, e.g. "user" or "blogPost"
    pub entity: String,

    /// What to generate: model, controller, routes or resources
    #[arg(default_value_t = ResourceKind::Resources)]
    pub kind: ResourceKind,

    /// Database table name (defaults to the entity name)
    #[arg(long)]
    pub table: Option<String>,

    /// Route path (defaults to /<table>)
    #[arg(long)]
    pub route: Option<String>,

    /// Overwrite existing resource files
    #[arg(short, long)]
    pub force: bool,

    /// Accept the default table and route
    #[arg(short, long)]
    pub yes: bool,

    /// Do not run db:generate and db:push after adding a model
    #[arg(long)]
    pub skip_db_sync: bool,
}

impl MakeCommand {
    pub fn run(&self) -> Result<()> {
        let root = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let Some(project) = detect(&root).unwrap_or_exit() else {
            bail!(
                "Not in a sprout project (package.json with express and a src/ directory). \
                 Run 'sprout init' first"
            );
        };

        let mut resolver = Resolver::new(DialoguerPrompter::new(), self.yes);
        let entity = Entity::new(&self.entity).unwrap_or_exit();
        let table = resolver.table(self.table.as_deref(), &entity.table)?;
        let entity = entity.with_table(table).unwrap_or_exit();
        let route = resolver.route(self.route.as_deref(), &entity.route)?;
        let entity = entity.with_route(route).unwrap_or_exit();

        let mut report = ops::make(&root, &project, &entity, self.kind, self.force)?;
        let mut out = TerminalOutput::new();

        if report.needs_db_sync() && !self.skip_db_sync {
            for script in ["db:generate", "db:push"] {
                let step = Step::script(project.package_manager, script);
                out.divider(&step.to_string());
                step.run(&root)?;
            }
            report.synced = true;
        }

        report.render(&mut out);
        Ok(())
    }
}
