use clap::{Args, Subcommand};
use eyre::{Context, Result, bail};
use sprout_core::Database;
use sprout_manifest::detect;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Output, Report, TerminalOutput},
    settings::{DialoguerPrompter, Resolver},
};

#[derive(Args)]
pub struct AddCommand {
    #[command(subcommand)]
    command: AddSubcommand,
}

#[derive(Subcommand)]
enum AddSubcommand {
    /// Add Prisma with SQLite or PostgreSQL to a project without a database
    Db(AddDbArgs),
}

#[derive(Args)]
struct AddDbArgs {
    /// Database: sqlite or postgresql
    database: Option<Database>,

    /// Do not install dependencies or push the schema
    #[arg(long)]
    skip_install: bool,
}

impl AddCommand {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            AddSubcommand::Db(args) => Self::add_db(args),
        }
    }

    fn add_db(args: &AddDbArgs) -> Result<()> {
        let root = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let Some(project) = detect(&root).unwrap_or_exit() else {
            bail!(
                "Not in a sprout project (package.json with express and a src/ directory). \
                 Run 'sprout init' first"
            );
        };
        if project.has_database {
            bail!("This project already has a database configured");
        }

        let database =
            Resolver::new(DialoguerPrompter::new(), false).retrofit_database(args.database)?;

        let mut report = ops::add_db(&root, &project, database)?;
        let mut out = TerminalOutput::new();

        if !args.skip_install {
            for step in &report.setup {
                out.divider(&step.to_string());
                step.run(&root)?;
            }
            report.installed = true;
        }

        report.render(&mut out);
        Ok(())
    }
}
