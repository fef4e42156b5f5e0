use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sprout_codegen::ProjectConfig;
use sprout_core::{Database, PackageManager, Template};

use crate::{
    ops,
    reports::{Output, Report, TerminalOutput},
    settings::{DialoguerPrompter, Resolver},
};

#[derive(Args)]
pub struct InitCommand {
    /// Project name, also the directory to create
    pub name: Option<String>,

    /// Project template: api, npm, cli or web
    #[arg(short, long, env = "SPROUT_TEMPLATE")]
    pub template: Option<Template>,

    /// Database: sqlite, postgresql or none
    #[arg(short, long, env = "SPROUT_DATABASE")]
    pub database: Option<Database>,

    /// Generate TypeScript sources
    #[arg(long, overrides_with = "no_typescript")]
    pub typescript: bool,

    /// Generate JavaScript sources
    #[arg(long, overrides_with = "typescript")]
    pub no_typescript: bool,

    /// Package manager: pnpm, yarn or npm
    #[arg(short, long, env = "SPROUT_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManager>,

    /// Accept the default for every setting that was not given
    #[arg(short, long)]
    pub yes: bool,

    /// Do not install dependencies or set up the database
    #[arg(long)]
    pub skip_install: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let mut resolver = Resolver::new(DialoguerPrompter::new(), self.yes);

        let name = resolver.project_name(self.name.as_deref())?;
        let path = PathBuf::from(&name);
        ops::init::ensure_available(&path)?;

        let template = resolver.template(self.template)?;
        let language = resolver.language(self.typescript_flag())?;
        let database = resolver.database(self.database, template)?;
        let package_manager = resolver.package_manager(self.package_manager)?;

        let config = ProjectConfig::new(name, path, template, language, database, package_manager);

        let mut report = ops::init(&config)?;
        let mut out = TerminalOutput::new();

        if !self.skip_install {
            for step in &report.setup {
                out.divider(&step.to_string());
                step.run(&config.path)?;
            }
            report.installed = true;
        }

        report.render(&mut out);
        Ok(())
    }

    fn typescript_flag(&self) -> Option<bool> {
        if self.typescript {
            Some(true)
        } else if self.no_typescript {
            Some(false)
        } else {
            None
        }
    }
}
