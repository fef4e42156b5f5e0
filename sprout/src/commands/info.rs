use clap::Args;
use eyre::{Context, Result, bail};
use sprout_manifest::detect;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self) -> Result<()> {
        let root = std::env::current_dir().wrap_err("Failed to get current directory")?;
        let Some(project) = detect(&root).unwrap_or_exit() else {
            bail!("Not in a sprout project (package.json with express and a src/ directory)");
        };

        let report = ops::info(&root, &project)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
