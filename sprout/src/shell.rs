//! Package manager invocations.

use std::{fmt, path::Path, process::Command};

use eyre::{Context, Result, bail};
use sprout_core::PackageManager;

/// One external command, run with inherited stdio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl Step {
    pub fn install(pm: PackageManager) -> Self {
        Self {
            program: pm.program(),
            args: pm.install_args(),
        }
    }

    pub fn script(pm: PackageManager, script: &str) -> Self {
        Self {
            program: pm.program(),
            args: pm.run_args(script),
        }
    }

    /// Install, then generate the Prisma client and push the schema.
    pub fn database_setup(pm: PackageManager) -> Vec<Self> {
        vec![
            Self::install(pm),
            Self::script(pm, "db:generate"),
            Self::script(pm, "db:push"),
        ]
    }

    /// Run to completion in `cwd`. A non-zero exit is an error.
    pub fn run(&self, cwd: &Path) -> Result<()> {
        let status = Command::new(self.program)
            .args(&self.args)
            .current_dir(cwd)
            .status()
            .wrap_err_with(|| format!("Failed to run '{}'", self))?;

        if !status.success() {
            bail!("'{}' failed with {}", self, status);
        }
        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
