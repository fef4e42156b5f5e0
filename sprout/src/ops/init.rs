//! Init operation - create a new project.

use std::path::Path;

use eyre::{Result, bail};
use sprout_codegen::{ProjectConfig, ProjectWriter};

use crate::{reports::InitReport, shell::Step};

/// Execute the init operation.
///
/// Refuses to touch an existing directory.
pub fn init(config: &ProjectConfig) -> Result<InitReport> {
    ensure_available(&config.path)?;

    let summary = ProjectWriter::new(config).write()?;

    Ok(InitReport {
        name: config.name.clone(),
        path: config.path.clone(),
        template: config.template,
        language: config.language,
        database: config.database,
        package_manager: config.package_manager,
        files: summary.files,
        setup: setup_steps(config),
        installed: false,
    })
}

/// Fail when something already exists at `path`.
pub fn ensure_available(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("Directory '{}' already exists", path.display());
    }
    Ok(())
}

/// Commands that finish a new project: install, then the database steps.
pub fn setup_steps(config: &ProjectConfig) -> Vec<Step> {
    if config.has_database() {
        Step::database_setup(config.package_manager)
    } else {
        vec![Step::install(config.package_manager)]
    }
}
