//! Add db operation - retrofit Prisma onto an existing project.

use std::path::Path;

use eyre::{Result, bail};
use sprout_codegen::project::retrofit::Retrofit;
use sprout_core::Database;
use sprout_manifest::DetectedConfig;

use crate::{reports::AddDbReport, shell::Step};

/// Execute the add db operation.
///
/// Every file is planned before the first write.
pub fn add_db(root: &Path, project: &DetectedConfig, database: Database) -> Result<AddDbReport> {
    if project.has_database {
        bail!("This project already has a database configured");
    }

    let retrofit = Retrofit::plan(root, project.language, database)?;
    let existed: Vec<bool> = retrofit.files().iter().map(|f| f.exists()).collect();
    let written = retrofit.apply()?;

    let (updated, created): (Vec<_>, Vec<_>) = written
        .into_iter()
        .zip(existed)
        .partition(|(_, existed)| *existed);

    Ok(AddDbReport {
        database: retrofit.database(),
        created: created.into_iter().map(|(path, _)| path).collect(),
        updated: updated.into_iter().map(|(path, _)| path).collect(),
        package_manager: project.package_manager,
        setup: Step::database_setup(project.package_manager),
        installed: false,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use sprout_codegen::{ProjectConfig, ProjectWriter};
    use sprout_core::{Language, PackageManager, Template};
    use sprout_manifest::{ProjectMetadata, detect};
    use tempfile::TempDir;

    use super::*;

    fn project(dir: &TempDir, database: Database) -> (PathBuf, DetectedConfig) {
        let config = ProjectConfig::new(
            "shop",
            dir.path().join("shop"),
            Template::Api,
            Language::JavaScript,
            database,
            PackageManager::Npm,
        );
        ProjectWriter::new(&config).write().unwrap();
        let detected = detect(&config.path).unwrap().unwrap();
        (config.path, detected)
    }

    #[test]
    fn test_add_db_to_project_without_one() {
        let dir = TempDir::new().unwrap();
        let (root, detected) = project(&dir, Database::None);

        let report = add_db(&root, &detected, Database::Postgresql).unwrap();

        assert!(report.created.contains(&PathBuf::from("prisma/schema.prisma")));
        assert!(report.created.contains(&PathBuf::from("src/lib/prisma.js")));
        assert!(report.updated.contains(&PathBuf::from("package.json")));
        assert!(report.updated.contains(&PathBuf::from(".env")));

        let redetected = detect(&root).unwrap().unwrap();
        assert!(redetected.has_database);
        let metadata = ProjectMetadata::open(&root).unwrap().unwrap();
        assert_eq!(metadata.project.database, Database::Postgresql);
    }

    #[test]
    fn test_add_db_refuses_second_database() {
        let dir = TempDir::new().unwrap();
        let (root, detected) = project(&dir, Database::Sqlite);

        let err = add_db(&root, &detected, Database::Postgresql).unwrap_err();

        assert!(err.to_string().contains("already has a database"));
    }
}
