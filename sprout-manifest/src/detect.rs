//! Recover the configuration of a previously scaffolded project.

use std::path::{Path, PathBuf};

use sprout_core::{Language, PackageManager, Template};

use crate::{PACKAGE_JSON, PackageManifest, ProjectMetadata, Result};

/// Web framework every Express-based scaffold depends on.
pub const FRAMEWORK_PACKAGE: &str = "express";
/// Prisma runtime client package.
pub const ORM_CLIENT_PACKAGE: &str = "@prisma/client";
/// Prisma command-line package.
pub const ORM_CLI_PACKAGE: &str = "prisma";

const TSCONFIG: &str = "tsconfig.json";
const SRC_DIR: &str = "src";

/// Where a [`DetectedConfig`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    /// Read from the sprout.toml record.
    Metadata,
    /// Inferred from tsconfig.json, lockfiles and package.json dependencies.
    Heuristic,
}

/// Settings of an existing project, recomputed on every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedConfig {
    pub language: Language,
    pub package_manager: PackageManager,
    pub src_dir: String,
    pub file_extension: String,
    pub has_database: bool,
    /// Only known when the project carries a sprout.toml record.
    pub template: Option<Template>,
    pub source: DetectionSource,
}

impl DetectedConfig {
    pub fn is_typed(&self) -> bool {
        self.language.is_typed()
    }

    /// Path of the source directory under `root`.
    pub fn src_path(&self, root: &Path) -> PathBuf {
        root.join(&self.src_dir)
    }

    /// Path of the Express entry point under `root`.
    pub fn entry_point(&self, root: &Path) -> PathBuf {
        self.src_path(root)
            .join(format!("index.{}", self.file_extension))
    }

    fn new(
        language: Language,
        package_manager: PackageManager,
        has_database: bool,
        template: Option<Template>,
        source: DetectionSource,
    ) -> Self {
        Self {
            language,
            package_manager,
            src_dir: SRC_DIR.to_string(),
            file_extension: language.extension().to_string(),
            has_database,
            template,
            source,
        }
    }
}

/// Inspect `dir` and recover the configuration it was scaffolded with.
///
/// Returns `Ok(None)` when the directory is not an Express project created by
/// this tool: no package.json, no `src/` directory, or no `express`
/// dependency. Malformed package.json or sprout.toml files are errors.
pub fn detect(dir: impl AsRef<Path>) -> Result<Option<DetectedConfig>> {
    let dir = dir.as_ref();

    if !dir.join(PACKAGE_JSON).is_file() || !dir.join(SRC_DIR).is_dir() {
        return Ok(None);
    }

    let package = PackageManifest::open(dir)?;
    if !package.has_dependency(FRAMEWORK_PACKAGE) {
        return Ok(None);
    }

    if let Some(metadata) = ProjectMetadata::open(dir)? {
        let settings = metadata.project;
        return Ok(Some(DetectedConfig::new(
            settings.language,
            settings.package_manager,
            !settings.database.is_none(),
            Some(settings.template),
            DetectionSource::Metadata,
        )));
    }

    let language = Language::from_typed(dir.join(TSCONFIG).is_file());
    let has_database =
        package.depends_on(ORM_CLIENT_PACKAGE) || package.depends_on(ORM_CLI_PACKAGE);

    Ok(Some(DetectedConfig::new(
        language,
        detect_package_manager(dir),
        has_database,
        None,
        DetectionSource::Heuristic,
    )))
}

/// Pick the package manager whose lockfile is present, checked in
/// [`PackageManager::ALL`] order. Defaults to pnpm.
pub fn detect_package_manager(dir: &Path) -> PackageManager {
    PackageManager::ALL
        .into_iter()
        .find(|pm| dir.join(pm.lockfile()).exists())
        .unwrap_or_default()
}
