//! Info operation - project information.

use std::path::Path;

use eyre::Result;
use sprout_manifest::{DetectedConfig, PackageManifest, ProjectMetadata};

use crate::reports::InfoReport;

/// Execute the info operation.
///
/// Collects project information from the detected configuration and, when
/// present, the sprout.toml record.
pub fn info(root: &Path, project: &DetectedConfig) -> Result<InfoReport> {
    let metadata = ProjectMetadata::open(root)?;
    let package = PackageManifest::open(root)?;

    let name = package
        .name
        .or_else(|| metadata.as_ref().map(|m| m.project.name.clone()));
    let database = metadata.as_ref().map(|m| m.project.database);

    let entry_point = project.entry_point(root);
    let entry_point = entry_point
        .strip_prefix(root)
        .unwrap_or(&entry_point)
        .to_path_buf();

    Ok(InfoReport {
        name,
        root: std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf()),
        template: project.template,
        language: project.language,
        package_manager: project.package_manager,
        database,
        has_database: project.has_database,
        entry_point,
        routes: route_names(root, project),
        source: project.source,
    })
}

/// Entity names of the `<name>.routes.<ext>` files, sorted.
fn route_names(root: &Path, project: &DetectedConfig) -> Vec<String> {
    let suffix = format!(".routes.{}", project.file_extension);
    let Ok(entries) = std::fs::read_dir(project.src_path(root).join("routes")) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            file_name.strip_suffix(&suffix).map(str::to_string)
        })
        .collect();
    names.sort();
    names
}
