//! Make operation - generate the files of one resource.

use std::path::{Path, PathBuf};

use eyre::{Result, bail};
use sprout_codegen::{
    Entity, ResourceKind,
    patch::{Injection, RouteRegistration, inject_route_file, patch_schema},
    project::files::SCHEMA_PATH,
    resource::resource_files,
};
use sprout_manifest::DetectedConfig;

use crate::reports::{MakeReport, RouteOutcome};

/// Execute the make operation.
///
/// Without `force`, existing resource files are a precondition error. The
/// schema is patched before any file is written; the entry point last.
pub fn make(
    root: &Path,
    project: &DetectedConfig,
    entity: &Entity,
    kind: ResourceKind,
    force: bool,
) -> Result<MakeReport> {
    let files = resource_files(entity, project.language, kind);

    if !force {
        let existing: Vec<String> = files
            .iter()
            .filter(|f| f.path(root).exists())
            .map(|f| f.relative_path().display().to_string())
            .collect();
        if !existing.is_empty() {
            bail!(
                "Resource files for '{}' already exist:\n  {}\nUse --force to overwrite them",
                entity.name,
                existing.join("\n  ")
            );
        }
    }

    let schema = if kind.includes_model() {
        Some(patch_schema(&root.join(SCHEMA_PATH), &entity.capitalized)?)
    } else {
        None
    };

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        written.push(file.write(root)?);
    }

    let entry_point = project.entry_point(root);
    let routes = if kind.includes_routes() {
        let registration = RouteRegistration::new(&entity.name, &entity.route, project.language);
        Some(match inject_route_file(&entry_point, &registration)? {
            Injection::Applied {
                imports, mounts, ..
            } => RouteOutcome::Injected { imports, mounts },
            Injection::AlreadyPresent => RouteOutcome::AlreadyPresent,
        })
    } else {
        None
    };

    Ok(MakeReport {
        entity: entity.name.clone(),
        model: entity.capitalized.clone(),
        route: entity.route.clone(),
        kind,
        files: written,
        entry_point: relative(root, &entry_point),
        schema,
        routes,
        package_manager: project.package_manager,
        synced: false,
    })
}

fn relative(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}
