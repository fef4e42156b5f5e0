//! Reading existing sprout projects.
//!
//! This crate parses package.json and the sprout.toml metadata record, and
//! implements project detection: recovering the language, package manager
//! and database of a project created earlier.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod detect;
mod error;
mod metadata;
mod package;

pub use detect::{
    DetectedConfig, DetectionSource, FRAMEWORK_PACKAGE, ORM_CLI_PACKAGE, ORM_CLIENT_PACKAGE,
    detect, detect_package_manager,
};
pub use error::{Error, Result};
pub use metadata::{METADATA_FILE, METADATA_VERSION, ProjectMetadata, ProjectSettings};
pub use package::{PACKAGE_JSON, PackageManifest};
