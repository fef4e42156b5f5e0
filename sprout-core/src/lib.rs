//! Core utilities and types for the sprout scaffolder.
//!
//! This crate provides the vocabulary shared by every other sprout crate:
//! the project option enums, file writing primitives and naming helpers.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, GeneratedFile, ensure_dir};
// Project options
pub use types::{Database, Language, PackageManager, Template};
// String utilities
pub use utils::{capitalize_first, is_identifier, is_project_name, is_route_path};
