//! Code generation for sprout projects.
//!
//! - [`project`] renders the files of a new project and writes them to disk.
//! - [`resource`] renders the CRUD files for one entity of an existing project.
//! - [`patch`] edits files the tool generated earlier: the Prisma schema and
//!   the Express entry point.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
pub mod patch;
pub mod project;
pub mod resource;

pub use error::{Error, Result};
pub use project::{ProjectConfig, ProjectWriter, WriteSummary};
pub use resource::{Entity, ResourceKind};
