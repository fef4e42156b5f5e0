//! In-place edits of files the tool generated earlier.

pub mod index;
pub mod schema;

pub use index::{Anchor, Injection, RouteRegistration, inject_route, inject_route_file};
pub use schema::{PatchOutcome, model_block, patch_schema};
