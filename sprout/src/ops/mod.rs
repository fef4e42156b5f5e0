//! Core operations.
//!
//! This module contains the business logic for sprout commands,
//! separated from CLI argument parsing, prompts and output rendering.
//! Operations never run external commands; they list them for the caller.

pub mod add_db;
pub mod info;
pub mod init;
pub mod make;

pub use add_db::add_db;
pub use info::info;
pub use init::init;
pub use make::make;
