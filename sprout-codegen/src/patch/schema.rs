//! Appending model blocks to the Prisma schema.

use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use crate::{Error, Result};

/// Result of [`patch_schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The model block was appended.
    Applied,
    /// A model with that name already exists; the file was left alone.
    AlreadyPresent,
}

/// The block appended for a new model.
pub fn model_block(name: &str) -> String {
    format!(
        r#"
model {name} {{
  id        Int      @id @default(autoincrement())
  createdAt DateTime @default(now())
  updatedAt DateTime @updatedAt
}}
"#
    )
}

/// Whether `content` declares `model <name> {`.
pub fn has_model(content: &str, name: &str) -> bool {
    let pattern = format!(r"model\s+{}\s*\{{", regex::escape(name));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(content),
        // An escaped name always compiles; fall back to a literal search.
        Err(_) => content.contains(&format!("model {name} {{")),
    }
}

/// Append a `model <name>` block to the schema at `path` unless one exists.
pub fn patch_schema(path: &Path, name: &str) -> Result<PatchOutcome> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Box::new(Error::SchemaNotFound {
                path: path.to_path_buf(),
            }));
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    if has_model(&content, name) {
        return Ok(PatchOutcome::AlreadyPresent);
    }

    let mut patched = content;
    patched.push_str(&model_block(name));
    std::fs::write(path, patched).map_err(|e| Error::write(path, e))?;
    Ok(PatchOutcome::Applied)
}
