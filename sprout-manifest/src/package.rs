//! Read access to a project's package.json.

use std::{collections::BTreeMap, path::Path};

use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

pub const PACKAGE_JSON: &str = "package.json";

/// The parts of package.json the scaffolder cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, Value>,
    #[serde(default)]
    pub scripts: BTreeMap<String, Value>,
}

impl PackageManifest {
    /// Read and parse the package.json inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(PACKAGE_JSON);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse package.json content with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::package_json(e, content, filename))
    }

    /// Whether `name` is a runtime dependency.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Whether `name` is a development dependency.
    pub fn has_dev_dependency(&self, name: &str) -> bool {
        self.dev_dependencies.contains_key(name)
    }

    /// Whether `name` appears in either dependency table.
    pub fn depends_on(&self, name: &str) -> bool {
        self.has_dependency(name) || self.has_dev_dependency(name)
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.contains_key(name)
    }
}
