use std::path::PathBuf;

use sprout_core::GeneratedFile;
use sprout_manifest::{METADATA_FILE, ProjectMetadata};

/// The sprout.toml record written at project creation.
pub struct MetadataFile {
    pub metadata: ProjectMetadata,
}

impl GeneratedFile for MetadataFile {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(METADATA_FILE)
    }

    fn render(&self) -> String {
        self.metadata.render()
    }
}
