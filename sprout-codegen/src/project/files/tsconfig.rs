//! tsconfig.json generator.

use std::path::PathBuf;

use serde_json::{Value, json};
use sprout_core::GeneratedFile;

pub const TSCONFIG: &str = "tsconfig.json";

/// The TypeScript compiler configuration.
pub struct TsConfig {
    /// Libraries emit declarations instead of the `@/*` path alias.
    pub library: bool,
}

impl TsConfig {
    pub fn new(library: bool) -> Self {
        Self { library }
    }

    fn compiler_options(&self) -> Value {
        let mut options = json!({
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "allowSyntheticDefaultImports": true,
            "types": ["node"],
        });
        if self.library {
            options["declaration"] = json!(true);
            options["declarationDir"] = json!("./dist");
        } else {
            options["paths"] = json!({ "@/*": ["./src/*"] });
        }
        options
    }
}

impl GeneratedFile for TsConfig {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(TSCONFIG)
    }

    fn render(&self) -> String {
        let config = json!({
            "compilerOptions": self.compiler_options(),
            "include": ["src/**/*"],
            "exclude": ["node_modules", "dist"],
        });
        format!("{:#}\n", config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_emits_declarations() {
        let value: Value = serde_json::from_str(&TsConfig::new(true).render()).unwrap();
        assert_eq!(value["compilerOptions"]["declaration"], true);
        assert!(value["compilerOptions"].get("paths").is_none());
    }

    #[test]
    fn test_app_has_path_alias() {
        let value: Value = serde_json::from_str(&TsConfig::new(false).render()).unwrap();
        assert_eq!(value["compilerOptions"]["paths"]["@/*"], json!(["./src/*"]));
        assert_eq!(value["exclude"], json!(["node_modules", "dist"]));
    }
}
