use std::path::PathBuf;

use sprout_core::{Database, Template};

const COMMON: [&str; 4] = ["src", "src/utils", "src/lib", "src/types"];

const API: [&str; 8] = [
    "src/controllers",
    "src/models",
    "src/routes",
    "src/validations",
    "src/middlewares",
    "src/config",
    "src/services",
    "requests",
];

/// Directories created for a template, relative to the project root.
pub fn directories(template: Template, database: Database) -> Vec<PathBuf> {
    let mut dirs: Vec<&str> = match template {
        Template::Library => vec!["src"],
        Template::Cli => COMMON
            .iter()
            .copied()
            .chain(["src/commands", "src/bin"])
            .collect(),
        Template::Web => COMMON
            .iter()
            .copied()
            .chain(["src/middlewares", "public"])
            .collect(),
        Template::Api => COMMON.iter().chain(API.iter()).copied().collect(),
    };

    if !database.is_none() {
        dirs.push("prisma");
    }

    dirs.into_iter().map(PathBuf::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(template: Template, database: Database) -> Vec<String> {
        directories(template, database)
            .into_iter()
            .map(|p| p.display().to_string())
            .collect()
    }

    #[test]
    fn test_library_is_flat() {
        assert_eq!(names(Template::Library, Database::None), vec!["src"]);
    }

    #[test]
    fn test_api_layout() {
        let dirs = names(Template::Api, Database::Sqlite);
        for expected in [
            "src/controllers",
            "src/models",
            "src/routes",
            "src/services",
            "src/validations",
            "src/middlewares",
            "src/types",
            "src/lib",
            "src/config",
            "src/utils",
            "requests",
            "prisma",
        ] {
            assert!(dirs.contains(&expected.to_string()), "missing {expected}");
        }
    }

    #[test]
    fn test_prisma_only_with_database() {
        assert!(!names(Template::Web, Database::None).contains(&"prisma".to_string()));
        assert!(names(Template::Web, Database::Postgresql).contains(&"prisma".to_string()));
    }
}
