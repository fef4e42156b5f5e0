use std::path::PathBuf;

use eyre::Result;
use sprout_core::{GeneratedFile, Template, ensure_dir};
use sprout_manifest::ProjectMetadata;

use super::{ProjectConfig, files::*, layout};
use crate::Error;

/// Paths created by [`ProjectWriter::write`], relative to the project root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Writes a new project to disk.
///
/// Existing files are overwritten; refusing to scaffold into an existing
/// directory is the caller's job.
pub struct ProjectWriter<'a> {
    config: &'a ProjectConfig,
}

impl<'a> ProjectWriter<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Directories to create, relative to the project root.
    pub fn directories(&self) -> Vec<PathBuf> {
        layout::directories(self.config.template, self.config.database)
    }

    /// Files to write, in write order.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile>> {
        let config = self.config;
        let language = config.language;
        let database = config.database;
        let mut files: Vec<Box<dyn GeneratedFile>> = Vec::new();

        files.push(Box::new(
            PackageJson::new(&config.name, config.template, language).with_database(database),
        ));
        if config.is_typed() {
            files.push(Box::new(TsConfig::new(config.template == Template::Library)));
        }

        files.push(Box::new(GitIgnore {
            database: config.has_database(),
        }));
        files.push(Box::new(Readme {
            name: config.name.clone(),
            template: config.template,
            language,
            database,
            package_manager: config.package_manager,
        }));
        files.push(Box::new(MetadataFile {
            metadata: ProjectMetadata::new(
                &config.name,
                config.template,
                language,
                database,
                config.package_manager,
            ),
        }));

        match config.template {
            Template::Library => {
                files.push(Box::new(NpmIgnore));
                files.push(Box::new(LibraryEntry {
                    name: config.name.clone(),
                    language,
                }));
            }
            Template::Cli => {
                files.push(Box::new(CliEntry {
                    name: config.name.clone(),
                    language,
                }));
            }
            Template::Api | Template::Web => {
                files.push(Box::new(IndexEntry::new(language, config.template)));
                files.push(Box::new(ErrorMiddleware::new(
                    language,
                    config.has_database(),
                )));
                if config.template == Template::Web {
                    for asset in WebAsset::all(&config.name) {
                        files.push(Box::new(asset));
                    }
                }
            }
        }

        if let Some(schema) = PrismaSchema::for_database(database) {
            files.push(Box::new(PrismaConfig));
            files.push(Box::new(schema));
            files.push(Box::new(PrismaClient::new(language, database)));
        }

        if config.template.uses_express() {
            files.push(Box::new(EnvFile { database }));
        }

        files
    }

    /// Create every directory and write every file of the project.
    pub fn write(&self) -> Result<WriteSummary> {
        if !self.config.database.is_supported() {
            return Err(Box::new(Error::UnsupportedDatabase {
                database: self.config.database,
            })
            .into());
        }

        let root = &self.config.path;
        let mut summary = WriteSummary::default();

        ensure_dir(root)?;
        for dir in self.directories() {
            ensure_dir(&root.join(&dir))?;
            summary.directories.push(dir);
        }
        for file in self.files() {
            summary.files.push(file.write(root)?);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use sprout_core::{Database, Language, PackageManager};
    use tempfile::TempDir;

    use super::*;

    fn config(dir: &TempDir, template: Template, database: Database) -> ProjectConfig {
        ProjectConfig::new(
            "demo",
            dir.path().join("demo"),
            template,
            Language::TypeScript,
            database,
            PackageManager::Pnpm,
        )
    }

    fn paths(writer: &ProjectWriter) -> Vec<String> {
        writer
            .files()
            .iter()
            .map(|f| f.relative_path().display().to_string())
            .collect()
    }

    #[test]
    fn test_write_order() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, Template::Api, Database::Sqlite);
        let writer = ProjectWriter::new(&config);

        assert_eq!(
            paths(&writer),
            [
                "package.json",
                "tsconfig.json",
                ".gitignore",
                "README.md",
                "sprout.toml",
                "src/index.ts",
                "src/middlewares/error.middleware.ts",
                "prisma.config.ts",
                "prisma/schema.prisma",
                "src/lib/prisma.ts",
                ".env",
            ]
        );
    }

    #[test]
    fn test_library_files() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, Template::Library, Database::Sqlite);
        let writer = ProjectWriter::new(&config);
        let paths = paths(&writer);

        assert!(paths.contains(&".npmignore".to_string()));
        assert!(paths.contains(&"src/index.ts".to_string()));
        assert!(!paths.contains(&".env".to_string()));
        assert!(!paths.iter().any(|p| p.starts_with("prisma")));
    }

    #[test]
    fn test_write_creates_tree() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, Template::Web, Database::None);
        let summary = ProjectWriter::new(&config).write().unwrap();

        let root = dir.path().join("demo");
        assert!(root.join("public/index.html").is_file());
        assert!(root.join("src/middlewares").is_dir());
        assert!(root.join("src/utils").is_dir());
        assert!(!root.join("prisma").exists());
        assert_eq!(summary.files.first(), Some(&PathBuf::from("package.json")));
    }

    #[test]
    fn test_write_rejects_reserved_database() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir, Template::Api, Database::Mongodb);
        let err = ProjectWriter::new(&config).write().unwrap_err();

        assert!(err.to_string().contains("reserved"));
        assert!(!dir.path().join("demo").exists());
    }
}
