//! Template file generators.

mod entries;
mod env;
mod error_middleware;
mod gitignore;
mod index;
mod metadata;
mod package_json;
mod prisma;
mod readme;
mod tsconfig;

pub use entries::{CliEntry, LibraryEntry, WebAsset};
pub use env::{ENV_FILE, EnvFile, database_url_line};
pub use error_middleware::ErrorMiddleware;
pub use gitignore::{GITIGNORE, GitIgnore, NpmIgnore, PRISMA_IGNORE_BLOCK, PRISMA_IGNORE_MARKER};
pub use index::IndexEntry;
pub use metadata::MetadataFile;
pub use package_json::{DATABASE_SCRIPTS, Dependency, PackageJson, database_dependencies};
pub use prisma::{PRISMA_CONFIG, PrismaClient, PrismaConfig, PrismaSchema, SCHEMA_PATH};
pub use readme::Readme;
pub use tsconfig::{TSCONFIG, TsConfig};
