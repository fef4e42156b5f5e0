//! .gitignore generator.

use std::path::PathBuf;

use sprout_core::GeneratedFile;

pub const GITIGNORE: &str = ".gitignore";

/// Lines ignoring the SQLite database and the generated Prisma client.
pub const PRISMA_IGNORE_BLOCK: &str = "
# Prisma
*.db
*.db-journal
src/lib/generated/
";

/// Marker used to tell whether the Prisma block is already present.
pub const PRISMA_IGNORE_MARKER: &str = "src/lib/generated/";

/// The .gitignore file for Node.js projects.
pub struct GitIgnore {
    pub database: bool,
}

impl GeneratedFile for GitIgnore {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(GITIGNORE)
    }

    fn render(&self) -> String {
        let mut out = String::from(
            r#"node_modules
.env
.env.local
dist
*.log
.DS_Store
"#,
        );
        if self.database {
            out.push_str(PRISMA_IGNORE_BLOCK);
        }
        out
    }
}

/// The .npmignore file for library projects.
pub struct NpmIgnore;

impl GeneratedFile for NpmIgnore {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".npmignore")
    }

    fn render(&self) -> String {
        r#"src/
*.ts
!dist/
node_modules/
.env
*.log
.DS_Store
tsconfig.json
"#
        .to_string()
    }
}
