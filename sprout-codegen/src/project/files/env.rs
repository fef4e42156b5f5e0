//! .env generator.

use std::path::PathBuf;

use sprout_core::{Database, GeneratedFile};

pub const ENV_FILE: &str = ".env";

/// `DATABASE_URL="<url>"` line for `database`, if it has a placeholder url.
pub fn database_url_line(database: Database) -> Option<String> {
    database
        .default_url()
        .map(|url| format!("DATABASE_URL=\"{url}\""))
}

/// Environment variables for Express projects.
pub struct EnvFile {
    pub database: Database,
}

impl GeneratedFile for EnvFile {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(ENV_FILE)
    }

    fn render(&self) -> String {
        let mut out = String::from("PORT=3000\nNODE_ENV=development\n");
        if let Some(line) = database_url_line(self.database) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_without_database() {
        let env = EnvFile {
            database: Database::None,
        };
        assert_eq!(env.render(), "PORT=3000\nNODE_ENV=development\n");
    }

    #[test]
    fn test_env_with_sqlite() {
        let env = EnvFile {
            database: Database::Sqlite,
        };
        assert!(env.render().ends_with("DATABASE_URL=\"file:./dev.db\"\n"));
    }
}
