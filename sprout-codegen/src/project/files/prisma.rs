//! Prisma schema, config and client generators.

use std::path::PathBuf;

use sprout_core::{Database, GeneratedFile, Language};

pub const SCHEMA_PATH: &str = "prisma/schema.prisma";
pub const PRISMA_CONFIG: &str = "prisma.config.ts";

/// `prisma/schema.prisma` with the generator and datasource blocks.
pub struct PrismaSchema {
    pub provider: &'static str,
}

impl PrismaSchema {
    /// `None` when `database` has no Prisma provider.
    pub fn for_database(database: Database) -> Option<Self> {
        database.prisma_provider().map(|provider| Self { provider })
    }
}

impl GeneratedFile for PrismaSchema {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(SCHEMA_PATH)
    }

    fn render(&self) -> String {
        format!(
            r#"generator client {{
  provider = "prisma-client"
  output   = "../src/lib/generated/prisma"
}}

datasource db {{
  provider = "{}"
}}
"#,
            self.provider
        )
    }
}

/// `prisma.config.ts`, always TypeScript since the Prisma CLI loads it.
pub struct PrismaConfig;

impl GeneratedFile for PrismaConfig {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(PRISMA_CONFIG)
    }

    fn render(&self) -> String {
        r#"import "dotenv/config";
import { defineConfig, env } from "prisma/config";

export default defineConfig({
  schema: "prisma/schema.prisma",
  migrations: {
    path: "prisma/migrations",
  },
  datasource: {
    url: env("DATABASE_URL"),
  },
});
"#
        .to_string()
    }
}

/// `src/lib/prisma.<ext>`, the shared client instance.
pub struct PrismaClient {
    pub language: Language,
    pub database: Database,
}

impl PrismaClient {
    pub fn new(language: Language, database: Database) -> Self {
        Self { language, database }
    }
}

impl GeneratedFile for PrismaClient {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("src/lib/prisma.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let typed = self.language.is_typed();
        let client_module = if typed {
            "./generated/prisma/client"
        } else {
            "./generated/prisma/index.js"
        };
        let assert_set = if typed { "!" } else { "" };
        let (adapter, package, option) = match self.database {
            Database::Postgresql => ("PrismaPg", "@prisma/adapter-pg", "connectionString"),
            _ => (
                "PrismaBetterSqlite3",
                "@prisma/adapter-better-sqlite3",
                "url",
            ),
        };

        format!(
            r#"import {{ PrismaClient }} from "{client_module}";
import {{ {adapter} }} from "{package}";

const adapter = new {adapter}({{
  {option}: process.env.DATABASE_URL{assert_set},
}});

const prisma = new PrismaClient({{ adapter }});

export default prisma;
"#
        )
    }
}
