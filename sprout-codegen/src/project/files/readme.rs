//! README.md generator.

use std::fmt::Write;
use std::path::PathBuf;

use sprout_core::{Database, GeneratedFile, Language, PackageManager, Template};

/// The project README, tailored to the template and chosen stack.
pub struct Readme {
    pub name: String,
    pub template: Template,
    pub language: Language,
    pub database: Database,
    pub package_manager: PackageManager,
}

impl Readme {
    fn render_library(&self, out: &mut String) {
        let pm = self.package_manager;
        let lang = if self.language.is_typed() {
            "typescript"
        } else {
            "javascript"
        };
        let _ = write!(
            out,
            r#"A brief description of your package.

## Installation

```bash
npm install {name}
```

## Usage

```{lang}
import {{ hello }} from "{name}";

console.log(hello("World")); // Hello, World!
```

## Development

```bash
{dev}
{build}
```

## Publishing

```bash
npm publish
```
"#,
            name = self.name,
            dev = pm.run_display("dev"),
            build = pm.run_display("build"),
        );
    }

    fn render_cli(&self, out: &mut String) {
        let pm = self.package_manager;
        let _ = write!(
            out,
            r#"A Node.js command-line tool.

## Usage

```bash
{name} hello
```

## Development

```bash
{dev}
{start}
```
"#,
            name = self.name,
            dev = pm.run_display("dev"),
            start = pm.run_display("start"),
        );
    }

    fn render_server(&self, out: &mut String) {
        let pm = self.package_manager;
        let ext = self.language.extension();

        out.push_str("An Express server.\n\n## Getting started\n\n```bash\n");
        let _ = writeln!(out, "{} install", pm.program());
        if !self.database.is_none() {
            let _ = writeln!(out, "{}", pm.run_display("db:generate"));
            let _ = writeln!(out, "{}", pm.run_display("db:push"));
        }
        let _ = writeln!(out, "{}", pm.run_display("dev"));
        out.push_str("```\n\nThe server listens on `http://localhost:3000`.\n");

        if pm == PackageManager::Pnpm && self.database == Database::Sqlite {
            out.push_str(
                "\npnpm does not build native packages by default. Run `pnpm approve-builds` \
                 once and select `better-sqlite3`.\n",
            );
        }

        out.push_str("\n## Scripts\n\n");
        let _ = writeln!(out, "- `{}`: start with reload on change", pm.run_display("dev"));
        if self.language.is_typed() {
            let _ = writeln!(out, "- `{}`: compile to `dist/`", pm.run_display("build"));
        }
        let _ = writeln!(out, "- `{}`: start without reload", pm.run_display("start"));
        if !self.database.is_none() {
            let _ = writeln!(out, "- `{}`: generate the Prisma client", pm.run_display("db:generate"));
            let _ = writeln!(out, "- `{}`: push the schema to the database", pm.run_display("db:push"));
            let _ = writeln!(out, "- `{}`: create a migration", pm.run_display("db:migrate"));
            let _ = writeln!(out, "- `{}`: open Prisma Studio", pm.run_display("db:studio"));
        }

        if self.template == Template::Api {
            out.push_str(
                "\n## Resources\n\nGenerate a CRUD resource (model, service, controller, routes, \
                 validation and a `.http` request file) with:\n\n```bash\nsprout make user\n```\n",
            );
        }

        let _ = write!(
            out,
            "\n## Layout\n\n- `src/index.{ext}`: entry point\n- `src/middlewares/error.middleware.{ext}`: error handler\n"
        );
        if self.database.prisma_provider().is_some() {
            let _ = write!(
                out,
                "- `src/lib/prisma.{ext}`: Prisma client\n- `prisma/schema.prisma`: database schema\n"
            );
        }
        out.push_str("- `.env`: environment variables\n");
    }
}

impl GeneratedFile for Readme {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("README.md")
    }

    fn render(&self) -> String {
        let mut out = format!("# {}\n\n", self.name);
        match self.template {
            Template::Library => self.render_library(&mut out),
            Template::Cli => self.render_cli(&mut out),
            Template::Api | Template::Web => self.render_server(&mut out),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readme(template: Template, database: Database, pm: PackageManager) -> String {
        Readme {
            name: "demo".into(),
            template,
            language: Language::TypeScript,
            database,
            package_manager: pm,
        }
        .render()
    }

    #[test]
    fn test_npm_run_prefix() {
        let content = readme(Template::Api, Database::Postgresql, PackageManager::Npm);
        assert!(content.starts_with("# demo\n"));
        assert!(content.contains("npm run db:push"));
        assert!(!content.contains("approve-builds"));
    }

    #[test]
    fn test_pnpm_sqlite_note() {
        let content = readme(Template::Api, Database::Sqlite, PackageManager::Pnpm);
        assert!(content.contains("pnpm approve-builds"));
        assert!(content.contains("pnpm db:generate"));
    }

    #[test]
    fn test_library_usage() {
        let content = readme(Template::Library, Database::None, PackageManager::Yarn);
        assert!(content.contains("import { hello } from \"demo\";"));
        assert!(content.contains("yarn build"));
    }
}
