//! Entry points for the library and CLI templates, and the web template's
//! static assets.

use std::path::PathBuf;

use sprout_core::{GeneratedFile, Language};

/// `src/index.<ext>` of a library.
pub struct LibraryEntry {
    pub name: String,
    pub language: Language,
}

impl GeneratedFile for LibraryEntry {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("src/index.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        let signature = if self.language.is_typed() {
            "(name: string): string"
        } else {
            "(name)"
        };
        format!(
            r#"/**
 * {name}
 * A brief description of your package.
 */

export const hello = {signature} => `Hello, ${{name}}!`;
"#,
            name = self.name,
        )
    }
}

/// `src/cli.<ext>` of a command-line tool.
pub struct CliEntry {
    pub name: String,
    pub language: Language,
}

impl GeneratedFile for CliEntry {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(format!("src/cli.{}", self.language.extension()))
    }

    fn render(&self) -> String {
        format!(
            r#"#!/usr/bin/env node
import {{ Command }} from "commander";

const program = new Command();
program
  .name(process.env.npm_package_name || "{name}")
  .description("{name} CLI")
  .version("0.0.1");

program
  .command("hello")
  .description("Say hello")
  .action(() => {{
    console.log("Hello from {name} CLI");
  }});

program.parse();
"#,
            name = self.name,
        )
    }
}

/// Files under `public/` for the web template.
pub enum WebAsset {
    Html { title: String },
    Styles,
    Script { name: String },
}

impl WebAsset {
    pub fn all(name: &str) -> [WebAsset; 3] {
        [
            WebAsset::Html {
                title: name.to_string(),
            },
            WebAsset::Styles,
            WebAsset::Script {
                name: name.to_string(),
            },
        ]
    }
}

impl GeneratedFile for WebAsset {
    fn relative_path(&self) -> PathBuf {
        let file = match self {
            WebAsset::Html { .. } => "index.html",
            WebAsset::Styles => "styles.css",
            WebAsset::Script { .. } => "app.js",
        };
        PathBuf::from("public").join(file)
    }

    fn render(&self) -> String {
        match self {
            WebAsset::Html { title } => format!(
                r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>{title}</title>
    <link rel="stylesheet" href="/styles.css" />
  </head>
  <body>
    <h1>Welcome to {title}</h1>
    <div id="root"></div>
    <script src="/app.js"></script>
  </body>
</html>
"#
            ),
            WebAsset::Styles => r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, sans-serif; padding: 2rem; }
h1 { margin-bottom: 1rem; }
"#
            .to_string(),
            WebAsset::Script { name } => format!("console.log(\"{name} running\");\n"),
        }
    }
}
