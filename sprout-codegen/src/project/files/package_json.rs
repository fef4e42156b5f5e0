//! package.json generator.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Value, json};
use sprout_core::{Database, GeneratedFile, Language, Template};

const PRISMA_VERSION: &str = "^7.4.1";

/// Scripts every Prisma-backed project gets.
pub const DATABASE_SCRIPTS: [(&str, &str); 4] = [
    ("db:generate", "prisma generate"),
    ("db:push", "prisma db push"),
    ("db:migrate", "prisma migrate dev"),
    ("db:studio", "prisma studio"),
];

/// A dependency with name and version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }
}

/// Runtime and dev dependencies needed to talk to `database`.
///
/// Returns empty lists for `Database::None` and the reserved variants.
pub fn database_dependencies(database: Database) -> (Vec<Dependency>, Vec<Dependency>) {
    let mut deps = Vec::new();
    let mut dev = Vec::new();
    match database {
        Database::Sqlite => {
            deps.push(Dependency::new("better-sqlite3", "^12.6.2"));
            deps.push(Dependency::new("@prisma/adapter-better-sqlite3", PRISMA_VERSION));
            dev.push(Dependency::new("@types/better-sqlite3", "^7.6.13"));
        }
        Database::Postgresql => {
            deps.push(Dependency::new("@prisma/adapter-pg", PRISMA_VERSION));
        }
        Database::None | Database::Mysql | Database::Mongodb => return (deps, dev),
    }
    deps.push(Dependency::new("@prisma/client", PRISMA_VERSION));
    dev.push(Dependency::new("prisma", PRISMA_VERSION));
    (deps, dev)
}

/// The package.json manifest of a new project.
pub struct PackageJson {
    pub name: String,
    pub template: Template,
    pub language: Language,
    pub database: Database,
}

impl PackageJson {
    pub fn new(name: impl Into<String>, template: Template, language: Language) -> Self {
        Self {
            name: name.into(),
            template,
            language,
            database: Database::None,
        }
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = database;
        self
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        let mut deps = Vec::new();
        match self.template {
            Template::Library => {}
            Template::Cli => deps.push(Dependency::new("commander", "^14.0.0")),
            Template::Api | Template::Web => {
                deps.extend([
                    Dependency::new("express", "^5.2.1"),
                    Dependency::new("express-async-handler", "^1.2.0"),
                    Dependency::new("zod", "^4.3.6"),
                    Dependency::new("dotenv", "^17.3.1"),
                ]);
                deps.extend(database_dependencies(self.database).0);
            }
        }
        deps
    }

    pub fn dev_dependencies(&self) -> Vec<Dependency> {
        let mut dev = vec![Dependency::new("@types/node", "^25.3.0")];
        if self.template.uses_express() {
            dev.push(Dependency::new("@types/express", "^5.0.6"));
            dev.extend(database_dependencies(self.database).1);
        }
        if self.language.is_typed() {
            dev.push(Dependency::new("typescript", "^5.9.3"));
            dev.push(Dependency::new("tsx", "^4.21.0"));
        }
        dev
    }

    pub fn scripts(&self) -> IndexMap<&'static str, &'static str> {
        let typed = self.language.is_typed();
        let mut scripts = IndexMap::new();
        match (self.template, typed) {
            (Template::Library, true) => {
                scripts.insert("dev", "tsc --watch");
                scripts.insert("build", "tsc");
                scripts.insert("prepublishOnly", "npm run build");
            }
            (Template::Library, false) => {
                scripts.insert("dev", "node --watch src/index.js");
                scripts.insert("prepublishOnly", "echo 'Ready to publish'");
            }
            (Template::Cli, true) => {
                scripts.insert("dev", "tsx watch src/cli.ts");
                scripts.insert("build", "tsc");
                scripts.insert("start", "node dist/cli.js");
            }
            (Template::Cli, false) => {
                scripts.insert("dev", "node --watch src/cli.js");
                scripts.insert("start", "node src/cli.js");
            }
            (Template::Api | Template::Web, true) => {
                scripts.insert("dev", "tsx watch --env-file=.env src/index.ts");
                scripts.insert("build", "tsc");
                scripts.insert("start", "node --env-file=.env dist/index.js");
            }
            (Template::Api | Template::Web, false) => {
                scripts.insert("dev", "node --watch --env-file=.env src/index.js");
                scripts.insert("start", "node --env-file=.env src/index.js");
            }
        }
        if self.template.uses_express() && self.database.prisma_provider().is_some() {
            scripts.extend(DATABASE_SCRIPTS);
        }
        scripts
    }

    fn to_value(&self) -> Value {
        let typed = self.language.is_typed();
        let main = if typed { "dist/index.js" } else { "src/index.js" };
        let dependencies = to_map(self.dependencies());
        let dev_dependencies = to_map(self.dev_dependencies());
        let scripts = self.scripts();

        if self.template == Template::Library {
            let mut export = serde_json::Map::new();
            if typed {
                export.insert("types".into(), json!("./dist/index.d.ts"));
            }
            export.insert("default".into(), json!(format!("./{main}")));

            let mut pkg = serde_json::Map::new();
            pkg.insert("name".into(), json!(self.name));
            pkg.insert("version".into(), json!("0.1.0"));
            pkg.insert("type".into(), json!("module"));
            pkg.insert("main".into(), json!(main));
            if typed {
                pkg.insert("types".into(), json!("dist/index.d.ts"));
            }
            pkg.insert("exports".into(), json!({ ".": export }));
            pkg.insert("files".into(), json!(["dist", "README.md"]));
            pkg.insert("scripts".into(), json!(scripts));
            pkg.insert("dependencies".into(), json!(dependencies));
            pkg.insert("devDependencies".into(), json!(dev_dependencies));
            pkg.insert("license".into(), json!("MIT"));
            return Value::Object(pkg);
        }

        let mut pkg = json!({
            "name": self.name,
            "version": "1.0.0",
            "type": "module",
            "main": main,
            "scripts": scripts,
            "dependencies": dependencies,
            "devDependencies": dev_dependencies,
            "license": "MIT",
        });
        if self.template == Template::Cli {
            let bin = if typed { "dist/cli.js" } else { "src/cli.js" };
            let mut bins = serde_json::Map::new();
            bins.insert(self.name.clone(), json!(bin));
            pkg["bin"] = Value::Object(bins);
        }
        pkg
    }
}

fn to_map(deps: Vec<Dependency>) -> IndexMap<&'static str, &'static str> {
    deps.into_iter().map(|d| (d.name, d.version)).collect()
}

impl GeneratedFile for PackageJson {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(sprout_manifest::PACKAGE_JSON)
    }

    fn render(&self) -> String {
        format!("{:#}\n", self.to_value())
    }
}
