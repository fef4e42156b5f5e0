//! Effective settings from flags, environment and prompts.
//!
//! Flags and environment variables are merged by clap before they reach the
//! [`Resolver`]; it only decides between the given value, the `--yes`
//! default and an interactive prompt.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail, eyre};
use sprout_core::{
    Database, Language, PackageManager, Template, is_identifier, is_project_name, is_route_path,
};

pub const DEFAULT_PROJECT_NAME: &str = "my-sprout-app";

type Validator<'v> = &'v dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive questions the resolver can ask.
pub trait Prompter {
    /// Ask for free text. `validate` rejects an answer with a message.
    fn input(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String>;

    /// Ask to pick one of `items`; returns its index.
    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&mut self, prompt: &str, default: &str, validate: Validator<'_>) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|value: &String| validate(value.as_str()))
            .interact_text()
            .wrap_err("Failed to read input")
    }

    fn select(&mut self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .wrap_err("Failed to get selection")
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .wrap_err("Failed to get confirmation")
    }
}

/// Resolves each setting from its explicit value, the `--yes` default, or a prompt.
pub struct Resolver<P> {
    prompter: P,
    assume_defaults: bool,
}

impl<P: Prompter> Resolver<P> {
    pub fn new(prompter: P, assume_defaults: bool) -> Self {
        Self {
            prompter,
            assume_defaults,
        }
    }

    pub fn project_name(&mut self, value: Option<&str>) -> Result<String> {
        if let Some(name) = value {
            validate_project_name(name)
                .map_err(|e| eyre!("invalid project name '{}': {}", name, e))?;
            return Ok(name.to_string());
        }
        if self.assume_defaults {
            return Ok(DEFAULT_PROJECT_NAME.to_string());
        }
        self.prompter.input(
            "What is your project name?",
            DEFAULT_PROJECT_NAME,
            &validate_project_name,
        )
    }

    pub fn template(&mut self, value: Option<Template>) -> Result<Template> {
        self.choose(
            value,
            "Which template would you like to use?",
            &Template::ALL,
            Template::Api,
            template_label,
        )
    }

    /// `Some(true)` for `--typescript`, `Some(false)` for `--no-typescript`.
    pub fn language(&mut self, typed: Option<bool>) -> Result<Language> {
        let typed = match typed {
            Some(typed) => typed,
            None if self.assume_defaults => true,
            None => self
                .prompter
                .confirm("Would you like to use TypeScript?", true)?,
        };
        Ok(Language::from_typed(typed))
    }

    /// Templates without a server never get a database.
    pub fn database(&mut self, value: Option<Database>, template: Template) -> Result<Database> {
        if !template.supports_database() {
            return Ok(Database::None);
        }
        if let Some(database) = value {
            ensure_supported(database)?;
        }
        self.choose(
            value,
            "Which database would you like to use?",
            &[Database::Sqlite, Database::Postgresql, Database::None],
            template.default_database(),
            database_label,
        )
    }

    /// Database for `add db`: `none` is not an answer.
    pub fn retrofit_database(&mut self, value: Option<Database>) -> Result<Database> {
        if let Some(database) = value {
            if database.is_none() {
                bail!("invalid database option 'none', valid options: sqlite, postgresql");
            }
            ensure_supported(database)?;
        }
        self.choose(
            value,
            "Which database would you like to add?",
            &Database::SUPPORTED,
            Database::Sqlite,
            database_label,
        )
    }

    pub fn package_manager(&mut self, value: Option<PackageManager>) -> Result<PackageManager> {
        self.choose(
            value,
            "Which package manager would you like to use?",
            &PackageManager::ALL,
            PackageManager::default(),
            |pm| pm.as_str(),
        )
    }

    /// Table name for a new resource; checked again by the entity builder.
    pub fn table(&mut self, value: Option<&str>, default: &str) -> Result<String> {
        if let Some(table) = value {
            return Ok(table.to_string());
        }
        if self.assume_defaults {
            return Ok(default.to_string());
        }
        self.prompter
            .input("What is the table name?", default, &validate_table)
    }

    /// Route path for a new resource; checked again by the entity builder.
    pub fn route(&mut self, value: Option<&str>, default: &str) -> Result<String> {
        if let Some(route) = value {
            return Ok(route.to_string());
        }
        if self.assume_defaults {
            return Ok(default.to_string());
        }
        self.prompter
            .input("What is the route path?", default, &validate_route)
    }

    fn choose<T: Copy + PartialEq>(
        &mut self,
        value: Option<T>,
        prompt: &str,
        options: &[T],
        default: T,
        label: fn(T) -> &'static str,
    ) -> Result<T> {
        if let Some(value) = value {
            return Ok(value);
        }
        if self.assume_defaults {
            return Ok(default);
        }

        let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();
        let default_index = options.iter().position(|o| *o == default).unwrap_or(0);
        let index = self.prompter.select(prompt, &labels, default_index)?;
        options
            .get(index)
            .copied()
            .ok_or_else(|| eyre!("selection {} out of range", index))
    }
}

fn ensure_supported(database: Database) -> Result<()> {
    if !database.is_supported() {
        return Err(Box::new(sprout_codegen::Error::UnsupportedDatabase { database }).into());
    }
    Ok(())
}

fn template_label(template: Template) -> &'static str {
    match template {
        Template::Api => "REST API (Express)",
        Template::Library => "npm library",
        Template::Cli => "Command-line tool",
        Template::Web => "Web server with static files",
    }
}

fn database_label(database: Database) -> &'static str {
    match database {
        Database::Sqlite => "SQLite",
        Database::Postgresql => "PostgreSQL",
        Database::None => "None",
        Database::Mysql => "MySQL",
        Database::Mongodb => "MongoDB",
    }
}

fn validate_project_name(name: &str) -> std::result::Result<(), String> {
    if is_project_name(name) {
        Ok(())
    } else {
        Err("only letters, numbers, hyphens and underscores are allowed".to_string())
    }
}

fn validate_table(table: &str) -> std::result::Result<(), String> {
    if is_identifier(table) {
        Ok(())
    } else {
        Err("table name must be a valid identifier".to_string())
    }
}

fn validate_route(route: &str) -> std::result::Result<(), String> {
    if !route.starts_with('/') {
        Err("route path must start with '/'".to_string())
    } else if !is_route_path(route) {
        Err("route path cannot contain quotes, backslashes, backticks or whitespace".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    enum Answer {
        Text(&'static str),
        Choice(usize),
        Yes(bool),
    }

    /// Answers prompts from a script and records the questions.
    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompter for &mut ScriptedPrompter {
        fn input(&mut self, prompt: &str, _default: &str, validate: Validator<'_>) -> Result<String> {
            self.asked.push(prompt.to_string());
            match self.answers.pop_front() {
                Some(Answer::Text(text)) => {
                    validate(text).map_err(|e| eyre!(e))?;
                    Ok(text.to_string())
                }
                _ => bail!("unexpected input prompt: {}", prompt),
            }
        }

        fn select(&mut self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
            self.asked.push(prompt.to_string());
            match self.answers.pop_front() {
                Some(Answer::Choice(index)) => Ok(index),
                _ => bail!("unexpected select prompt: {}", prompt),
            }
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
            self.asked.push(prompt.to_string());
            match self.answers.pop_front() {
                Some(Answer::Yes(yes)) => Ok(yes),
                _ => bail!("unexpected confirm prompt: {}", prompt),
            }
        }
    }

    #[test]
    fn test_defaults_never_prompt() {
        let mut prompter = ScriptedPrompter::default();
        let mut resolver = Resolver::new(&mut prompter, true);

        assert_eq!(resolver.project_name(None).unwrap(), "my-sprout-app");
        assert_eq!(resolver.template(None).unwrap(), Template::Api);
        assert_eq!(resolver.language(None).unwrap(), Language::TypeScript);
        assert_eq!(
            resolver.database(None, Template::Web).unwrap(),
            Database::Sqlite
        );
        assert_eq!(resolver.package_manager(None).unwrap(), PackageManager::Pnpm);
        assert_eq!(resolver.table(None, "user").unwrap(), "user");
        assert_eq!(resolver.route(None, "/user").unwrap(), "/user");

        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_explicit_values_win() {
        let mut prompter = ScriptedPrompter::default();
        let mut resolver = Resolver::new(&mut prompter, false);

        assert_eq!(resolver.project_name(Some("shop")).unwrap(), "shop");
        assert_eq!(
            resolver.template(Some(Template::Cli)).unwrap(),
            Template::Cli
        );
        assert_eq!(
            resolver.language(Some(false)).unwrap(),
            Language::JavaScript
        );
        assert_eq!(
            resolver
                .package_manager(Some(PackageManager::Yarn))
                .unwrap(),
            PackageManager::Yarn
        );

        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_prompts_in_order() {
        let mut prompter = ScriptedPrompter::new([
            Answer::Text("shop"),
            Answer::Choice(3),
            Answer::Yes(false),
            Answer::Choice(1),
            Answer::Choice(2),
        ]);
        let mut resolver = Resolver::new(&mut prompter, false);

        assert_eq!(resolver.project_name(None).unwrap(), "shop");
        let template = resolver.template(None).unwrap();
        assert_eq!(template, Template::Web);
        assert_eq!(resolver.language(None).unwrap(), Language::JavaScript);
        assert_eq!(
            resolver.database(None, template).unwrap(),
            Database::Postgresql
        );
        assert_eq!(resolver.package_manager(None).unwrap(), PackageManager::Npm);

        assert_eq!(prompter.asked.len(), 5);
    }

    #[test]
    fn test_invalid_project_name() {
        let mut prompter = ScriptedPrompter::default();
        let mut resolver = Resolver::new(&mut prompter, true);

        let err = resolver.project_name(Some("my app")).unwrap_err();
        assert!(err.to_string().contains("invalid project name"));
    }

    #[test]
    fn test_library_and_cli_have_no_database() {
        let mut prompter = ScriptedPrompter::default();
        let mut resolver = Resolver::new(&mut prompter, false);

        for template in [Template::Library, Template::Cli] {
            assert_eq!(
                resolver
                    .database(Some(Database::Postgresql), template)
                    .unwrap(),
                Database::None
            );
        }
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_reserved_database_is_rejected() {
        let mut prompter = ScriptedPrompter::default();
        let mut resolver = Resolver::new(&mut prompter, true);

        assert!(
            resolver
                .database(Some(Database::Mongodb), Template::Api)
                .is_err()
        );
        assert!(resolver.retrofit_database(Some(Database::Mysql)).is_err());
        assert!(resolver.retrofit_database(Some(Database::None)).is_err());
    }

    #[test]
    fn test_retrofit_database_prompt() {
        let mut prompter = ScriptedPrompter::new([Answer::Choice(1)]);
        let mut resolver = Resolver::new(&mut prompter, false);

        assert_eq!(
            resolver.retrofit_database(None).unwrap(),
            Database::Postgresql
        );
    }

    #[test]
    fn test_route_prompt_validates() {
        let mut prompter = ScriptedPrompter::new([Answer::Text("users")]);
        let mut resolver = Resolver::new(&mut prompter, false);

        let err = resolver.route(None, "/user").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_route_prompt_rejects_quotes_and_whitespace() {
        for route in ["/it's", "/a\"b", "/a\\b", "/a`b", "/a b", "/a\tb"] {
            let mut prompter = ScriptedPrompter::new([Answer::Text(route)]);
            let mut resolver = Resolver::new(&mut prompter, false);

            let err = resolver.route(None, "/user").unwrap_err();
            assert!(err.to_string().contains("cannot contain"), "{route:?}");
        }
    }
}
