mod add;
mod completions;
mod info;
mod init;
mod make;

use add::AddCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use info::InfoCommand;
use init::InitCommand;
use make::MakeCommand;
use miette::Diagnostic;

/// Extension trait for exiting on library errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sprout_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

impl<T> UnwrapOrExit<T> for sprout_codegen::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

fn exit_with(diagnostic: impl Diagnostic + Send + Sync + 'static) -> ! {
    eprintln!("{:?}", miette::Report::new(diagnostic));
    std::process::exit(1);
}

/// Library diagnostics that bubbled up through an operation are rendered by
/// miette; anything else goes back to color-eyre.
fn report_diagnostics(err: eyre::Report) -> eyre::Report {
    let err = match err.downcast::<Box<sprout_codegen::Error>>() {
        Ok(e) => exit_with(*e),
        Err(err) => err,
    };
    match err.downcast::<Box<sprout_manifest::Error>>() {
        Ok(e) => exit_with(*e),
        Err(err) => err,
    }
}

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version)]
#[command(about = "Scaffold Express projects and generate CRUD resources")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let result = match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Make(cmd) => cmd.run(),
            Commands::Add(cmd) => cmd.run(),
            Commands::Info(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        };
        result.map_err(report_diagnostics)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new project
    #[command(visible_aliases = ["in", "new", "create"])]
    Init(InitCommand),

    /// Generate model, controller, routes and requests for an entity
    #[command(visible_aliases = ["m", "generate", "gen", "g"])]
    Make(MakeCommand),

    /// Add a feature to an existing project
    Add(AddCommand),

    /// Show the detected configuration of the current project
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_aliases() {
        for alias in ["in", "new", "create"] {
            let cli = Cli::try_parse_from(["sprout", alias, "shop", "-y"]).unwrap();
            assert!(matches!(cli.command, Commands::Init(_)));
        }
        for alias in ["m", "generate", "gen", "g"] {
            let cli = Cli::try_parse_from(["sprout", alias, "user"]).unwrap();
            assert!(matches!(cli.command, Commands::Make(_)));
        }
    }

    #[test]
    fn test_invalid_option_values_are_rejected() {
        assert!(Cli::try_parse_from(["sprout", "init", "-d", "oracle"]).is_err());
        assert!(Cli::try_parse_from(["sprout", "init", "-t", "desktop"]).is_err());
        assert!(Cli::try_parse_from(["sprout", "make", "user", "view"]).is_err());
    }

    #[test]
    fn test_codegen_diagnostics_are_recognized() {
        let err: eyre::Report = sprout_codegen::Error::invalid_name("1x", "entity name", "").into();
        assert!(err.downcast_ref::<Box<sprout_codegen::Error>>().is_some());
    }
}
