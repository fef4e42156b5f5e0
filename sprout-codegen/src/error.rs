use std::path::PathBuf;

use miette::Diagnostic;
use sprout_core::Database;
use thiserror::Error;

/// Result type for sprout-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' not found")]
    #[diagnostic(
        code(sprout::schema_not_found),
        help("add a database first with 'sprout add db'")
    )]
    SchemaNotFound { path: PathBuf },

    #[error("no place to insert the {what} in '{path}'")]
    #[diagnostic(
        code(sprout::anchor_not_found),
        help("restore the '{marker}' comment, or add this line by hand: {statement}")
    )]
    AnchorNotFound {
        path: PathBuf,
        what: &'static str,
        marker: &'static str,
        statement: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(code(sprout::invalid_name), help("{reason}"))]
    InvalidName {
        name: String,
        context: &'static str,
        reason: String,
    },

    #[error("database '{database}' is reserved and not supported yet")]
    #[diagnostic(
        code(sprout::unsupported_database),
        help("choose one of: sqlite, postgresql")
    )]
    UnsupportedDatabase { database: Database },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(sprout_manifest::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Write {
            path: path.into(),
            source,
        })
    }

    pub fn invalid_name(
        name: impl Into<String>,
        context: &'static str,
        reason: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::InvalidName {
            name: name.into(),
            context,
            reason: reason.into(),
        })
    }

    pub fn manifest(source: Box<sprout_manifest::Error>) -> Box<Self> {
        Box::new(Error::Manifest(*source))
    }
}
