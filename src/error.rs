use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for svgsprite operations
#[derive(Error, Diagnostic, Debug)]
pub enum SpriteError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(svgsprite::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error in {path}: {message}")]
    #[diagnostic(code(svgsprite::parse))]
    Parse {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Duplicate sprite id \"{id}\" from {first} and {second}")]
    #[diagnostic(
        code(svgsprite::duplicate_id),
        help("Rename one of the files so each icon maps to a unique id")
    )]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(svgsprite::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Generated files are out of date: {}", display_paths(.paths))]
    #[diagnostic(
        code(svgsprite::check),
        help("Run `svgsprite build` to regenerate them")
    )]
    Stale { paths: Vec<PathBuf> },
}

impl SpriteError {
    /// Build an `Io` error for `path` from any displayable cause.
    pub fn io(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        SpriteError::Io {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, SpriteError>;
