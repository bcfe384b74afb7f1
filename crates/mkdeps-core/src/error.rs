//! Error types for mkdeps

use thiserror::Error;

/// Mkdeps error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no file found matching {0}")]
    UnresolvedInclude(String),

    #[error("ambiguous include {include}: matches {}", .matches.join(", "))]
    AmbiguousInclude {
        include: String,
        matches: Vec<String>,
    },
}

/// Result type alias for mkdeps
pub type Result<T> = std::result::Result<T, Error>;
