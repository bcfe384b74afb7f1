//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Mkdeps run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directories to scan, each one level deep
    pub roots: Vec<PathBuf>,

    /// Output file for the generated Makefile fragment
    pub output: PathBuf,

    /// Rule generation options
    pub emit: EmitOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: vec![],
            output: PathBuf::from("Makefile.deps"),
            emit: EmitOptions::default(),
        }
    }
}

/// Rule generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmitOptions {
    /// Prefix for object-file paths; empty, or normalised to end with `/`
    pub objdir: String,

    /// Extra dependency token appended verbatim to every rule
    pub globaldeps: String,
}

impl EmitOptions {
    /// Build options, normalising a non-empty `objdir` to end with `/`.
    pub fn new(objdir: impl Into<String>, globaldeps: impl Into<String>) -> Self {
        let mut objdir = objdir.into();
        if !objdir.is_empty() && !objdir.ends_with('/') {
            objdir.push('/');
        }
        Self {
            objdir,
            globaldeps: globaldeps.into(),
        }
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::new("", "")
    }
}
