//! Mkdeps Core
//!
//! Core types and interfaces for the mkdeps dependency generator.

pub mod config;
pub mod error;
pub mod table;

pub use config::{Config, EmitOptions};
pub use error::{Error, Result};
pub use table::DepTable;
