//! Mkdeps Scanner
//!
//! Walks a single directory level and extracts the quoted `#include`
//! directives from every recognized C/C++ source or header file,
//! producing the dependency table consumed by the resolver.

use mkdeps_core::{DepTable, Result};
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// Recognition patterns, compiled once and passed to every scan.
pub struct ScanPatterns {
    /// Source/header file names eligible for scanning
    source_or_header: Regex,
    /// A trimmed line that is exactly a quoted include directive
    include: Regex,
}

impl ScanPatterns {
    pub fn new() -> Self {
        Self {
            source_or_header: Regex::new(r"(?i)^..*\.(c|cpp|cxx|h|hpp|hxx)$").unwrap(),
            include: Regex::new(r#"^#include\s*"(?P<incf>.*)"$"#).unwrap(),
        }
    }

    /// Whether a file name qualifies as a scannable source or header
    pub fn is_source_or_header(&self, name: &str) -> bool {
        self.source_or_header.is_match(name)
    }

    /// The include spec on a trimmed line, if the whole line is a quoted
    /// include directive. System includes (`<...>`) and lines with text
    /// after the closing quote do not match.
    pub fn include_spec<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.include
            .captures(line)
            .and_then(|caps| caps.name("incf"))
            .map(|m| m.as_str())
    }
}

impl Default for ScanPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan one directory level for source/header files and their quoted
/// includes.
///
/// Subdirectories are never descended into. Every qualifying file gets a
/// table entry, even with zero includes, since headers must be known to
/// the resolver as canonical paths. Files are visited in name order.
pub fn scan_dir(root: &Path, patterns: &ScanPatterns) -> Result<DepTable> {
    let mut table = DepTable::new();

    let names: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.file_name().to_str().map(|s| s.to_string()))
        .filter(|name| patterns.is_source_or_header(name))
        .collect();

    debug!("scanning {}: {} candidate files", root.display(), names.len());

    for name in names {
        let path = format!("{}/{}", root.display(), name);
        let includes = read_includes(Path::new(&path), patterns)?;
        debug!("scanned {} ({} includes)", path, includes.len());
        table.insert(path, includes);
    }

    Ok(table)
}

/// Extract the raw include specs from one file, in file order.
fn read_includes(path: &Path, patterns: &ScanPatterns) -> Result<Vec<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        // A file that does not decode as UTF-8 contributes no includes.
        Err(err) if err.kind() == ErrorKind::InvalidData => {
            debug!("undecodable file {}, treated as empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    let mut includes = Vec::new();
    for line in text.lines() {
        if let Some(spec) = patterns.include_spec(line.trim()) {
            includes.push(spec.to_string());
        }
    }
    Ok(includes)
}
