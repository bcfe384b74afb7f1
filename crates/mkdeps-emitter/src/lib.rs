//! Mkdeps Emitter
//!
//! Renders Makefile object-file rules from a resolved dependency table
//! and writes the output file only when its content actually changed,
//! so an unchanged run never triggers downstream rebuilds.

use mkdeps_core::{DepTable, EmitOptions, Result};
use regex::Regex;
use std::path::Path;
use tracing::{debug, info};

/// Filter for files that produce object-file rules, compiled once.
///
/// Only compiled-source extensions qualify; headers never become rule
/// targets no matter what they include.
pub struct SourceFilter {
    compiled_source: Regex,
}

impl SourceFilter {
    pub fn new() -> Self {
        Self {
            compiled_source: Regex::new(r"(?i)^..*\.(c|cpp|cxx)$").unwrap(),
        }
    }

    /// Whether a scanned path is a compiled source file
    pub fn is_compiled_source(&self, path: &str) -> bool {
        self.compiled_source.is_match(path)
    }
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the Makefile rule lines for every compiled source file with
/// at least one include, in path-sorted order.
///
/// Each rule spans two lines: the rule itself, then a blank separator.
/// The dependency list is the file's direct includes plus each included
/// header's own direct includes. Nested expansion stops at that one
/// level; a header reached only through two other headers is not
/// listed. Dependencies are sorted, duplicates are kept.
pub fn generate_rules(table: &DepTable, filter: &SourceFilter, opts: &EmitOptions) -> Vec<String> {
    let mut lines = Vec::new();

    for (path, includes) in table.iter() {
        if includes.is_empty() || !filter.is_compiled_source(path) {
            continue;
        }

        let mut deps: Vec<String> = includes.to_vec();
        for inc in includes {
            if let Some(nested) = table.includes(inc) {
                deps.extend(nested.iter().cloned());
            }
        }
        deps.sort();

        let object = object_name(path, &opts.objdir);
        debug!("rule for {} -> {}", path, object);

        lines.push(format!(
            "{} : {} {} {}",
            object,
            path,
            deps.join(" "),
            opts.globaldeps
        ));
        lines.push(String::new());
    }

    lines
}

/// Object-file name for a source path: the final path segment truncated
/// at its first `.`, plus `.o`, under the object-directory prefix.
fn object_name(path: &str, objdir: &str) -> String {
    let file = path.rsplit('/').next().unwrap_or(path);
    let stem = file.split('.').next().unwrap_or(file);
    format!("{}{}.o", objdir, stem)
}

/// Result of the idempotent output write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content differed and the file was rewritten
    Updated,
    /// Existing content already matches; the file was left untouched
    UpToDate,
}

/// Write the rule lines to `path` only if they differ from what is
/// already on disk.
///
/// The existing file (missing or unreadable reads as empty) is compared
/// line-for-line with trailing whitespace trimmed on both sides, not
/// byte-for-byte, so the file's modification time survives an unchanged
/// run and the consuming build system sees no spurious trigger.
pub fn write_if_changed(path: &Path, lines: &[String]) -> Result<WriteOutcome> {
    let existing = std::fs::read_to_string(path).unwrap_or_default();
    let current: Vec<&str> = existing.lines().map(|l| l.trim_end()).collect();

    let unchanged = current.len() == lines.len()
        && current
            .iter()
            .zip(lines.iter())
            .all(|(cur, new)| *cur == new.trim_end());

    if unchanged {
        info!("{} unchanged, not rewritten", path.display());
        return Ok(WriteOutcome::UpToDate);
    }

    let mut text = String::new();
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    std::fs::write(path, text)?;
    info!("{} rewritten ({} lines)", path.display(), lines.len());
    Ok(WriteOutcome::Updated)
}
