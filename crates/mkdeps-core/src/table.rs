//! Dependency table shared by the scan/resolve/emit pipeline.

use std::collections::BTreeMap;

/// Mapping from every scanned file path to the include strings it contains.
///
/// Keys are paths exactly as discovery produced them and serve as the
/// canonical identifier for a file. Values hold the raw include specs in
/// file order after scanning, and canonical paths after resolution.
/// Iteration is always key-sorted, so downstream output is deterministic
/// regardless of file-system enumeration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DepTable {
    entries: BTreeMap<String, Vec<String>>,
}

impl DepTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scanned file with its include list.
    pub fn insert(&mut self, path: impl Into<String>, includes: Vec<String>) {
        self.entries.insert(path.into(), includes);
    }

    /// Whether a path was scanned
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Include list recorded for a path, if the path was scanned
    pub fn includes(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).map(|v| v.as_slice())
    }

    /// All known paths, sorted
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Sorted iteration over `(path, includes)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Absorb another table, e.g. the scan of a second directory.
    ///
    /// Keys are full paths, so distinct directories never collide; on an
    /// identical key the absorbed entry wins.
    pub fn merge(mut self, other: DepTable) -> DepTable {
        self.entries.extend(other.entries);
        self
    }

    /// Number of scanned files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no files
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
