//! Mkdeps Resolver
//!
//! Rewrites the raw include specs collected by the scanner to the
//! canonical paths under which the files were discovered, using
//! right-aligned path-component matching.

use mkdeps_core::{DepTable, Error, Result};
use tracing::debug;

/// Resolve one raw include spec against the known scanned paths.
///
/// A spec that is already a known path is returned unchanged. Otherwise
/// both the spec and each candidate path are split on `/`; a candidate
/// matches when its trailing components equal the spec's components.
/// This is a suffix heuristic, not a general include search: there is no
/// preference for same-directory candidates, so a spec whose suffix
/// occurs under two scanned directories is rejected as ambiguous.
pub fn resolve_include(raw: &str, table: &DepTable) -> Result<String> {
    if table.contains(raw) {
        return Ok(raw.to_string());
    }

    let spec: Vec<&str> = raw.split('/').collect();
    let mut matches: Vec<String> = Vec::new();

    for path in table.paths() {
        let comps: Vec<&str> = path.split('/').collect();
        if comps.len() < spec.len() {
            continue;
        }
        if comps[comps.len() - spec.len()..] == spec[..] {
            matches.push(path.to_string());
        }
    }

    if matches.len() > 1 {
        return Err(Error::AmbiguousInclude {
            include: raw.to_string(),
            matches,
        });
    }

    match matches.pop() {
        Some(found) => {
            debug!("resolved {} -> {}", raw, found);
            Ok(found)
        }
        None => Err(Error::UnresolvedInclude(raw.to_string())),
    }
}

/// Resolve every include list in the table.
///
/// Consumes the scanned table and returns one whose every include entry
/// is itself a table key. Entries are processed in sorted order and the
/// first unresolved or ambiguous include aborts the whole run; there is
/// no partial result. Running the function over an already-resolved
/// table is the identity.
pub fn resolve_table(table: DepTable) -> Result<DepTable> {
    let mut resolved = DepTable::new();

    for (path, includes) in table.iter() {
        let canonical = includes
            .iter()
            .map(|raw| resolve_include(raw, &table))
            .collect::<Result<Vec<String>>>()?;
        resolved.insert(path, canonical);
    }

    Ok(resolved)
}
