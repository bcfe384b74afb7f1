//! End-to-end pipeline tests: scan, resolve, emit against real
//! directory trees.

use mkdeps_core::{DepTable, EmitOptions, Error};
use mkdeps_emitter::{generate_rules, write_if_changed, SourceFilter, WriteOutcome};
use mkdeps_resolver::resolve_table;
use mkdeps_scanner::{scan_dir, ScanPatterns};
use std::fs;
use tempfile::TempDir;

fn run_pipeline(roots: &[&std::path::Path], opts: &EmitOptions) -> mkdeps_core::Result<Vec<String>> {
    let patterns = ScanPatterns::new();
    let mut table = DepTable::new();
    for root in roots {
        table = table.merge(scan_dir(root, &patterns)?);
    }
    let table = resolve_table(table)?;
    Ok(generate_rules(&table, &SourceFilter::new(), opts))
}

#[test]
fn generates_rules_with_nested_headers() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("a.c"), "#include \"b.h\"\n").unwrap();
    fs::write(root.join("b.h"), "#include \"c.h\"\n").unwrap();
    fs::write(root.join("c.h"), "").unwrap();

    let lines = run_pipeline(&[root], &EmitOptions::default()).unwrap();

    let prefix = root.display();
    assert_eq!(
        lines,
        vec![
            format!("a.o : {p}/a.c {p}/b.h {p}/c.h ", p = prefix),
            String::new(),
        ]
    );
}

#[test]
fn ambiguous_include_aborts_without_output() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("first");
    let second = temp.path().join("second");
    fs::create_dir(&first).unwrap();
    fs::create_dir(&second).unwrap();
    fs::write(first.join("util.h"), "").unwrap();
    fs::write(second.join("util.h"), "").unwrap();
    fs::write(first.join("main.c"), "#include \"util.h\"\n").unwrap();

    let err = run_pipeline(
        &[first.as_path(), second.as_path()],
        &EmitOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::AmbiguousInclude { .. }));

    // Nothing reaches the writer on a resolution failure.
    assert!(!temp.path().join("Makefile.deps").exists());
}

#[test]
fn second_run_leaves_output_untouched() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("src");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("a.c"), "#include \"a.h\"\n").unwrap();
    fs::write(root.join("a.h"), "").unwrap();

    let out = temp.path().join("Makefile.deps");
    let opts = EmitOptions::default();

    let lines = run_pipeline(&[root.as_path()], &opts).unwrap();
    assert_eq!(write_if_changed(&out, &lines).unwrap(), WriteOutcome::Updated);
    let mtime = fs::metadata(&out).unwrap().modified().unwrap();

    let lines = run_pipeline(&[root.as_path()], &opts).unwrap();
    assert_eq!(
        write_if_changed(&out, &lines).unwrap(),
        WriteOutcome::UpToDate
    );
    assert_eq!(fs::metadata(&out).unwrap().modified().unwrap(), mtime);
}

#[test]
fn output_is_deterministic_across_runs() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("z.c"), "#include \"shared.h\"\n").unwrap();
    fs::write(root.join("a.c"), "#include \"shared.h\"\n").unwrap();
    fs::write(root.join("shared.h"), "").unwrap();

    let opts = EmitOptions::new("obj", "Makefile");
    let first = run_pipeline(&[root], &opts).unwrap();
    let second = run_pipeline(&[root], &opts).unwrap();
    assert_eq!(first, second);

    let p = root.display();
    assert_eq!(
        first,
        vec![
            format!("obj/a.o : {p}/a.c {p}/shared.h Makefile"),
            String::new(),
            format!("obj/z.o : {p}/z.c {p}/shared.h Makefile"),
            String::new(),
        ]
    );
}

#[test]
fn headers_and_includeless_sources_emit_no_rules() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("plain.c"), "int main(void) { return 0; }\n").unwrap();
    fs::write(root.join("chain.h"), "#include \"leaf.h\"\n").unwrap();
    fs::write(root.join("leaf.h"), "").unwrap();

    let lines = run_pipeline(&[root], &EmitOptions::default()).unwrap();
    assert!(lines.is_empty());
}
