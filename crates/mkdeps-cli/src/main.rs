//! Mkdeps CLI
//!
//! Generates a Makefile fragment with header dependencies for C/C++
//! source trees, suitable for `include Makefile.deps`.

use anyhow::Result;
use clap::Parser;
use mkdeps_core::{Config, DepTable, EmitOptions};
use mkdeps_emitter::{generate_rules, write_if_changed, SourceFilter, WriteOutcome};
use mkdeps_resolver::resolve_table;
use mkdeps_scanner::{scan_dir, ScanPatterns};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mkdeps")]
#[command(author, version, about = "Makefile dependency fragment generator", long_about = None)]
struct Cli {
    /// Directories to scan, each one level deep
    #[arg(value_name = "DIR", required = true)]
    dirs: Vec<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Prefix for object-file paths
    #[arg(short, long, default_value = "")]
    objdir: String,

    /// Output file
    #[arg(short, long, default_value = "Makefile.deps")]
    file: PathBuf,

    /// Extra dependency token appended to every rule
    #[arg(short, long, default_value = "")]
    global: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config {
        roots: cli.dirs,
        output: cli.file,
        emit: EmitOptions::new(cli.objdir, cli.global),
    };

    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let patterns = ScanPatterns::new();

    let mut table = DepTable::new();
    for root in &config.roots {
        table = table.merge(scan_dir(root, &patterns)?);
    }

    let table = resolve_table(table)?;

    let lines = generate_rules(&table, &SourceFilter::new(), &config.emit);
    match write_if_changed(&config.output, &lines)? {
        WriteOutcome::Updated => {
            eprintln!("{} file is updated.", config.output.display());
        }
        WriteOutcome::UpToDate => {
            eprintln!("{} file is upto date.", config.output.display());
        }
    }

    Ok(())
}
