//! A small `mkdir` front end for the `mkpath` library.
//!
//! Paths are normalized lexically before anything is created, so `mkpath -p a/../b/c` creates `b`
//! and `b/c` but never `a`. Paths are processed in order, stopping at the first failure.

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug};
use mkpath::fs::{DirBuilder, Mode};

#[derive(Debug, Parser)]
#[command(name = "mkpath", version, about = "Create directories, normalizing their paths first")]
struct Cli {
    /// Create missing parent directories as needed
    #[arg(short, long)]
    parents: bool,

    /// Permission bits for new directories, in octal (before the umask is applied)
    #[arg(short, long, default_value = "777")]
    mode: Mode,

    /// Don't follow symbolic links when checking whether a component exists
    #[arg(short = 'P', long)]
    no_dereference: bool,

    /// Log every component that is checked or created (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// The directories to create
    #[arg(required = true)]
    paths: Vec<OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .init();

    let mut builder = DirBuilder::new();
    builder
        .mode(cli.mode)
        .parents(cli.parents)
        .follow_links(!cli.no_dereference);
    debug!("{builder:?}");

    for path in &cli.paths {
        if let Err(e) = builder.create(path) {
            eprintln!("mkpath: {}: {}: {e}", path.to_string_lossy(), e.operation());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
