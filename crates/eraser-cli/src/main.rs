//! Eraser - overwrite files in place with wipe patterns
//!
//! # Usage
//!
//! ```bash
//! # Default sequence: ones, then zeros, then random
//! eraser secret.dat
//!
//! # Single zero pass over several files
//! eraser --patterns Z a.log b.log
//!
//! # Custom block size, codes also read from the environment
//! ERASER_TYPE=ZR eraser --block-size 65536 dump.bin
//! ```

use anyhow::Result;
use clap::Parser;
use console::style;
use eraser_core::{EraseConfig, Eraser, Pattern, DEFAULT_BLOCK_SIZE, DEFAULT_PATTERNS};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod progress;

use progress::ProgressRenderer;

/// Eraser - overwrite files in place with wipe patterns
#[derive(Parser)]
#[command(name = "eraser")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Files to overwrite in place
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Block size in bytes for each write call
    #[arg(short, long, env = "ERASER_BLOCKSIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Ordered pattern codes applied per file (Z=zero, O=one, R=random)
    #[arg(short, long, env = "ERASER_TYPE", default_value = DEFAULT_PATTERNS)]
    patterns: String,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let mut had_errors = false;
    for path in &cli.files {
        // A missing input path is reported and skipped; remaining
        // paths are still processed.
        if !path.exists() {
            eprintln!(
                "{} File not found: {}",
                style("ERROR:").red().bold(),
                path.display()
            );
            had_errors = true;
            continue;
        }

        if let Err(e) = erase_file(&cli, path) {
            eprintln!(
                "{} {}: {}",
                style("ERROR:").red().bold(),
                path.display(),
                e
            );
            had_errors = true;
        }
    }

    if had_errors {
        std::process::exit(1);
    }
    Ok(())
}

/// Run the configured pattern sequence against one file
fn erase_file(cli: &Cli, path: &Path) -> Result<()> {
    let config = EraseConfig::new()
        .block_size(cli.block_size)
        .patterns(cli.patterns.clone());

    let mut eraser = Eraser::with_config(config);
    if !cli.quiet {
        println!(
            "{} {}",
            style("File:").bold(),
            style(path.display()).cyan()
        );
        let mut renderer = ProgressRenderer::new(std::io::stdout());
        eraser = eraser.on_progress(move |event| renderer.handle(event));
    }

    for code in cli.patterns.chars() {
        // Codes resolve here, at fill time; completed passes stay
        // applied when a later code is unrecognized.
        let pattern = Pattern::from_code(code)?;
        let outcome = eraser.erase(path, pattern)?;

        if !cli.quiet {
            println!(
                "{} bytes {}, {:.3} s (sync {:.3} s), {}",
                outcome.bytes_written,
                outcome.size_display().unwrap_or_default(),
                outcome.elapsed.as_secs_f64(),
                outcome.sync_elapsed.as_secs_f64(),
                outcome
                    .throughput_display()
                    .unwrap_or_else(|| "? B/s".to_string()),
            );
        }
    }

    Ok(())
}
