//! wg-find: list files or directories whose names match a pattern.
//!
//! # Usage
//!
//! ```bash
//! # All .txt files anywhere under ./notes
//! wg-find ./notes '*.txt'
//!
//! # Directories starting with "data", one level down, any case
//! wg-find ./project 'data' -t d -d 0 -i
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use wg_cli::output::{self, OutputFormat};
use wg_cli::{CommonArgs, logging};
use wg_core::{DEFAULT_MAX_DEPTH, FileKind, FindConfig, error::ensure_base_dir};
use wg_scanner::Finder;

// ============================================================================
// CLI Definition
// ============================================================================

/// Search for files or directories by name.
#[derive(Parser, Debug)]
#[command(name = "wg-find")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base directory to start from.
    base_dir: Utf8PathBuf,

    /// Name pattern. Use '*' as a wildcard, e.g. '*.txt' or 'data*'.
    pattern: String,

    /// Entry type to list: f for files, d for directories.
    #[arg(short = 't', long = "type", default_value = "f", value_name = "f|d")]
    kind: FileKind,

    /// Maximum depth below the base directory (0 = direct children only).
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    /// Ignore case when matching names.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    const fn config(&self) -> FindConfig {
        FindConfig {
            max_depth: self.depth,
            kind: self.kind,
            ignore_case: self.ignore_case,
            follow_links: self.common.follow_links,
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_tracing(cli.common.verbose, cli.common.no_color);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = ensure_base_dir(&cli.base_dir) {
        output::write_missing_base(&mut out, &e)?;
        return Ok(ExitCode::FAILURE);
    }

    let config = cli.config();
    let paths = Finder::new(config).find(&cli.base_dir, &cli.pattern)?;

    match cli.common.format {
        OutputFormat::Text => output::write_paths(&mut out, &paths)?,
        OutputFormat::Json => {
            output::write_find_json(&mut out, &cli.base_dir, &cli.pattern, &config, &paths)?;
        }
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
