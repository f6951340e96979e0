//! wg-grep: print lines containing a pattern, grouped by file.
//!
//! Candidate files are those whose names match the file pattern (always
//! case-insensitive) directly inside the base directory, or anywhere below
//! it with `-r`.
//!
//! # Usage
//!
//! ```bash
//! # Lines containing "error" in ./logs/*.log
//! wg-grep ./logs '*.log' 'error'
//!
//! # Recursive, ignoring case of the word
//! wg-grep ./src '*.rs' 'todo' -r -i
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing::debug;
use wg_cli::output::{self, OutputFormat};
use wg_cli::{CommonArgs, logging};
use wg_core::{GrepConfig, error::ensure_base_dir};
use wg_scanner::{ContentScanner, Finder};

// ============================================================================
// CLI Definition
// ============================================================================

/// Search file contents for a word pattern.
#[derive(Parser, Debug)]
#[command(name = "wg-grep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base directory to start from.
    base_dir: Utf8PathBuf,

    /// File name pattern. Use '*' as a wildcard, e.g. '*.txt'.
    file_pattern: String,

    /// Word pattern to look for in each line. '*' is a wildcard.
    word_pattern: String,

    /// Search subdirectories as well.
    #[arg(short, long)]
    recursive: bool,

    /// Ignore case when matching lines.
    #[arg(short = 'i', long)]
    ignore_case: bool,

    #[command(flatten)]
    common: CommonArgs,
}

impl Cli {
    const fn config(&self) -> GrepConfig {
        GrepConfig {
            recursive: self.recursive,
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
    let scanner = ContentScanner::new(&cli.word_pattern, config.ignore_case)?;
    let files = Finder::new(config.file_config()).find(&cli.base_dir, &cli.file_pattern)?;
    debug!(
        base = %cli.base_dir,
        candidates = files.len(),
        recursive = config.recursive,
        "Collected candidate files"
    );

    let result = scanner.scan(&files);

    match cli.common.format {
        OutputFormat::Text => output::write_report(&mut out, &result.report)?,
        OutputFormat::Json => output::write_grep_json(&mut out, &result)?,
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wg-grep", "base", "*.txt", "hello"]);
        assert_eq!(cli.config(), GrepConfig::default());
        assert_eq!(cli.config().file_config().max_depth, 0);
    }

    #[test]
    fn test_recursive_and_ignore_case() {
        let cli = Cli::parse_from(["wg-grep", "base", "*.txt", "hello", "-r", "-i", "-L"]);
        let config = cli.config();
        assert!(config.recursive);
        assert!(config.ignore_case);
        assert!(config.file_config().follow_links);
        assert_eq!(config.file_config().max_depth, 100);
    }

    #[test]
    fn test_requires_word_pattern() {
        assert!(Cli::try_parse_from(["wg-grep", "base", "*.txt"]).is_err());
    }
}
