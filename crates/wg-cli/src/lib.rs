//! Shared plumbing for the `wg-find` and `wg-grep` binaries.
//!
//! - [`logging`]: tracing subscriber setup (stderr, `RUST_LOG` aware)
//! - [`output`]: text and JSON rendering of search results
//! - [`CommonArgs`]: flags both binaries accept

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod logging;
pub mod output;

use clap::Args;

pub use output::OutputFormat;

/// Flags shared by both binaries.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Follow symbolic links while walking.
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,
}
