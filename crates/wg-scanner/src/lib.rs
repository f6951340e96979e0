//! Depth-bounded tree walking, name search, and content scanning.
//!
//! This crate is the search engine behind the `wg-find` and `wg-grep`
//! tools. It walks a base directory, matches entry names against a
//! glob-like [`Pattern`](wg_core::Pattern), and scans candidate files for
//! matching lines.
//!
//! # Overview
//!
//! - [`TreeWalker`]: lazy traversal yielding [`DirectoryEntry`] values with
//!   their depth below the base
//! - [`Finder`]: name search built on the walker
//! - [`ContentScanner`]: line search over a list of files, producing a
//!   [`MatchReport`]
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use wg_core::FileKind;
//!
//! let files = wg_scanner::find(Utf8Path::new("./logs"), "*.log", 100, FileKind::File, true)?;
//! let result = wg_scanner::scan("ERROR", &files, false)?;
//!
//! for file in &result.report {
//!     println!("{}", file.path);
//!     for line in &file.lines {
//!         println!("\t{line}");
//!     }
//! }
//! # Ok::<(), wg_scanner::ScanError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! find(base, name pattern)
//!     │
//!     ├── Pattern (prefix mode)
//!     └── TreeWalker ── WalkBuilder (ignore crate)
//!             │
//!             ▼
//!       Vec<Utf8PathBuf>
//!             │
//! scan(word pattern, files)
//!     │
//!     ├── Pattern (substring mode)
//!     └── ContentScanner ── one fs::read per file
//!             │
//!             ▼
//!       MatchReport + ScanStats + skipped files
//! ```
//!
//! Everything runs on the calling thread. No state is shared between calls.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod content;
mod error;
mod finder;
mod stats;
pub mod walker;

pub use content::{ContentScanner, FileMatches, MatchReport, ScanResult, sanitize_line, scan};
pub use error::ScanError;
pub use finder::{Finder, find};
pub use stats::ScanStats;
pub use walker::{DirectoryEntry, TreeWalker, Walk};
