//! Core types, errors, and the pattern compiler for walkgrep.
//!
//! This crate provides the foundational pieces shared by the scanner and
//! the command-line tools:
//!
//! - [`Pattern`]: the glob-like name/line matcher (`*` is the only wildcard)
//! - [`FileKind`]: file vs directory selection
//! - [`FindConfig`] and [`GrepConfig`]: typed option sets with defaults
//! - [`ConfigError`] and [`PatternError`]: error types
//!
//! # Examples
//!
//! ```
//! use wg_core::{MatchMode, Pattern};
//!
//! let pattern = Pattern::new("*.txt", MatchMode::Prefix, false)?;
//! assert!(pattern.is_match("notes.txt"));
//! assert!(!pattern.is_match("notes_txt"));
//! # Ok::<(), wg_core::PatternError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod pattern;
pub mod types;

pub use config::{DEFAULT_MAX_DEPTH, FindConfig, GrepConfig};
pub use error::{ConfigError, PatternError};
pub use pattern::{MatchMode, Pattern};
pub use types::FileKind;
