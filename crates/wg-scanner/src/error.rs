//! Error types for the wg-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during directory traversal and content scanning.

use camino::Utf8PathBuf;
use wg_core::PatternError;

/// Errors that can occur during walking, finding, and scanning.
///
/// # Error Recovery Strategy
///
/// - **Walk errors** ([`ScanError::Walk`]): Log warning, skip entry, continue walk
/// - **Non-UTF-8 paths** ([`ScanError::NonUtf8Path`]): Log warning, skip entry, continue walk
/// - **File read errors** ([`ScanError::Read`]): Log warning, skip file, continue scan
/// - **Encoding errors** ([`ScanError::Encoding`]): Log warning, skip file, continue scan
/// - **Pattern errors** ([`ScanError::Pattern`]): Fatal, returned before any work starts
///
/// # Examples
///
/// ```
/// use wg_scanner::ScanError;
///
/// fn handle_error(err: &ScanError) -> String {
///     match err {
///         ScanError::Walk(e) => format!("walk: {e}"),
///         ScanError::Read { path, .. } => format!("read: {path}"),
///         ScanError::Encoding { path, .. } => format!("encoding: {path}"),
///         ScanError::NonUtf8Path(p) => format!("path: {}", p.display()),
///         ScanError::Pattern(e) => format!("pattern: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The traversal primitive failed on one entry.
    ///
    /// Covers permission-denied directories, entries that vanished
    /// mid-walk, and symlink loops when links are followed.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The path of the file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file's contents are not valid UTF-8.
    #[error("failed to decode file {path} as UTF-8: {source}")]
    Encoding {
        /// The path of the file that couldn't be decoded.
        path: Utf8PathBuf,
        /// The underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// The search pattern could not be compiled.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ScanError::Encoding`] error.
    #[inline]
    pub fn encoding(path: impl Into<Utf8PathBuf>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable (the operation continues).
    ///
    /// Recoverable errors are local to one entry or one file.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Walk(_) | Self::Read { .. } | Self::Encoding { .. } | Self::NonUtf8Path(_)
        )
    }

    /// Returns `true` if this error is fatal (the operation cannot start).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::Read { path, .. } | Self::Encoding { path, .. } => Some(path),
            Self::Walk(_) | Self::NonUtf8Path(_) | Self::Pattern(_) => None,
        }
    }
}
