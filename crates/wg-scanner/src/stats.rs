//! Content scan statistics.
//!
//! [`ScanStats`] is filled in by [`ContentScanner::scan`](crate::ContentScanner::scan)
//! and returned with the report, for logging and machine-readable output.

use serde::{Deserialize, Serialize};

/// Counters for one content scan.
///
/// # Examples
///
/// ```
/// use wg_scanner::ScanStats;
///
/// let stats = ScanStats { files_scanned: 4, files_matched: 1, lines_matched: 3, errors: 1 };
/// assert_eq!(stats.files_without_matches(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Number of files the scanner attempted to read.
    pub files_scanned: usize,
    /// Number of files with at least one matching line.
    pub files_matched: usize,
    /// Number of matching lines across all files.
    pub lines_matched: usize,
    /// Number of files skipped because they could not be read or decoded.
    pub errors: usize,
}

impl ScanStats {
    /// Returns the number of files that were read successfully but had no
    /// matching line.
    #[inline]
    #[must_use]
    pub const fn files_without_matches(&self) -> usize {
        self.files_scanned
            .saturating_sub(self.files_matched)
            .saturating_sub(self.errors)
    }
}
