//! Configuration structures for walkgrep searches.
//!
//! - [`FindConfig`] - Name search settings (depth, kind, case, links)
//! - [`GrepConfig`] - Content search settings (recursion, case, links)
//!
//! Both implement [`Default`] with the values the command-line tools use
//! when a flag is absent. There are no configuration files; the structs are
//! serializable so they can be echoed in machine-readable output.

use serde::{Deserialize, Serialize};

use crate::types::FileKind;

/// Depth used when no explicit depth is given, and by recursive content
/// searches.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Configuration for a name search.
///
/// # Examples
///
/// ```
/// use wg_core::{FileKind, FindConfig};
///
/// let config = FindConfig::default();
/// assert_eq!(config.max_depth, 100);
/// assert_eq!(config.kind, FileKind::File);
/// assert!(!config.ignore_case);
///
/// let dirs = FindConfig::default().with_kind(FileKind::Directory).with_max_depth(2);
/// assert_eq!(dirs.max_depth, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FindConfig {
    /// Deepest directory level whose contents are reported.
    ///
    /// `0` means only the base directory's own entries.
    pub max_depth: usize,

    /// Which kind of entry to report.
    pub kind: FileKind,

    /// Whether name matching ignores case.
    pub ignore_case: bool,

    /// Whether to follow symbolic links while walking.
    pub follow_links: bool,
}

impl Default for FindConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            kind: FileKind::File,
            ignore_case: false,
            follow_links: false,
        }
    }
}

impl FindConfig {
    /// Sets the maximum reported depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the entry kind to report.
    #[must_use]
    pub const fn with_kind(mut self, kind: FileKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets case-insensitive name matching.
    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Sets whether symbolic links are followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

/// Configuration for a content search.
///
/// Candidate file names are always matched case-insensitively;
/// [`ignore_case`](Self::ignore_case) only applies to line content.
///
/// # Examples
///
/// ```
/// use wg_core::GrepConfig;
///
/// let config = GrepConfig::default();
/// assert_eq!(config.file_config().max_depth, 0);
///
/// let recursive = GrepConfig::default().with_recursive(true);
/// assert_eq!(recursive.file_config().max_depth, 100);
/// assert!(recursive.file_config().ignore_case);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GrepConfig {
    /// Whether to search below the base directory.
    pub recursive: bool,

    /// Whether line matching ignores case.
    pub ignore_case: bool,

    /// Whether to follow symbolic links while collecting candidates.
    pub follow_links: bool,
}

impl GrepConfig {
    /// Sets recursive candidate collection.
    #[must_use]
    pub const fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Sets case-insensitive line matching.
    #[must_use]
    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Sets whether symbolic links are followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Returns the name-search configuration used to collect candidate files.
    #[must_use]
    pub const fn file_config(&self) -> FindConfig {
        FindConfig {
            max_depth: if self.recursive { DEFAULT_MAX_DEPTH } else { 0 },
            kind: FileKind::File,
            ignore_case: true,
            follow_links: self.follow_links,
        }
    }
}
