//! Name search over a directory tree.
//!
//! [`Finder`] combines a prefix-anchored [`Pattern`] with a [`TreeWalker`]
//! and returns the matching entries as `"{directory}/{name}"` paths, in
//! traversal order.

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};
use wg_core::{FileKind, FindConfig, Pattern};

use crate::error::ScanError;
use crate::walker::TreeWalker;

/// Searches a directory tree for entries whose names match a pattern.
///
/// # Examples
///
/// ```no_run
/// use camino::Utf8Path;
/// use wg_core::{FileKind, FindConfig};
/// use wg_scanner::Finder;
///
/// let finder = Finder::new(FindConfig::default().with_kind(FileKind::Directory));
/// for path in finder.find(Utf8Path::new("./src"), "test*")? {
///     println!("{path}");
/// }
/// # Ok::<(), wg_scanner::ScanError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Finder {
    config: FindConfig,
}

impl Finder {
    /// Creates a finder with the given configuration.
    #[inline]
    #[must_use]
    pub const fn new(config: FindConfig) -> Self {
        Self { config }
    }

    /// Returns every entry below `base` whose name matches `pattern`.
    ///
    /// The base directory is not validated; a missing base logs a warning
    /// and yields an empty result. Entries that cannot be read are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if `pattern` cannot be compiled.
    pub fn find(&self, base: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let matcher = Pattern::prefix(pattern, self.config.ignore_case)?;
        let walker = TreeWalker::new(base, self.config.max_depth)
            .with_follow_links(self.config.follow_links);

        info!(
            root = %walker.root(),
            pattern,
            kind = %self.config.kind,
            max_depth = self.config.max_depth,
            "Starting find"
        );

        let paths: Vec<Utf8PathBuf> = walker
            .walk()
            .filter(|entry| entry.kind == self.config.kind && matcher.is_match(&entry.name))
            .map(|entry| {
                let path = Utf8PathBuf::from(entry.display_path());
                debug!(path = %path, depth = entry.depth, "Matched entry");
                path
            })
            .collect();

        info!(count = paths.len(), "Find completed");

        Ok(paths)
    }

    /// Returns the finder configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &FindConfig {
        &self.config
    }
}

/// Finds entries below `base` whose names match `pattern`.
///
/// Shorthand for [`Finder::find`] with an explicit option list.
///
/// # Errors
///
/// Returns [`ScanError::Pattern`] if `pattern` cannot be compiled.
pub fn find(
    base: &Utf8Path,
    pattern: &str,
    max_depth: usize,
    kind: FileKind,
    ignore_case: bool,
) -> Result<Vec<Utf8PathBuf>, ScanError> {
    let config = FindConfig::default()
        .with_max_depth(max_depth)
        .with_kind(kind)
        .with_ignore_case(ignore_case);
    Finder::new(config).find(base, pattern)
}
