//! Depth-bounded directory traversal.
//!
//! This module provides [`TreeWalker`], which uses the `ignore` crate to walk
//! a base directory and yield one [`DirectoryEntry`] per file or
//! subdirectory, tagged with the depth of the directory that contains it.
//!
//! # Depth
//!
//! The depth of a directory is the number of directory levels between the
//! base and that directory, so the base itself is depth 0. An entry is
//! yielded only when its containing directory's depth is at most
//! `max_depth`:
//!
//! ```text
//! base/               depth 0
//! ├── a.txt           yielded for max_depth >= 0
//! └── sub/            yielded for max_depth >= 0
//!     └── b.txt       yielded for max_depth >= 1
//! ```
//!
//! # Order
//!
//! Every entry of a directory is yielded before any entry below it. The
//! subdirectories are then walked in name order, each one completely before
//! the next:
//!
//! ```text
//! base/a.txt, base/sub, base/z.txt, base/sub/b.txt
//! ```
//!
//! # Features
//!
//! - Visits hidden entries and ignores `.gitignore` rules (plain traversal)
//! - Sorted siblings, so repeated walks over the same tree are identical
//! - Followed symlinks that point back at an ancestor are reported and skipped
//! - Per-entry failures are logged and skipped, never fatal
//! - Converts paths to UTF-8 [`Utf8PathBuf`](camino::Utf8PathBuf)
//!
//! # Examples
//!
//! ```no_run
//! use wg_scanner::TreeWalker;
//! use camino::Utf8Path;
//!
//! let walker = TreeWalker::new(Utf8Path::new("/path/to/project"), 2);
//!
//! for entry in walker.walk() {
//!     println!("{} ({}, depth {})", entry.display_path(), entry.kind, entry.depth);
//! }
//! ```

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::{Path, PathBuf, is_separator};

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use tracing::warn;
use wg_core::FileKind;

use crate::error::ScanError;

/// One file or subdirectory produced during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// The directory containing the entry, as reached from the base.
    pub dir: Utf8PathBuf,
    /// The entry's own name (last path component).
    pub name: String,
    /// Depth of [`dir`](Self::dir) relative to the base (base = 0).
    pub depth: usize,
    /// Whether the entry is a file or a directory.
    pub kind: FileKind,
}

impl DirectoryEntry {
    /// Returns the entry's path joined with the platform separator.
    #[must_use]
    pub fn path(&self) -> Utf8PathBuf {
        self.dir.join(&self.name)
    }

    /// Returns `"{dir}/{name}"`, always joined with a forward slash.
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use wg_core::FileKind;
    /// use wg_scanner::DirectoryEntry;
    ///
    /// let entry = DirectoryEntry {
    ///     dir: Utf8PathBuf::from("base/sub"),
    ///     name: "b.txt".to_owned(),
    ///     depth: 1,
    ///     kind: FileKind::File,
    /// };
    /// assert_eq!(entry.display_path(), "base/sub/b.txt");
    /// ```
    #[must_use]
    pub fn display_path(&self) -> String {
        let dir = self.dir.as_str();
        if dir.ends_with(is_separator) {
            format!("{dir}{}", self.name)
        } else {
            format!("{dir}/{}", self.name)
        }
    }
}

/// A depth-bounded walker over a base directory.
///
/// The walker is a reusable description of a traversal. Each call to
/// [`walk`](Self::walk) starts a fresh, lazy, single-pass traversal.
///
/// # Examples
///
/// ```no_run
/// use wg_scanner::TreeWalker;
/// use camino::Utf8Path;
///
/// let walker = TreeWalker::new(Utf8Path::new("./src/"), 0);
/// assert_eq!(walker.root().as_str(), "./src");
///
/// let names: Vec<String> = walker.walk().map(|e| e.name).collect();
/// ```
#[derive(Debug, Clone)]
pub struct TreeWalker {
    /// The base directory with trailing separators removed.
    root: Utf8PathBuf,
    /// Deepest directory level whose contents are yielded.
    max_depth: usize,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl TreeWalker {
    /// Creates a walker for `root` that yields entries of directories up to
    /// `max_depth` levels below it.
    ///
    /// The root is not checked for existence here. Walking a missing root
    /// logs a warning and yields nothing.
    #[must_use]
    pub fn new(root: &Utf8Path, max_depth: usize) -> Self {
        Self {
            root: normalize_root(root.as_str()),
            max_depth,
            follow_links: false,
        }
    }

    /// Configures whether to follow symbolic links.
    ///
    /// By default, symbolic links are not followed.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Starts a new traversal.
    #[must_use]
    pub fn walk(&self) -> Walk {
        Walk {
            root: self.root.clone(),
            max_depth: self.max_depth,
            follow_links: self.follow_links,
            pending: vec![PendingDir {
                path: self.root.clone(),
                depth: 0,
                ancestors: Vec::new(),
            }],
            listed: VecDeque::new(),
        }
    }

    /// Returns the normalized root directory.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the maximum reported depth.
    #[inline]
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// A directory waiting to be listed.
#[derive(Debug)]
struct PendingDir {
    path: Utf8PathBuf,
    depth: usize,
    /// Resolved paths of every directory above this one. Only tracked when
    /// following links.
    ancestors: Vec<PathBuf>,
}

/// A lazy traversal started by [`TreeWalker::walk`].
///
/// Directories are listed one at a time. All entries of a directory are
/// yielded before anything below it, and subdirectories are then visited
/// in name order, each one completely before the next.
///
/// Failures on individual entries are logged at `warn` level and skipped.
pub struct Walk {
    root: Utf8PathBuf,
    max_depth: usize,
    follow_links: bool,
    /// Directories still to list; the next one is on top.
    pending: Vec<PendingDir>,
    /// Results of the directory listed last, not yet handed out.
    listed: VecDeque<Result<DirectoryEntry, ScanError>>,
}

impl std::fmt::Debug for Walk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walk")
            .field("root", &self.root)
            .field("max_depth", &self.max_depth)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl Iterator for Walk {
    type Item = DirectoryEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.listed.pop_front() {
                Some(Ok(entry)) => return Some(entry),
                Some(Err(e)) => warn!(root = %self.root, error = %e, "Skipping entry"),
                None => {
                    let dir = self.pending.pop()?;
                    self.list(dir);
                }
            }
        }
    }
}

impl Walk {
    /// Lists the direct children of `dir` and schedules its subdirectories.
    fn list(&mut self, dir: PendingDir) {
        let PendingDir {
            path,
            depth,
            mut ancestors,
        } = dir;

        if self.follow_links {
            match fs::canonicalize(&path) {
                Ok(resolved) => ancestors.push(resolved),
                Err(e) => {
                    self.listed.push_back(Err(io_error(path.as_std_path(), e)));
                    return;
                }
            }
        }

        let mut subdirs = Vec::new();

        for result in self.list_builder(&path).build() {
            let entry = match result {
                Ok(entry) if entry.depth() == 0 => continue,
                Ok(entry) => entry,
                Err(e) => {
                    self.listed.push_back(Err(e.into()));
                    continue;
                }
            };

            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            let descend = is_dir && depth < self.max_depth;
            if descend && entry.path_is_symlink() {
                if let Err(e) = check_loop(&ancestors, entry.path()) {
                    self.listed.push_back(Err(e));
                    continue;
                }
            }

            match to_entry(&entry, depth) {
                Ok(Some(listed)) => {
                    if descend {
                        subdirs.push(listed.path());
                    }
                    self.listed.push_back(Ok(listed));
                }
                Ok(None) => {}
                Err(e) => self.listed.push_back(Err(e)),
            }
        }

        // Pushed in reverse so the first subdirectory is listed next
        for subdir in subdirs.into_iter().rev() {
            self.pending.push(PendingDir {
                path: subdir,
                depth: depth + 1,
                ancestors: ancestors.clone(),
            });
        }
    }

    /// Builds a walker over one directory's direct children.
    fn list_builder(&self, dir: &Utf8Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(dir);
        builder
            // Plain traversal: no hidden-file or ignore-file filtering
            .standard_filters(false)
            .follow_links(self.follow_links)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b));
        builder
    }
}

/// Converts a raw listing entry into a [`DirectoryEntry`] at `depth`.
///
/// Returns `Ok(None)` for a path without a parent or a name.
fn to_entry(entry: &ignore::DirEntry, depth: usize) -> Result<Option<DirectoryEntry>, ScanError> {
    let path = entry.path();
    let utf8_path =
        Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

    let (Some(dir), Some(name)) = (utf8_path.parent(), utf8_path.file_name()) else {
        return Ok(None);
    };

    Ok(Some(DirectoryEntry {
        dir: dir.to_owned(),
        name: name.to_owned(),
        depth,
        kind: entry_kind(entry),
    }))
}

/// Classifies an entry, resolving unfollowed symlinks by their target.
fn entry_kind(entry: &ignore::DirEntry) -> FileKind {
    let is_dir = match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        _ => false,
    };

    if is_dir {
        FileKind::Directory
    } else {
        FileKind::File
    }
}

/// Fails if the followed link `child` resolves to one of `ancestors`.
fn check_loop(ancestors: &[PathBuf], child: &Path) -> Result<(), ScanError> {
    let resolved = fs::canonicalize(child).map_err(|e| io_error(child, e))?;

    match ancestors.iter().find(|ancestor| **ancestor == resolved) {
        Some(ancestor) => Err(ScanError::Walk(ignore::Error::Loop {
            ancestor: ancestor.clone(),
            child: child.to_path_buf(),
        })),
        None => Ok(()),
    }
}

fn io_error(path: &Path, err: io::Error) -> ScanError {
    ScanError::Walk(ignore::Error::WithPath {
        path: path.to_path_buf(),
        err: Box::new(ignore::Error::Io(err)),
    })
}

/// Strips trailing path separators, keeping a bare filesystem root intact.
fn normalize_root(root: &str) -> Utf8PathBuf {
    let trimmed = root.trim_end_matches(is_separator);
    if trimmed.is_empty() && !root.is_empty() {
        // `root` consisted only of separators, e.g. "/"
        Utf8PathBuf::from(&root[..1])
    } else {
        Utf8PathBuf::from(trimmed)
    }
}
