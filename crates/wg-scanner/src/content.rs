//! Line-oriented content scanning.
//!
//! [`ContentScanner`] reads each candidate file as UTF-8, tests every line
//! against a substring [`Pattern`], and collects the matching lines into a
//! [`MatchReport`].
//!
//! # Sanitization
//!
//! The match test always runs on the raw line. Only lines that matched are
//! rewritten for display by [`sanitize_line`], which replaces every
//! character above U+007F with `*`. A search for `"café"` therefore still
//! finds `"café"`, and reports it as `"caf*"`.
//!
//! # Failure isolation
//!
//! Each file is handled by [`ContentScanner::scan_file`], which returns an
//! explicit `Result`. [`ContentScanner::scan`] folds those results: matches
//! go into the report, failures are logged and collected in
//! [`ScanResult::errors`], and the scan moves on to the next file.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use wg_scanner::ContentScanner;
//!
//! let scanner = ContentScanner::new("TODO", false)?;
//! let files = vec![Utf8PathBuf::from("src/main.rs")];
//! let result = scanner.scan(&files);
//!
//! for file in result.report.iter() {
//!     println!("{}", file.path);
//!     for line in &file.lines {
//!         println!("\t{line}");
//!     }
//! }
//! # Ok::<(), wg_scanner::ScanError>(())
//! ```

use std::borrow::Cow;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use tracing::{debug, info, warn};
use wg_core::Pattern;

use crate::error::ScanError;
use crate::stats::ScanStats;

/// Replacement for characters that are not plain ASCII.
const SANITIZED_CHAR: char = '*';

/// Matching lines found in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMatches {
    /// The file path, exactly as it was given to the scanner.
    pub path: Utf8PathBuf,
    /// Sanitized matching lines, in file order.
    pub lines: Vec<String>,
}

/// Ordered mapping from file path to its matching lines.
///
/// Files appear in the order they were first scanned, and only if they had
/// at least one matching line. Each path appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchReport {
    files: Vec<FileMatches>,
}

impl MatchReport {
    /// Creates an empty report.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a file's matches. Files without matches are not recorded.
    ///
    /// A path that is already present keeps its position and has its lines
    /// replaced.
    pub(crate) fn push(&mut self, path: Utf8PathBuf, lines: Vec<String>) {
        if lines.is_empty() {
            return;
        }

        match self.files.iter_mut().find(|f| f.path == path) {
            Some(existing) => existing.lines = lines,
            None => self.files.push(FileMatches { path, lines }),
        }
    }

    /// Returns the matching lines for `path`, if the file had any.
    #[must_use]
    pub fn get(&self, path: &Utf8Path) -> Option<&[String]> {
        self.files
            .iter()
            .find(|f| f.path.as_path() == path)
            .map(|f| f.lines.as_slice())
    }

    /// Iterates over files with matches in scan order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileMatches> {
        self.files.iter()
    }

    /// Iterates over the paths of files with matches in scan order.
    pub fn paths(&self) -> impl Iterator<Item = &Utf8Path> {
        self.files.iter().map(|f| f.path.as_path())
    }

    /// Returns the number of files with at least one match.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no file matched.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the number of matching lines across all files.
    #[must_use]
    pub fn total_lines(&self) -> usize {
        self.files.iter().map(|f| f.lines.len()).sum()
    }

    /// Consumes the report, returning its entries in scan order.
    #[must_use]
    pub fn into_files(self) -> Vec<FileMatches> {
        self.files
    }
}

impl<'a> IntoIterator for &'a MatchReport {
    type Item = &'a FileMatches;
    type IntoIter = std::slice::Iter<'a, FileMatches>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Result of a content scan.
#[derive(Debug)]
pub struct ScanResult {
    /// Files with matches and their lines.
    pub report: MatchReport,
    /// Counters for the scan.
    pub stats: ScanStats,
    /// Files that were skipped, with the reason.
    pub errors: Vec<ScanError>,
}

/// Scans files line by line for a substring pattern.
///
/// # Examples
///
/// ```no_run
/// use wg_scanner::ContentScanner;
///
/// let scanner = ContentScanner::new("hello", true)?;
/// let lines = scanner.scan_file("notes.txt")?;
/// # Ok::<(), wg_scanner::ScanError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ContentScanner {
    pattern: Pattern,
}

impl ContentScanner {
    /// Creates a scanner for `word_pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Pattern`] if the pattern cannot be compiled.
    pub fn new(word_pattern: &str, ignore_case: bool) -> Result<Self, ScanError> {
        Ok(Self::with_pattern(Pattern::substring(word_pattern, ignore_case)?))
    }

    /// Creates a scanner from an already compiled pattern.
    #[inline]
    #[must_use]
    pub const fn with_pattern(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Scans `files` in order and collects the matching lines.
    ///
    /// Files that cannot be read or decoded are logged, recorded in
    /// [`ScanResult::errors`], and skipped.
    pub fn scan<P: AsRef<Utf8Path>>(&self, files: &[P]) -> ScanResult {
        info!(pattern = self.pattern.source(), files = files.len(), "Starting content scan");

        let mut report = MatchReport::new();
        let mut stats = ScanStats::default();
        let mut errors = Vec::new();

        for path in files {
            let path = path.as_ref();
            stats.files_scanned += 1;

            match self.scan_file(path) {
                Ok(lines) => {
                    if !lines.is_empty() {
                        debug!(path = %path, count = lines.len(), "Matched lines");
                    }
                    report.push(path.to_owned(), lines);
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "Skipping file");
                    stats.errors += 1;
                    errors.push(e);
                }
            }
        }

        stats.files_matched = report.len();
        stats.lines_matched = report.total_lines();

        info!(
            scanned = stats.files_scanned,
            matched = stats.files_matched,
            lines = stats.lines_matched,
            errors = stats.errors,
            "Content scan completed"
        );

        ScanResult {
            report,
            stats,
            errors,
        }
    }

    /// Returns the sanitized matching lines of one file.
    ///
    /// The file is read whole and closed before returning.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if the file cannot be read, or
    /// [`ScanError::Encoding`] if its contents are not valid UTF-8.
    pub fn scan_file(&self, path: impl AsRef<Utf8Path>) -> Result<Vec<String>, ScanError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ScanError::read(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| ScanError::encoding(path, e))?;

        Ok(self.matching_lines(&text))
    }

    /// Returns the sanitized lines of `text` that match the pattern.
    #[must_use]
    pub fn matching_lines(&self, text: &str) -> Vec<String> {
        split_lines(text)
            .filter(|line| self.pattern.is_match(line))
            .map(|line| sanitize_line(line).into_owned())
            .collect()
    }

    /// Returns the compiled line pattern.
    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Scans `files` for `word_pattern`.
///
/// Shorthand for [`ContentScanner::new`] followed by [`ContentScanner::scan`].
///
/// # Errors
///
/// Returns [`ScanError::Pattern`] if the pattern cannot be compiled.
pub fn scan<P: AsRef<Utf8Path>>(
    word_pattern: &str,
    files: &[P],
    ignore_case: bool,
) -> Result<ScanResult, ScanError> {
    Ok(ContentScanner::new(word_pattern, ignore_case)?.scan(files))
}

/// Splits `text` into lines ending at `\n`, `\r\n`, or a lone `\r`.
///
/// Terminators are not included, and a trailing terminator does not
/// produce an empty final line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Replaces every character above U+007F with `*`.
///
/// Borrows the input when it is already plain ASCII.
///
/// # Examples
///
/// ```
/// use wg_scanner::sanitize_line;
///
/// assert_eq!(sanitize_line("café"), "caf*");
/// assert_eq!(sanitize_line("plain"), "plain");
/// ```
#[must_use]
pub fn sanitize_line(line: &str) -> Cow<'_, str> {
    if line.is_ascii() {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(
            line.chars()
                .map(|c| if c.is_ascii() { c } else { SANITIZED_CHAR })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        a: Utf8PathBuf,
        b: Utf8PathBuf,
    }

    // a.txt: "hello\nworld", sub/b.txt: "hello again"
    fn fixture() -> Fixture {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = Utf8Path::from_path(temp_dir.path())
            .expect("Invalid path")
            .to_owned();
        fs::create_dir_all(base.join("sub")).expect("create sub");
        let a = base.join("a.txt");
        let b = base.join("sub").join("b.txt");
        fs::write(&a, "hello\nworld").expect("write a");
        fs::write(&b, "hello again").expect("write b");
        Fixture {
            _temp_dir: temp_dir,
            a,
            b,
        }
    }

    fn write(dir: &Utf8Path, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn test_sanitize_line() {
        assert_eq!(sanitize_line("café"), "caf*");
        assert_eq!(sanitize_line("naïve résumé"), "na*ve r*sum*");
        assert_eq!(sanitize_line("日本"), "**");
        assert_eq!(sanitize_line("tab\tand ~"), "tab\tand ~");
        assert!(matches!(sanitize_line("ascii"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_scan_reports_matches_in_input_order() {
        let f = fixture();
        let result = scan("hello", &[&f.a, &f.b], false).expect("scan");

        let files: Vec<(Utf8PathBuf, Vec<String>)> = result
            .report
            .into_files()
            .into_iter()
            .map(|m| (m.path, m.lines))
            .collect();
        assert_eq!(
            files,
            vec![
                (f.a.clone(), vec!["hello".to_owned()]),
                (f.b.clone(), vec!["hello again".to_owned()]),
            ]
        );
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_scan_key_order_follows_input_order() {
        let f = fixture();
        let result = scan("hello", &[&f.b, &f.a], false).expect("scan");
        let paths: Vec<&Utf8Path> = result.report.paths().collect();
        assert_eq!(paths, vec![f.b.as_path(), f.a.as_path()]);
    }

    #[test]
    fn test_scan_omits_files_without_matches() {
        let f = fixture();
        let result = scan("world", &[&f.a, &f.b], false).expect("scan");

        assert_eq!(result.report.len(), 1);
        assert_eq!(result.report.get(&f.a), Some(&["world".to_owned()][..]));
        assert!(result.report.get(&f.b).is_none());
        assert_eq!(result.stats.files_scanned, 2);
        assert_eq!(result.stats.files_matched, 1);
    }

    #[test]
    fn test_scan_ignore_case() {
        let f = fixture();
        let sensitive = scan("HELLO", &[&f.a], false).expect("scan");
        assert!(sensitive.report.is_empty());

        let insensitive = scan("HELLO", &[&f.a], true).expect("scan");
        assert_eq!(insensitive.report.get(&f.a), Some(&["hello".to_owned()][..]));
    }

    #[test]
    fn test_non_ascii_is_sanitized_after_matching() {
        let temp_dir = TempDir::new().expect("temp dir");
        let dir = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");
        let menu = write(dir, "menu.txt", "tea\ncafé\n".as_bytes());

        let result = scan("caf", &[&menu], false).expect("scan");
        assert_eq!(result.report.get(&menu), Some(&["caf*".to_owned()][..]));

        // The accented character itself still matches before sanitization
        let result = scan("café", &[&menu], false).expect("scan");
        assert_eq!(result.report.get(&menu), Some(&["caf*".to_owned()][..]));
    }

    #[test]
    fn test_undecodable_file_is_skipped_and_scan_continues() {
        let f = fixture();
        let dir = f.a.parent().expect("has parent");
        let binary = write(dir, "blob.bin", &[0x68, 0x65, 0x6c, 0x6c, 0x6f, 0xff, 0xfe]);

        let result = scan("hello", &[&binary, &f.b], false).expect("scan");

        assert!(result.report.get(&binary).is_none());
        assert_eq!(result.report.get(&f.b), Some(&["hello again".to_owned()][..]));
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(&result.errors[0], ScanError::Encoding { path, .. } if *path == binary));
        assert_eq!(result.stats.errors, 1);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let f = fixture();
        let missing = f.a.with_file_name("missing.txt");

        let result = scan("hello", &[&missing, &f.a], false).expect("scan");
        assert_eq!(result.report.len(), 1);
        assert!(matches!(&result.errors[0], ScanError::Read { .. }));
    }

    #[test]
    fn test_line_terminators_are_stripped() {
        let temp_dir = TempDir::new().expect("temp dir");
        let dir = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");
        let crlf = write(dir, "crlf.txt", b"first hit\r\nsecond\r\nthird hit  \r\n");
        let cr = write(dir, "cr.txt", b"one\rtwo hit\rthree\rlast hit\r");

        let scanner = ContentScanner::new("hit", false).expect("scanner");
        let lines = scanner.scan_file(&crlf).expect("scan file");
        assert_eq!(lines, vec!["first hit", "third hit  "]);

        let lines = scanner.scan_file(&cr).expect("scan file");
        assert_eq!(lines, vec!["two hit", "last hit"]);
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        let lines: Vec<&str> = split_lines("a\nb\r\nc\rd\n\ne\r\r\n").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "", "e", ""]);

        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("no terminator").collect::<Vec<_>>(), vec!["no terminator"]);
    }

    #[test]
    fn test_scan_same_path_twice_keeps_one_key() {
        let f = fixture();
        let result = scan("hello", &[&f.a, &f.b, &f.a], false).expect("scan");

        let paths: Vec<&Utf8Path> = result.report.paths().collect();
        assert_eq!(paths, vec![f.a.as_path(), f.b.as_path()]);
        assert_eq!(result.report.len(), 2);
        assert_eq!(result.report.get(&f.a), Some(&["hello".to_owned()][..]));
        assert_eq!(result.stats.files_scanned, 3);
        assert_eq!(result.stats.files_matched, 2);
        assert_eq!(result.stats.lines_matched, 2);
    }

    #[test]
    fn test_report_push_replaces_existing_lines() {
        let mut report = MatchReport::new();
        report.push(Utf8PathBuf::from("a.txt"), vec!["old".to_owned()]);
        report.push(Utf8PathBuf::from("b.txt"), vec!["b".to_owned()]);
        report.push(Utf8PathBuf::from("a.txt"), vec!["new".to_owned()]);
        report.push(Utf8PathBuf::from("a.txt"), Vec::new());

        let paths: Vec<&str> = report.paths().map(Utf8Path::as_str).collect();
        assert_eq!(paths, vec!["a.txt", "b.txt"]);
        assert_eq!(report.get(Utf8Path::new("a.txt")), Some(&["new".to_owned()][..]));
    }

    #[test]
    fn test_lines_keep_file_order() {
        let scanner = ContentScanner::new("x*y", false).expect("scanner");
        let lines = scanner.matching_lines("xy\nno\nx and y\nyx\nxxy");
        assert_eq!(lines, vec!["xy", "x and y", "xxy"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let f = fixture();
        let scanner = ContentScanner::new("*", false).expect("scanner");
        let first = scanner.scan(&[&f.a, &f.b]);
        let second = scanner.scan(&[&f.a, &f.b]);
        assert_eq!(first.report, second.report);
        assert_eq!(first.report.total_lines(), 3);
    }

    #[test]
    fn test_report_serialization() {
        let mut report = MatchReport::new();
        report.push(Utf8PathBuf::from("a.txt"), vec!["hello".to_owned()]);
        report.push(Utf8PathBuf::from("empty.txt"), Vec::new());

        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([{ "path": "a.txt", "lines": ["hello"] }])
        );
    }
}
