//! Result rendering for the command-line tools.
//!
//! Text output is the line-oriented format shell pipelines expect:
//!
//! ```text
//! wg-find:                wg-grep:
//! base/a.txt              base/a.txt
//! base/sub/b.txt          <TAB>hello
//!                         base/sub/b.txt
//!                         <TAB>hello again
//! ```
//!
//! JSON output wraps the same data with the query and scan counters.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::ValueEnum;
use serde::Serialize;
use wg_core::FindConfig;
use wg_scanner::{MatchReport, ScanError, ScanResult, ScanStats};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// A single pretty-printed JSON document.
    Json,
}

/// Writes the precondition failure message for a missing base directory.
pub fn write_missing_base(out: &mut impl Write, error: &wg_core::ConfigError) -> io::Result<()> {
    writeln!(out, "{error}")
}

/// Writes one path per line.
pub fn write_paths(out: &mut impl Write, paths: &[Utf8PathBuf]) -> io::Result<()> {
    for path in paths {
        writeln!(out, "{path}")?;
    }
    Ok(())
}

/// Writes each file path followed by its matching lines, one tab in.
pub fn write_report(out: &mut impl Write, report: &MatchReport) -> io::Result<()> {
    for file in report {
        writeln!(out, "{}", file.path)?;
        for line in &file.lines {
            writeln!(out, "\t{line}")?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct FindDocument<'a> {
    base: &'a Utf8Path,
    pattern: &'a str,
    config: &'a FindConfig,
    paths: &'a [Utf8PathBuf],
}

#[derive(Serialize)]
struct SkippedFile<'a> {
    path: Option<&'a Utf8Path>,
    error: String,
}

#[derive(Serialize)]
struct GrepDocument<'a> {
    files: &'a MatchReport,
    stats: &'a ScanStats,
    skipped: Vec<SkippedFile<'a>>,
}

/// Writes a `wg-find` result as JSON.
pub fn write_find_json(
    out: &mut impl Write,
    base: &Utf8Path,
    pattern: &str,
    config: &FindConfig,
    paths: &[Utf8PathBuf],
) -> io::Result<()> {
    let document = FindDocument {
        base,
        pattern,
        config,
        paths,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

/// Writes a `wg-grep` result as JSON, including skipped files.
pub fn write_grep_json(out: &mut impl Write, result: &ScanResult) -> io::Result<()> {
    let document = GrepDocument {
        files: &result.report,
        stats: &result.stats,
        skipped: result.errors.iter().map(skipped_file).collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)
}

fn skipped_file(error: &ScanError) -> SkippedFile<'_> {
    SkippedFile {
        path: error.path().map(Utf8PathBuf::as_path),
        error: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use wg_core::{ConfigError, FileKind};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        f(&mut buffer).expect("write to buffer");
        String::from_utf8(buffer).expect("output is UTF-8")
    }

    // base/a.txt: "hello\nworld", base/sub/b.txt: "hello café"
    fn create_tree() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path().join("base");
        fs::create_dir_all(base.join("sub")).expect("create dirs");
        fs::write(base.join("a.txt"), "hello\nworld").expect("write");
        fs::write(base.join("sub/b.txt"), "hello café").expect("write");
        temp_dir
    }

    #[test]
    fn test_write_missing_base() {
        let error = ConfigError::MissingBaseDirectory(Utf8PathBuf::from("nowhere"));
        let text = render(|out| write_missing_base(out, &error));
        insta::assert_snapshot!(text, @"Base directory nowhere does not exist.");
    }

    #[test]
    fn test_write_paths() {
        let paths = vec![
            Utf8PathBuf::from("base/a.txt"),
            Utf8PathBuf::from("base/sub/b.txt"),
        ];
        let text = render(|out| write_paths(out, &paths));
        insta::assert_snapshot!(text, @r"
        base/a.txt
        base/sub/b.txt
        ");
    }

    #[test]
    fn test_write_paths_empty_writes_nothing() {
        let text = render(|out| write_paths(out, &[]));
        assert!(text.is_empty());
    }

    #[test]
    fn test_write_report_end_to_end() {
        let temp_dir = create_tree();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");
        let base = root.join("base");

        let files = wg_scanner::find(&base, "*.TXT", 100, FileKind::File, true).expect("find");
        let result = wg_scanner::scan("hello", &files, false).expect("scan");

        let text = render(|out| write_report(out, &result.report));
        let text = text.replace(root.as_str(), "<tmp>");
        assert_eq!(
            text,
            "<tmp>/base/a.txt\n\thello\n<tmp>/base/sub/b.txt\n\thello caf*\n"
        );
    }

    #[test]
    fn test_write_find_json() {
        let paths = vec![Utf8PathBuf::from("base/a.txt")];
        let config = FindConfig::default().with_max_depth(0);
        let text = render(|out| {
            write_find_json(out, Utf8Path::new("base"), "*.txt", &config, &paths)
        });

        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(
            value,
            serde_json::json!({
                "base": "base",
                "pattern": "*.txt",
                "config": {
                    "max_depth": 0,
                    "kind": "file",
                    "ignore_case": false,
                    "follow_links": false
                },
                "paths": ["base/a.txt"]
            })
        );
    }

    #[test]
    fn test_write_grep_json_lists_skipped_files() {
        let temp_dir = create_tree();
        let root = Utf8Path::from_path(temp_dir.path()).expect("Invalid path");
        let good = root.join("base").join("a.txt");
        let bad = root.join("base").join("bad.bin");
        fs::write(&bad, [0xffu8, 0xfe]).expect("write");

        let result = wg_scanner::scan("world", &[&bad, &good], false).expect("scan");
        let text = render(|out| write_grep_json(out, &result));

        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
        assert_eq!(
            value["files"],
            serde_json::json!([{ "path": good.as_str(), "lines": ["world"] }])
        );
        assert_eq!(value["stats"]["files_scanned"], 2);
        assert_eq!(value["stats"]["errors"], 1);
        assert_eq!(value["skipped"][0]["path"], bad.as_str());
    }
}
