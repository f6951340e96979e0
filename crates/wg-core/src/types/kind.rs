//! Entry kind selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The kind of directory entry a search is looking for.
///
/// Anything that is not a directory (regular files, sockets, broken links)
/// counts as a [`FileKind::File`].
///
/// # Examples
///
/// ```
/// use wg_core::FileKind;
///
/// assert_eq!("f".parse::<FileKind>().ok(), Some(FileKind::File));
/// assert_eq!("d".parse::<FileKind>().ok(), Some(FileKind::Directory));
/// assert_eq!(FileKind::default(), FileKind::File);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// A regular file (or any non-directory entry).
    #[default]
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

impl FromStr for FileKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "f" => Ok(Self::File),
            "d" => Ok(Self::Directory),
            other => Err(ConfigError::invalid_option(
                "type",
                format!("expected 'f' or 'd', got '{other}'"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        assert_eq!("f".parse::<FileKind>().ok(), Some(FileKind::File));
        assert_eq!("d".parse::<FileKind>().ok(), Some(FileKind::Directory));
        assert!("x".parse::<FileKind>().is_err());
        assert!("".parse::<FileKind>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FileKind::File.to_string(), "file");
        assert_eq!(FileKind::Directory.to_string(), "directory");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&FileKind::Directory).unwrap(),
            r#""directory""#
        );
    }
}
