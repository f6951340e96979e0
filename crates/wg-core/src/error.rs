//! Error types for the wg-core crate.
//!
//! This module provides [`ConfigError`] for precondition failures checked
//! before any work begins, and [`PatternError`] for pattern compilation.

use camino::Utf8PathBuf;

/// Errors raised while validating the inputs of a search.
///
/// These are the only failures that abort a whole run. Everything that goes
/// wrong after traversal starts is contained per entry or per file.
///
/// # Examples
///
/// ```
/// use wg_core::ConfigError;
/// use camino::Utf8PathBuf;
///
/// let error = ConfigError::MissingBaseDirectory(Utf8PathBuf::from("/some/path"));
/// assert_eq!(error.to_string(), "Base directory /some/path does not exist.");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base directory does not exist or is not a directory.
    #[error("Base directory {0} does not exist.")]
    MissingBaseDirectory(Utf8PathBuf),

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the invalid option.
        option: String,
        /// Explanation of why the option is invalid.
        reason: String,
    },
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }
}

/// Errors raised while compiling a [`Pattern`](crate::Pattern).
///
/// Every source string is a valid pattern, so the only way to fail is for
/// the compiled matcher to exceed the regex engine's size limit.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The compiled matcher is larger than the engine allows.
    #[error("pattern '{source_text}' is too large to compile: {reason}")]
    TooLarge {
        /// The pattern source as given by the user.
        source_text: String,
        /// The engine's description of the limit that was hit.
        reason: String,
    },
}

/// Validates that `path` names an existing directory.
///
/// # Errors
///
/// Returns [`ConfigError::MissingBaseDirectory`] when the path does not exist
/// or is not a directory.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use wg_core::error::ensure_base_dir;
///
/// assert!(ensure_base_dir(Utf8Path::new("/nonexistent/base")).is_err());
/// ```
pub fn ensure_base_dir(path: &camino::Utf8Path) -> Result<(), ConfigError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConfigError::MissingBaseDirectory(path.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_base_directory_display() {
        let error = ConfigError::MissingBaseDirectory(Utf8PathBuf::from("/missing/dir"));
        assert_eq!(
            error.to_string(),
            "Base directory /missing/dir does not exist."
        );
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("type", "expected 'f' or 'd'");
        let msg = error.to_string();
        assert!(msg.contains("type"));
        assert!(msg.contains("expected 'f' or 'd'"));
    }

    #[test]
    fn test_pattern_too_large_display() {
        let error = PatternError::TooLarge {
            source_text: "a*b".to_owned(),
            reason: "size limit exceeded".to_owned(),
        };
        assert!(error.to_string().contains("a*b"));
    }

    #[test]
    fn test_ensure_base_dir() {
        let dir = std::env::temp_dir();
        let dir = camino::Utf8PathBuf::from_path_buf(dir).expect("temp dir is UTF-8");
        assert!(ensure_base_dir(&dir).is_ok());

        let missing = dir.join("walkgrep-definitely-missing-dir");
        match ensure_base_dir(&missing) {
            Err(ConfigError::MissingBaseDirectory(p)) => assert_eq!(p, missing),
            other => panic!("expected MissingBaseDirectory, got {other:?}"),
        }
    }
}
