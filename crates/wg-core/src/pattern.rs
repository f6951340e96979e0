//! Glob-like pattern compilation.
//!
//! A pattern source is a plain string in which `*` stands for "any sequence
//! of characters, possibly empty". Every other character, `.` included, only
//! matches itself. There are no other metacharacters, so every string is a
//! valid pattern source.
//!
//! The compiled [`Pattern`] carries a [`MatchMode`] that fixes where a match
//! may occur in the candidate text:
//!
//! | Mode                    | Used for           | `"ab*"` vs `"xabc"` |
//! |-------------------------|--------------------|---------------------|
//! | [`MatchMode::Prefix`]   | file and dir names | no match            |
//! | [`MatchMode::Substring`]| line content       | match               |
//! | [`MatchMode::Whole`]    | exact comparisons  | no match            |
//!
//! # Examples
//!
//! ```
//! use wg_core::Pattern;
//!
//! let names = Pattern::prefix("*.rs", false)?;
//! assert!(names.is_match("main.rs"));
//! assert!(!names.is_match("main_rs"));
//!
//! let lines = Pattern::substring("TODO", true)?;
//! assert!(lines.is_match("    // todo: tidy up"));
//! # Ok::<(), wg_core::PatternError>(())
//! ```

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// The wildcard character in pattern sources.
const WILDCARD: char = '*';

/// Where in the candidate text a [`Pattern`] is allowed to match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// The match must start at the first character of the candidate.
    #[default]
    Prefix,
    /// The match may start anywhere in the candidate.
    Substring,
    /// The match must cover the whole candidate.
    Whole,
}

/// A compiled glob-like matcher.
///
/// Patterns are immutable once built and are cheap to share by reference.
/// Each search builds its own pattern; nothing is cached process-wide.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    mode: MatchMode,
    ignore_case: bool,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` with the given match mode and case sensitivity.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::TooLarge`] if the compiled matcher exceeds the
    /// regex engine's size limit. No other input is rejected.
    pub fn new(source: &str, mode: MatchMode, ignore_case: bool) -> Result<Self, PatternError> {
        let expression = to_expression(source, mode);

        let regex = RegexBuilder::new(&expression)
            .case_insensitive(ignore_case)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| PatternError::TooLarge {
                source_text: source.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: source.to_owned(),
            mode,
            ignore_case,
            regex,
        })
    }

    /// Compiles a name pattern anchored at the start of the candidate.
    #[inline]
    pub fn prefix(source: &str, ignore_case: bool) -> Result<Self, PatternError> {
        Self::new(source, MatchMode::Prefix, ignore_case)
    }

    /// Compiles a line pattern that may match anywhere in the candidate.
    #[inline]
    pub fn substring(source: &str, ignore_case: bool) -> Result<Self, PatternError> {
        Self::new(source, MatchMode::Substring, ignore_case)
    }

    /// Returns `true` if the pattern matches `text` under this pattern's mode.
    #[inline]
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the original pattern source.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the match mode the pattern was compiled with.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns `true` if the pattern ignores case.
    #[inline]
    #[must_use]
    pub const fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

/// Translates a pattern source into a regex expression.
///
/// Literal runs are escaped as a whole; each `*` becomes `.*`.
fn to_expression(source: &str, mode: MatchMode) -> String {
    let body = source
        .split(WILDCARD)
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");

    match mode {
        MatchMode::Prefix => format!("^(?:{body})"),
        MatchMode::Substring => body,
        MatchMode::Whole => format!("^(?:{body})$"),
    }
}
