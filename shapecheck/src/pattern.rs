//! Regular-expression patterns with flag characters
//!
//! A [`Pattern`] pairs a regex source with a set of single-character flags
//! (`i`, `m`, `s`, `x`, `U`, `u`, `g`, `y`) and keeps the compiled
//! [`regex::Regex`] alongside. Sources use `regex` crate syntax.
//!
//! [`merge_patterns`] builds a new pattern out of literal fragments and
//! existing patterns, taking the union of the operands' flags.
//!
//! # Example
//! ```rust
//! use shapecheck::pattern::{merge_patterns, Pattern, Segment};
//!
//! let word = Pattern::with_flags("[a-z]+", "i").unwrap();
//! let digits = Pattern::with_flags("[0-9]+", "mi").unwrap();
//!
//! let merged = merge_patterns(&[
//!     Segment::from("^"),
//!     Segment::from(&word),
//!     Segment::from("-"),
//!     Segment::from(&digits),
//!     Segment::from("$"),
//! ])
//! .unwrap();
//!
//! assert_eq!(merged.source(), "^[a-z]+-[0-9]+$");
//! assert_eq!(merged.flags(), "im");
//! assert!(merged.is_match("ABC-123"));
//! ```

use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;
use tracing::{trace, warn};

/// Flag characters accepted by [`Pattern::with_flags`].
pub const SUPPORTED_FLAGS: &str = "imsxUugy";

/// Error building a [`Pattern`].
#[derive(Debug, Error)]
pub enum PatternError {
    /// A flag character outside [`SUPPORTED_FLAGS`]
    #[error("unsupported regex flag '{0}'")]
    UnsupportedFlag(char),
    /// The source failed to compile
    #[error("invalid regex pattern: {0}")]
    Compile(#[from] regex::Error),
}

/// A compiled regular expression together with its source and flags.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` without flags.
    pub fn new(source: impl Into<String>) -> Result<Self, PatternError> {
        Self::with_flags(source, "")
    }

    /// Compile `source` with `flags`. Repeated flags collapse to one.
    ///
    /// `g` and `y` are accepted and kept in [`flags`](Self::flags) but do
    /// not change matching.
    pub fn with_flags(source: impl Into<String>, flags: &str) -> Result<Self, PatternError> {
        let source = source.into();
        let flags = union_flags([flags]);
        if let Some(flag) = flags.chars().find(|f| !SUPPORTED_FLAGS.contains(*f)) {
            warn!(source = %source, flag = %flag, "Unsupported regex flag");
            return Err(PatternError::UnsupportedFlag(flag));
        }

        let regex = RegexBuilder::new(&source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .ignore_whitespace(flags.contains('x'))
            .swap_greed(flags.contains('U'))
            .build()
            .inspect_err(|e| warn!(source = %source, error = %e, "Regex failed to compile"))?;

        trace!(source = %source, flags = %flags, "Compiled pattern");
        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    /// The regex source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The flag characters, deduplicated in first-appearance order.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// The compiled regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Returns true if the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

/// One piece of a merged pattern.
#[derive(Debug, Clone, Copy)]
pub enum Segment<'a> {
    /// Literal regex text, inserted unchanged
    Literal(&'a str),
    /// An existing pattern: its source is inserted and its flags are merged
    Pattern(&'a Pattern),
}

impl<'a> From<&'a str> for Segment<'a> {
    fn from(text: &'a str) -> Self {
        Self::Literal(text)
    }
}

impl<'a> From<&'a Pattern> for Segment<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

/// Concatenate `segments` into one pattern.
///
/// The source is the concatenation of the literal fragments and the operand
/// sources in order. The flags are the distinct flags of all operands in
/// order of first appearance.
pub fn merge_patterns(segments: &[Segment<'_>]) -> Result<Pattern, PatternError> {
    let mut source = String::new();
    let mut operand_flags = Vec::new();
    for segment in segments {
        match segment {
            Segment::Literal(text) => source.push_str(text),
            Segment::Pattern(pattern) => {
                source.push_str(pattern.source());
                operand_flags.push(pattern.flags());
            }
        }
    }
    Pattern::with_flags(source, &union_flags(operand_flags))
}

fn union_flags<'a>(flags: impl IntoIterator<Item = &'a str>) -> String {
    let mut merged = String::new();
    for flag in flags.into_iter().flat_map(str::chars) {
        if !merged.contains(flag) {
            merged.push(flag);
        }
    }
    merged
}
