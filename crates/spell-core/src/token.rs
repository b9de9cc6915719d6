// Whitespace-delimited tokens with their source locations.

use std::fmt;

/// A 1-based line/column position within an input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number, starting at 1. Counts bytes, including delimiters.
    pub column: usize,
}

impl Location {
    /// Create a new location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    /// The first byte of a source.
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// One run of non-whitespace bytes read from an input source.
///
/// Tokens are produced by the scanner and consumed immediately by the
/// cleaner and the speller; they are never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw bytes of the token, possibly truncated.
    pub text: Vec<u8>,

    /// Location of the token's first byte.
    pub location: Location,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<Vec<u8>>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }

    /// Line of the token's first byte.
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// Column of the token's first byte.
    pub fn column(&self) -> usize {
        self.location.column
    }
}
