//! Shared byte-level types for the spell checker.
//!
//! Everything here works on raw bytes and ASCII classification only: the
//! checker never decodes UTF-8, so any non-ASCII byte is neither a letter
//! nor a digit and is carried through unchanged.
//!
//! - [`character`] -- ASCII character classes and case folding
//! - [`case`] -- case pattern detection for whole words
//! - [`token`] -- whitespace-delimited tokens with line/column locations

pub mod case;
pub mod character;
pub mod token;

/// Maximum number of bytes kept from a single word.
///
/// Dictionary records and input tokens longer than this are silently
/// truncated; the excess trailing bytes are dropped.
pub const MAX_WORD_BYTES: usize = 255;
