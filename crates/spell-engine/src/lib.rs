//! Dictionary lookup engine for the spell checker.
//!
//! - [`dictionary`] -- sorted, case-preserving word list
//! - [`speller`] -- the `Speller` trait, capitalization matching and lookup cache
//! - [`tokenizer`] -- whitespace scanner and token cleaning
//! - [`checker`] -- per-source checking and misspelling reports

pub mod checker;
pub mod dictionary;
pub mod speller;
pub mod tokenizer;

use std::io;
use std::path::PathBuf;

pub use checker::{CheckOptions, CheckSummary, Misspelling, SpellChecker};
pub use dictionary::{Dictionary, DictionaryEntry};
pub use speller::Speller;

/// Error type for loading dictionaries and checking input sources.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// The word list could not be opened or read. Fatal for the whole run.
    #[error("cannot open dictionary file '{}': {source}", .path.display())]
    DictionaryUnreadable { path: PathBuf, source: io::Error },

    /// An input file could not be opened or read. Only that input is skipped.
    #[error("cannot open file '{}': {source}", .path.display())]
    InputUnreadable { path: PathBuf, source: io::Error },

    /// Writing the misspelling report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}
