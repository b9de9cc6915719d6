// SpellChecker: checks whole input sources against one dictionary.
//
// Owns the dictionary and a lookup cache and ties the pieces together:
// the scanner splits a source into tokens, `clean` reduces each token to a
// word, the dictionary decides whether the word is spelled correctly, and
// every rejected word is written as one report line:
//
//   <label>:<line>:<col> <word>     when the source has a label
//   <line>:<col> <word>             otherwise
//
// The report format is a stable, line-oriented contract.

use std::cell::RefCell;
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use spell_core::token::Location;

use crate::SpellError;
use crate::dictionary::Dictionary;
use crate::speller::cache::{DEFAULT_CACHE_CAPACITY, SpellerCache};
use crate::speller::{SpellResult, Speller};
use crate::tokenizer::{Scanner, clean};

/// Path used in errors for sources read without a name, such as stdin.
const UNNAMED_SOURCE: &str = "<stdin>";

/// Options controlling a `SpellChecker`.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Number of spell results to memoize. Zero disables the cache.
    pub cache_capacity: usize,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// One rejected word and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    /// Source label shown in the report, if any.
    pub label: Option<String>,
    /// Location of the raw token's first byte.
    pub location: Location,
    /// The cleaned word that failed lookup.
    pub word: Vec<u8>,
}

impl Misspelling {
    /// Write this misspelling as one report line, bytes unchanged.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_report(out, self.label.as_deref(), self.location, &self.word)
    }
}

impl fmt::Display for Misspelling {
    /// The report line without its newline; non-UTF-8 bytes are replaced.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "{label}:")?;
        }
        write!(
            f,
            "{} {}",
            self.location,
            String::from_utf8_lossy(&self.word)
        )
    }
}

fn write_report<W: Write + ?Sized>(
    out: &mut W,
    label: Option<&str>,
    location: Location,
    word: &[u8],
) -> io::Result<()> {
    match label {
        Some(label) => write!(out, "{label}:{location} ")?,
        None => write!(out, "{location} ")?,
    }
    out.write_all(word)?;
    out.write_all(b"\n")
}

/// Counters for one or more checked sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Raw tokens read, skipped ones included.
    pub tokens: usize,
    /// Words reported as misspelled.
    pub misspellings: usize,
}

impl CheckSummary {
    /// True when nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.misspellings == 0
    }

    /// Add another summary's counters to this one.
    pub fn merge(&mut self, other: CheckSummary) {
        self.tokens += other.tokens;
        self.misspellings += other.misspellings;
    }
}

/// Checks input sources against an immutable dictionary.
pub struct SpellChecker {
    dictionary: Dictionary,

    /// Wrapped in `RefCell` so that `&self` lookups can fill the cache.
    cache: RefCell<SpellerCache>,
}

impl SpellChecker {
    /// Create a checker owning `dictionary`.
    pub fn new(dictionary: Dictionary, options: CheckOptions) -> Self {
        Self {
            dictionary,
            cache: RefCell::new(SpellerCache::new(options.cache_capacity)),
        }
    }

    /// The dictionary words are checked against.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Clean a raw token and check it.
    ///
    /// Returns the cleaned word if it is misspelled, `None` if it is correct
    /// or was skipped by cleaning.
    pub fn check_token<'t>(&self, raw: &'t [u8]) -> Option<&'t [u8]> {
        let Some(word) = clean(raw) else {
            log::trace!("skipping token {:?}", String::from_utf8_lossy(raw));
            return None;
        };
        match self.spell(word) {
            SpellResult::Ok => None,
            _ => Some(word),
        }
    }

    /// Check a source and collect its misspellings in token order.
    pub fn misspellings<R: Read>(
        &self,
        reader: R,
        label: Option<&str>,
    ) -> io::Result<Vec<Misspelling>> {
        let mut found = Vec::new();
        for token in Scanner::new(reader) {
            let token = token?;
            if let Some(word) = self.check_token(&token.text) {
                found.push(Misspelling {
                    label: label.map(str::to_owned),
                    location: token.location,
                    word: word.to_vec(),
                });
            }
        }
        Ok(found)
    }

    /// Check a source, writing one report line per misspelling to `out`.
    ///
    /// Lines are written as tokens are read, so a read error part way
    /// through leaves the earlier reports in `out`.
    pub fn check_reader<R: Read, W: Write + ?Sized>(
        &self,
        reader: R,
        label: Option<&str>,
        out: &mut W,
    ) -> Result<CheckSummary, SpellError> {
        let source = Path::new(label.unwrap_or(UNNAMED_SOURCE));
        self.check_source(reader, source, label, out)
    }

    /// Open a file and check it.
    pub fn check_path<W: Write + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        label: Option<&str>,
        out: &mut W,
    ) -> Result<CheckSummary, SpellError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SpellError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_source(file, path, label, out)
    }

    fn check_source<R: Read, W: Write + ?Sized>(
        &self,
        reader: R,
        source: &Path,
        label: Option<&str>,
        out: &mut W,
    ) -> Result<CheckSummary, SpellError> {
        let mut summary = CheckSummary::default();

        for token in Scanner::new(reader) {
            let token = token.map_err(|e| SpellError::InputUnreadable {
                path: source.to_path_buf(),
                source: e,
            })?;
            summary.tokens += 1;

            if let Some(word) = self.check_token(&token.text) {
                summary.misspellings += 1;
                write_report(out, label, token.location, word)?;
            }
        }

        log::debug!(
            "{}: {} tokens, {} misspellings",
            source.display(),
            summary.tokens,
            summary.misspellings
        );
        Ok(summary)
    }
}

impl Speller for SpellChecker {
    /// Dictionary lookup through the cache.
    fn spell(&self, word: &[u8]) -> SpellResult {
        let cached = self.cache.borrow().get(word);
        if let Some(result) = cached {
            return result;
        }
        let result = self.dictionary.spell(word);
        self.cache.borrow_mut().insert(word, result);
        result
    }
}
