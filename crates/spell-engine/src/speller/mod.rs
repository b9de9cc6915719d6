// Spell checking against a dictionary

pub mod cache;
pub mod capitalization;

use spell_core::character::fold;

use crate::dictionary::Dictionary;
use crate::speller::capitalization::is_valid_capitalization;

/// Outcome of checking one cleaned word.
///
/// Variants are ordered from best to worst, so the better of two results
/// is their minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// A dictionary entry accepts the word as written.
    Ok,
    /// The word is known, but no entry accepts its capitalization.
    CapitalizationError,
    /// No entry has the word's folded key.
    Failed,
}

/// Trait for spell checkers.
///
/// `word` is a cleaned token exactly as typed; implementations must not
/// assume it has been lowercased.
pub trait Speller {
    /// Check a word and classify the result.
    fn spell(&self, word: &[u8]) -> SpellResult;

    /// Check whether the word is spelled correctly.
    fn lookup(&self, word: &[u8]) -> bool {
        self.spell(word) == SpellResult::Ok
    }
}

impl Speller for Dictionary {
    /// Binary search for the word's folded key, then try every entry in the
    /// equal-key run until one accepts the word's capitalization.
    fn spell(&self, word: &[u8]) -> SpellResult {
        let key = fold(word);
        let candidates = self.candidates(&key);
        if candidates.is_empty() {
            return SpellResult::Failed;
        }

        if candidates
            .iter()
            .any(|entry| is_valid_capitalization(entry.original(), word))
        {
            SpellResult::Ok
        } else {
            SpellResult::CapitalizationError
        }
    }
}
