// Token cleaning: strip surrounding punctuation, skip non-words

use spell_core::character::{has_letter, is_alnum};

/// Opening punctuation stripped from the front of a token.
pub const LEADING_PUNCTUATION: &[u8] = b"([{'\"";

/// Reduce a raw token to the word that is looked up, or `None` to skip it.
///
/// 1. Tokens without any ASCII letter (numbers, symbols) are skipped.
/// 2. Leading `(`, `[`, `{`, `'` and `"` are stripped.
/// 3. Trailing bytes that are not ASCII letters or digits are stripped.
/// 4. A result that is empty or has no letter left is skipped.
///
/// Punctuation inside the word (apostrophes, hyphens) is kept and must
/// match the dictionary literally.
pub fn clean(raw: &[u8]) -> Option<&[u8]> {
    if raw.is_empty() || !has_letter(raw) {
        return None;
    }

    let start = raw
        .iter()
        .position(|b| !LEADING_PUNCTUATION.contains(b))
        .unwrap_or(raw.len());
    let word = &raw[start..];

    let end = word
        .iter()
        .rposition(|&b| is_alnum(b))
        .map_or(0, |i| i + 1);
    let word = &word[..end];

    if word.is_empty() || !has_letter(word) {
        return None;
    }
    Some(word)
}
