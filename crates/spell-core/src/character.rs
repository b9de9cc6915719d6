// ASCII character classification and case folding.
//
// Folding is deliberately ASCII-only: the same `fold` is used when the
// dictionary is built and when a token is looked up, and both sides must
// agree byte for byte.

/// Check whether a byte is a whitespace delimiter.
///
/// This is the C `isspace` set, which unlike `u8::is_ascii_whitespace`
/// includes the vertical tab.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Check whether a byte is an ASCII letter.
pub fn is_alpha(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Check whether a byte is an ASCII letter or digit.
pub fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Check whether a byte is an uppercase ASCII letter.
pub fn is_upper(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Check whether a byte is a lowercase ASCII letter.
pub fn is_lower(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Check whether a word contains at least one letter.
pub fn has_letter(word: &[u8]) -> bool {
    word.iter().any(|&b| is_alpha(b))
}

/// Fold a word to its lookup key: ASCII letters lowercased, all other
/// bytes unchanged. The result has the same length as the input.
pub fn fold(word: &[u8]) -> Vec<u8> {
    word.to_ascii_lowercase()
}
