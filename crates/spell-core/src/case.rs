// Case pattern detection for whole words.

use crate::character::{is_lower, is_upper};

/// Classification of letter casing within a word.
///
/// Non-letters (digits, punctuation, non-ASCII bytes) never influence the
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word: "123", "--".
    NoLetters,
    /// All letters are lowercase: "hello".
    AllLower,
    /// First byte is an uppercase letter, remaining letters lowercase: "Paris".
    FirstUpper,
    /// Any other mix of upper and lower case: "McDonald", "iPhone".
    Complex,
    /// All letters are uppercase: "NASA", "CO-OP".
    AllUpper,
}

impl CaseType {
    /// True when the word has at least one lowercase and at least one
    /// uppercase letter.
    pub fn is_mixed(self) -> bool {
        matches!(self, CaseType::FirstUpper | CaseType::Complex)
    }

    /// True when the word contains no lowercase letter.
    ///
    /// A word without letters counts as all uppercase.
    pub fn is_all_upper(self) -> bool {
        matches!(self, CaseType::AllUpper | CaseType::NoLetters)
    }
}

/// Detect the case pattern of a word.
pub fn detect_case(word: &[u8]) -> CaseType {
    let Some((&first, rest)) = word.split_first() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for &b in rest {
        if is_upper(b) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(b) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_empty() {
        assert_eq!(detect_case(b""), CaseType::NoLetters);
    }

    #[test]
    fn detect_no_letters() {
        assert_eq!(detect_case(b"123"), CaseType::NoLetters);
        assert_eq!(detect_case(b"..."), CaseType::NoLetters);
    }

    #[test]
    fn detect_all_lower() {
        assert_eq!(detect_case(b"hello"), CaseType::AllLower);
        assert_eq!(detect_case(b"co-op"), CaseType::AllLower);
        assert_eq!(detect_case(b"a"), CaseType::AllLower);
    }

    #[test]
    fn detect_first_upper() {
        assert_eq!(detect_case(b"Paris"), CaseType::FirstUpper);
        assert_eq!(detect_case(b"Hello"), CaseType::FirstUpper);
    }

    #[test]
    fn detect_all_upper() {
        assert_eq!(detect_case(b"FRANCE"), CaseType::AllUpper);
        assert_eq!(detect_case(b"EIFFEL-TOWER"), CaseType::AllUpper);
        assert_eq!(detect_case(b"I"), CaseType::AllUpper);
    }

    #[test]
    fn detect_complex() {
        assert_eq!(detect_case(b"McDonald"), CaseType::Complex);
        assert_eq!(detect_case(b"iPhone"), CaseType::Complex);
        assert_eq!(detect_case(b"Eiffel-Tower"), CaseType::Complex);
    }

    #[test]
    fn detect_with_leading_punctuation() {
        // A leading non-letter never counts as the "first upper" letter.
        assert_eq!(detect_case(b"-Ab"), CaseType::Complex);
        assert_eq!(detect_case(b"-ab"), CaseType::AllLower);
        assert_eq!(detect_case(b"-AB"), CaseType::AllUpper);
    }

    #[test]
    fn detect_with_digits() {
        assert_eq!(detect_case(b"abc123"), CaseType::AllLower);
        assert_eq!(detect_case(b"ABC123"), CaseType::AllUpper);
        assert_eq!(detect_case(b"Abc123"), CaseType::FirstUpper);
    }

    #[test]
    fn mixed_means_both_cases_present() {
        assert!(detect_case(b"Paris").is_mixed());
        assert!(detect_case(b"McDonald").is_mixed());
        assert!(!detect_case(b"paris").is_mixed());
        assert!(!detect_case(b"PARIS").is_mixed());
        assert!(!detect_case(b"42").is_mixed());
    }

    #[test]
    fn all_upper_ignores_non_letters() {
        assert!(detect_case(b"CO-OP").is_all_upper());
        assert!(detect_case(b"--").is_all_upper());
        assert!(!detect_case(b"Co-OP").is_all_upper());
    }
}
