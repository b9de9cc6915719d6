// Capitalization compatibility between a dictionary spelling and a typed word

use spell_core::case::detect_case;
use spell_core::character::{is_alpha, is_upper};

/// Check whether `input_word` is an acceptable capitalization of
/// `dict_word`.
///
/// Rules:
/// - A mixed-case dictionary word ("McDonald", "Paris") never accepts an
///   input whose letters are all uppercase ("MCDONALD", "PARIS").
/// - Non-letters must be the same byte at the same position.
/// - Letters must match ignoring case.
/// - An uppercase dictionary letter requires an uppercase input letter;
///   a lowercase dictionary letter accepts either case.
///
/// Words of different lengths are never compatible.
pub fn is_valid_capitalization(dict_word: &[u8], input_word: &[u8]) -> bool {
    if dict_word.len() != input_word.len() {
        return false;
    }

    if detect_case(dict_word).is_mixed() && detect_case(input_word).is_all_upper() {
        return false;
    }

    dict_word.iter().zip(input_word).all(|(&d, &inp)| {
        if !is_alpha(d) {
            return d == inp;
        }
        d.eq_ignore_ascii_case(&inp) && (!is_upper(d) || is_upper(inp))
    })
}
