// Sorted, case-preserving word list.
//
// Entries are kept in a single vector sorted by their folded key so that a
// lookup is one binary search followed by a scan over the run of entries
// sharing that key. The dictionary is never mutated after construction.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use spell_core::MAX_WORD_BYTES;
use spell_core::character::fold;

use crate::SpellError;

/// One accepted spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    original: Vec<u8>,
    folded_key: Vec<u8>,
}

impl DictionaryEntry {
    /// Create an entry, computing its folded key from `original`.
    pub fn new(original: impl Into<Vec<u8>>) -> Self {
        let original = original.into();
        let folded_key = fold(&original);
        Self {
            original,
            folded_key,
        }
    }

    /// The spelling exactly as it appeared in the word list.
    pub fn original(&self) -> &[u8] {
        &self.original
    }

    /// The ASCII-lowercased search key.
    pub fn folded_key(&self) -> &[u8] {
        &self.folded_key
    }
}

/// An immutable word list sorted by folded key.
///
/// Equal keys keep their load order. Duplicate lines are kept as separate
/// entries; they cost memory but never change a lookup result.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Build a dictionary from in-memory records.
    ///
    /// Empty records are skipped and records longer than
    /// [`MAX_WORD_BYTES`] are truncated.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let entries = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref();
                if w.is_empty() {
                    None
                } else {
                    Some(DictionaryEntry::new(&w[..w.len().min(MAX_WORD_BYTES)]))
                }
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Build a dictionary from a byte stream with one word per record.
    ///
    /// Both `\n` and `\r` terminate a record, so `\r\n` line endings work.
    /// Everything else, including internal spaces, is part of the word.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut reader = BufReader::new(reader);
        let mut entries = Vec::new();
        let mut word: Vec<u8> = Vec::with_capacity(MAX_WORD_BYTES);

        loop {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                break;
            }
            for &b in buf {
                if b == b'\n' || b == b'\r' {
                    if !word.is_empty() {
                        entries.push(DictionaryEntry::new(std::mem::take(&mut word)));
                    }
                } else if word.len() < MAX_WORD_BYTES {
                    word.push(b);
                }
            }
            let consumed = buf.len();
            reader.consume(consumed);
        }

        if !word.is_empty() {
            entries.push(DictionaryEntry::new(word));
        }

        Ok(Self::from_entries(entries))
    }

    /// Load a dictionary from a word-list file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SpellError> {
        let path = path.as_ref();
        let unreadable = |source| SpellError::DictionaryUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unreadable)?;
        let dictionary = Self::from_reader(file).map_err(unreadable)?;
        log::debug!(
            "loaded {} dictionary entries from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    fn from_entries(mut entries: Vec<DictionaryEntry>) -> Self {
        // `sort_by` is stable: equal keys stay in load order.
        entries.sort_by(|a, b| a.folded_key.cmp(&b.folded_key));
        Self { entries }
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the word list had no non-empty records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in sorted order.
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// The contiguous run of entries whose folded key equals `folded_key`.
    ///
    /// Returns an empty slice when no entry has that key.
    pub fn candidates(&self, folded_key: &[u8]) -> &[DictionaryEntry] {
        let start = self
            .entries
            .partition_point(|e| e.folded_key.as_slice() < folded_key);
        let len = self.entries[start..]
            .iter()
            .take_while(|e| e.folded_key == folded_key)
            .count();
        &self.entries[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(dict: &Dictionary) -> Vec<&[u8]> {
        dict.entries().iter().map(|e| e.original()).collect()
    }

    #[test]
    fn entry_folds_key_once() {
        let entry = DictionaryEntry::new("McDonald");
        assert_eq!(entry.original(), b"McDonald");
        assert_eq!(entry.folded_key(), b"mcdonald");
    }

    #[test]
    fn from_words_sorts_by_folded_key() {
        let dict = Dictionary::from_words(["banana", "Apple", "cherry"]);
        assert_eq!(originals(&dict), vec![&b"Apple"[..], b"banana", b"cherry"]);
    }

    #[test]
    fn equal_keys_keep_load_order() {
        let dict = Dictionary::from_words(["us", "zebra", "US", "Us"]);
        assert_eq!(originals(&dict), vec![&b"us"[..], b"US", b"Us", b"zebra"]);
    }

    #[test]
    fn from_words_skips_empty_records() {
        let dict = Dictionary::from_words(["", "word", ""]);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn from_reader_handles_lf_and_crlf() {
        let dict = Dictionary::from_reader(&b"one\r\ntwo\nthree\r\n\n"[..]).unwrap();
        assert_eq!(originals(&dict), vec![&b"one"[..], b"three", b"two"]);
    }

    #[test]
    fn from_reader_keeps_last_record_without_newline() {
        let dict = Dictionary::from_reader(&b"alpha\nbeta"[..]).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.candidates(b"beta").len(), 1);
    }

    #[test]
    fn from_reader_preserves_internal_whitespace() {
        let dict = Dictionary::from_reader(&b"New York\n"[..]).unwrap();
        assert_eq!(originals(&dict), vec![&b"New York"[..]]);
    }

    #[test]
    fn from_reader_truncates_long_records() {
        let mut data = vec![b'a'; MAX_WORD_BYTES + 20];
        data.push(b'\n');
        let dict = Dictionary::from_reader(data.as_slice()).unwrap();
        assert_eq!(dict.entries()[0].original().len(), MAX_WORD_BYTES);
    }

    #[test]
    fn from_reader_empty_source() {
        let dict = Dictionary::from_reader(&b""[..]).unwrap();
        assert!(dict.is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let dict = Dictionary::from_words(["word", "word"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.candidates(b"word").len(), 2);
    }

    #[test]
    fn candidates_returns_whole_run() {
        let dict = Dictionary::from_words(["a", "Polish", "b", "polish", "POLISH", "z"]);
        let run: Vec<&[u8]> = dict
            .candidates(b"polish")
            .iter()
            .map(|e| e.original())
            .collect();
        assert_eq!(run, vec![&b"Polish"[..], b"polish", b"POLISH"]);
    }

    #[test]
    fn candidates_missing_key_is_empty() {
        let dict = Dictionary::from_words(["alpha", "gamma"]);
        assert!(dict.candidates(b"beta").is_empty());
        assert!(dict.candidates(b"zzz").is_empty());
        assert!(Dictionary::default().candidates(b"alpha").is_empty());
    }

    #[test]
    fn sortedness_holds_after_build() {
        let dict = Dictionary::from_words(["delta", "Alpha", "charlie", "Bravo", "alpha"]);
        assert!(
            dict.entries()
                .windows(2)
                .all(|w| w[0].folded_key() <= w[1].folded_key())
        );
    }

    #[test]
    fn load_missing_file_is_unreadable() {
        let err = Dictionary::load("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, SpellError::DictionaryUnreadable { .. }));
        assert!(err.to_string().contains("/nonexistent/words.txt"));
    }
}
