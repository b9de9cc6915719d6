// Bounded memo of spell results for short words

use hashbrown::HashMap;

use crate::speller::SpellResult;

/// Maximum word length, in bytes, that is cached.
const MAX_CACHED_WORD_LEN: usize = 32;

/// Default number of cached words.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// A bounded cache of spell results keyed by the word as typed.
///
/// The key is the exact spelling, not the folded key: two spellings that
/// fold together may still get different results. When the cache is full
/// it is cleared wholesale rather than evicting single entries. A capacity
/// of zero disables caching.
#[derive(Debug, Clone)]
pub struct SpellerCache {
    capacity: usize,
    results: HashMap<Vec<u8>, SpellResult>,
}

impl SpellerCache {
    /// Create a cache holding at most `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            results: HashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
        }
    }

    /// Get the cached result for a word, if any.
    pub fn get(&self, word: &[u8]) -> Option<SpellResult> {
        self.results.get(word).copied()
    }

    /// Store the result for a word.
    ///
    /// Words longer than 32 bytes are silently ignored.
    pub fn insert(&mut self, word: &[u8], result: SpellResult) {
        if self.capacity == 0 || word.len() > MAX_CACHED_WORD_LEN {
            return;
        }
        if self.results.len() >= self.capacity && !self.results.contains_key(word) {
            log::trace!("speller cache full ({} words), clearing", self.results.len());
            self.results.clear();
        }
        self.results.insert(word.to_vec(), result);
    }

    /// Number of cached words.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Drop every cached result.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}

impl Default for SpellerCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
