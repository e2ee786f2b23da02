use bytes::Bytes;
use lru::LruCache;
use std::num::NonZeroUsize;

use crate::speech::SpeechRequest;

/// Default number of synthesized clips kept per session.
pub const DEFAULT_CAPACITY: usize = 32;

/// In-memory memoization of synthesized audio, keyed by `(text, lang_code)`.
///
/// Entries are evicted least-recently-used first once `capacity` is reached.
/// A capacity of zero disables caching.
#[derive(Debug)]
pub struct SpeechCache {
    // None when caching is disabled
    entries: Option<LruCache<String, Bytes>>,
}

impl SpeechCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    pub fn get(&mut self, request: &SpeechRequest) -> Option<Bytes> {
        let entries = self.entries.as_mut()?;
        entries.get(&request.cache_key()).cloned()
    }

    pub fn put(&mut self, request: &SpeechRequest, audio: Bytes) {
        if let Some(entries) = self.entries.as_mut() {
            entries.put(request.cache_key(), audio);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.as_ref().map_or(0, |entries| entries.cap().get())
    }
}

impl Default for SpeechCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
