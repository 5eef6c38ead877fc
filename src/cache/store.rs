use std::{
    collections::HashSet,
    num::NonZeroUsize,
    sync::{Arc, Condvar, Mutex, MutexGuard},
};

use lru::LruCache;

use crate::{
    foundation::core::ConversionResult,
    pipeline::convert::{ConvertOptions, convert_gif},
};

/// Default number of conversions kept resident.
pub const DEFAULT_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(5).unwrap();

struct Inner {
    results: LruCache<String, Arc<ConversionResult>>,
    in_flight: HashSet<String>,
}

/// Bounded, process-wide store of finished conversions.
///
/// Recency is tracked structurally by the LRU list, so eviction needs no
/// clock; capacity is fixed at construction. Entries live until evicted by
/// capacity pressure or process restart; source assets are treated as
/// immutable for the process lifetime, so there is no invalidation
/// operation.
///
/// Concurrent requests for the same uncached key collapse onto a single
/// conversion: followers block until the leader publishes or fails.
pub struct AnimationCache {
    inner: Mutex<Inner>,
    done: Condvar,
}

impl AnimationCache {
    /// Create a cache holding at most `capacity` conversions.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                results: LruCache::new(capacity),
                in_flight: HashSet::new(),
            }),
            done: Condvar::new(),
        }
    }

    /// Fetch the conversion for `key`, running the pipeline on a miss.
    ///
    /// `lookup` resolves the raw source bytes; `None` means "no such
    /// source", an expected outcome that is never treated as an error.
    /// Decode and render failures are logged and collapse to `None` as
    /// well, and nothing partial is ever cached, so callers only observe
    /// presence or absence of a complete result.
    pub fn get_or_convert<F>(
        &self,
        key: &str,
        lookup: F,
        options: &ConvertOptions,
    ) -> Option<Arc<ConversionResult>>
    where
        F: FnOnce() -> Option<Vec<u8>>,
    {
        let mut inner = self.lock();
        loop {
            if let Some(hit) = inner.results.get(key) {
                return Some(Arc::clone(hit));
            }
            if !inner.in_flight.contains(key) {
                break;
            }
            // A leader is already converting this key; wait for it to
            // publish (or fail) before re-checking.
            inner = self.done.wait(inner).unwrap_or_else(|e| e.into_inner());
        }
        inner.in_flight.insert(key.to_owned());
        drop(inner);

        let result = run_pipeline(key, lookup, options);

        let mut inner = self.lock();
        inner.in_flight.remove(key);
        if let Some(result) = &result {
            inner.results.put(key.to_owned(), Arc::clone(result));
        }
        drop(inner);
        self.done.notify_all();
        result
    }

    /// Number of conversions currently resident.
    pub fn len(&self) -> usize {
        self.lock().results.len()
    }

    /// Whether the cache holds no conversions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `key` is resident, without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().results.contains(key)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for AnimationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

fn run_pipeline<F>(key: &str, lookup: F, options: &ConvertOptions) -> Option<Arc<ConversionResult>>
where
    F: FnOnce() -> Option<Vec<u8>>,
{
    let Some(bytes) = lookup() else {
        tracing::debug!(key, "no source for key");
        return None;
    };
    match convert_gif(&bytes, options) {
        Ok(Some(result)) => Some(Arc::new(result)),
        Ok(None) => {
            tracing::debug!(key, "source holds no frames");
            None
        }
        Err(err) => {
            tracing::warn!(key, %err, "conversion failed");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/store.rs"]
mod tests;
