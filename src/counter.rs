//! Pattern 1: Shared State Behind One Lock
//!
//! A keyed tally that any number of threads may hit at once. The map
//! lives behind a single `Mutex`; the lock guard's scope is the whole
//! operation, so every exit path releases the lock.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A thread-safe keyed counter. Clone an `Arc<SafeCounter>` into as many
/// threads as you like; all operations serialize through one lock.
#[derive(Debug, Default)]
pub struct SafeCounter {
    counts: Mutex<HashMap<String, u64>>,
}

impl SafeCounter {
    pub fn new() -> Self {
        SafeCounter {
            counts: Mutex::new(HashMap::new()),
        }
    }

    /// Adds 1 to the count for `key`. Missing keys start at zero.
    pub fn increment(&self, key: &str) {
        let mut counts = self.lock_counts();
        *counts.entry(key.to_owned()).or_insert(0) += 1;
    }

    /// Current count for `key`; 0 if the key was never incremented.
    /// Reads never mutate the map.
    pub fn get(&self, key: &str) -> u64 {
        self.lock_counts().get(key).copied().unwrap_or(0)
    }

    fn lock_counts(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        // A tally survives a panicking holder intact, so recover from
        // poisoning instead of propagating it.
        self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
