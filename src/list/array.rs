//! Array-Backed List Module
//!
//! Expiring list stored in one contiguous, amortized-growth buffer.

use tracing::debug;

use crate::error::{ListError, Result};
use crate::list::{Clock, ExpiringList, SystemClock, TimedEntry, DEFAULT_LIFETIME_MS};

/// Capacity reserved by a freshly created list
const INITIAL_CAPACITY: usize = 10;

// == Array Expiring List ==
/// Expiring list over a contiguous buffer.
///
/// Positional inserts and removals shift the tail of the buffer. The buffer
/// grows by roughly 1.5x whenever it is full.
#[derive(Debug)]
pub struct ArrayExpiringList<T, C = SystemClock> {
    /// Live entries in list order
    entries: Vec<TimedEntry<T>>,
    /// Lifetime given to each inserted entry
    lifetime_ms: u64,
    /// Time source for stamping and purging
    clock: C,
}

impl<T> ArrayExpiringList<T> {
    // == Constructors ==
    /// Creates a list with the default 60 second lifetime.
    pub fn new() -> Self {
        Self::with_lifetime(DEFAULT_LIFETIME_MS)
    }

    /// Creates a list whose entries live for `lifetime_ms`.
    pub fn with_lifetime(lifetime_ms: u64) -> Self {
        Self::with_clock(lifetime_ms, SystemClock)
    }
}

impl<T> Default for ArrayExpiringList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> ArrayExpiringList<T, C> {
    /// Creates a list reading time from `clock`.
    pub fn with_clock(lifetime_ms: u64, clock: C) -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            lifetime_ms,
            clock,
        }
    }

    /// Returns the number of entries the buffer holds before it must grow.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    fn stamp(&self, value: T) -> TimedEntry<T> {
        TimedEntry::new(value, self.clock.now_ms(), self.lifetime_ms)
    }

    // == Growth ==
    /// Grows the buffer to `max(capacity * 3 / 2 + 1, min_capacity)`.
    fn ensure_capacity(&mut self, min_capacity: usize) {
        let old_capacity = self.entries.capacity();
        if min_capacity > old_capacity {
            let new_capacity = (old_capacity * 3 / 2 + 1).max(min_capacity);
            self.entries.reserve_exact(new_capacity - self.entries.len());
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.entries.len() {
            return Err(ListError::OutOfRange {
                index,
                size: self.entries.len(),
            });
        }
        Ok(())
    }

    fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.entries.iter().position(|entry| entry.value() == value)
    }
}

impl<T, C: Clock> ExpiringList for ArrayExpiringList<T, C> {
    type Item = T;

    fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    // == Purge ==
    // Single scan from the front. A positional insert can place a younger
    // entry ahead of older ones, so the whole buffer is examined.
    fn purge(&mut self) -> usize {
        let now = self.clock.now_ms();
        let before = self.entries.len();
        self.entries.retain(|entry| entry.is_alive_at(now));

        let removed = before - self.entries.len();
        if removed > 0 {
            debug!("Purged {} expired entries from array list", removed);
        }
        removed
    }

    fn push(&mut self, value: T) {
        self.purge();
        let entry = self.stamp(value);
        self.ensure_capacity(self.entries.len() + 1);
        self.entries.push(entry);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.purge();
        if index > self.entries.len() {
            return Err(ListError::OutOfRange {
                index,
                size: self.entries.len(),
            });
        }
        let entry = self.stamp(value);
        self.ensure_capacity(self.entries.len() + 1);
        self.entries.insert(index, entry);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.purge();
        self.check_index(index)?;
        Ok(self.entries.remove(index).into_value())
    }

    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.purge();
        match self.position_of(value) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.purge();
        self.position_of(value).is_some()
    }

    fn get(&mut self, index: usize) -> Result<&T> {
        self.purge();
        self.check_index(index)?;
        Ok(self.entries[index].value())
    }
}
