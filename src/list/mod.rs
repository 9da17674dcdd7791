//! Expiring List Module
//!
//! Sequence containers whose elements expire a fixed time after insertion.
//! Expired elements are purged lazily: every public operation except
//! [`ExpiringList::len`] and [`ExpiringList::is_empty`] runs a purge pass
//! first, then performs the requested action. There is no background timer.
//!
//! Two backings implement the same contract and behave identically:
//! [`ArrayExpiringList`] (contiguous storage) and [`LinkedExpiringList`]
//! (circular ring with a sentinel node).
//!
//! Neither backing is synchronized; callers sharing a list across threads
//! must wrap it in a lock.

mod array;
mod clock;
mod cursor;
mod entry;
mod linked;


// Re-export public types
pub use array::ArrayExpiringList;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use cursor::Cursor;
pub use entry::TimedEntry;
pub use linked::LinkedExpiringList;

use crate::error::Result;

// == Public Constants ==
/// Lifetime used when a list is created without one
pub const DEFAULT_LIFETIME_MS: u64 = 60_000;

// == Expiring List Trait ==
/// The list contract shared by both backings.
///
/// Value comparisons use `PartialEq`; a list of `Option<T>` therefore treats
/// `None` as its own equality class.
pub trait ExpiringList {
    /// Type of the stored values.
    type Item;

    /// Lifetime, in milliseconds, given to every inserted entry.
    fn lifetime_ms(&self) -> u64;

    /// Number of entries as of the last purging operation.
    ///
    /// Does not purge, so it may count entries that have since expired.
    fn len(&self) -> usize;

    /// Returns true if [`ExpiringList::len`] is zero. Does not purge.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every expired entry, returning how many were removed.
    fn purge(&mut self) -> usize;

    /// Appends a value at the end of the list.
    fn push(&mut self, value: Self::Item);

    /// Inserts a value at `index`, shifting later entries right.
    ///
    /// Fails with `OutOfRange` unless `index <= len()` after purging.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<()>;

    /// Removes and returns the value at `index`, shifting later entries left.
    ///
    /// Fails with `OutOfRange` unless `index < len()` after purging.
    fn remove(&mut self, index: usize) -> Result<Self::Item>;

    /// Removes the first entry equal to `value`.
    ///
    /// Returns whether an entry was removed; a missing value is not an error.
    fn remove_item(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Returns true if a live entry equals `value`.
    fn contains(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Returns the value at `index`.
    fn get(&mut self, index: usize) -> Result<&Self::Item>;

    /// Returns a cursor positioned before the first entry.
    fn cursor(&mut self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, 0)
    }

    /// Returns a cursor whose first `try_next` reads the entry at `index`.
    fn cursor_at(&mut self, index: usize) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self, index)
    }
}
