//! Timed Entry Module
//!
//! Defines the wrapper pairing a stored value with its expiry timestamp.

use crate::list::Timestamp;

// == Timed Entry ==
/// A list element stamped with an absolute expiry time at insertion.
///
/// The expiry time is fixed at construction and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry<T> {
    value: T,
    expires_at: Timestamp,
}

impl<T> TimedEntry<T> {
    // == Constructor ==
    /// Creates an entry inserted at `now` that lives for `lifetime_ms`.
    pub fn new(value: T, now: Timestamp, lifetime_ms: u64) -> Self {
        Self {
            value,
            expires_at: now.saturating_add(lifetime_ms),
        }
    }

    /// Returns a reference to the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the entry, returning the stored value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the absolute expiry timestamp in milliseconds.
    pub fn expires_at(&self) -> Timestamp {
        self.expires_at
    }

    // == Expiry Policy ==
    /// Checks whether the entry is still alive at `now`.
    ///
    /// The boundary is inclusive: an entry is alive while
    /// `now <= expires_at` and expired only once `now > expires_at`.
    pub fn is_alive_at(&self, now: Timestamp) -> bool {
        now <= self.expires_at
    }

    /// Negation of [`TimedEntry::is_alive_at`].
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        !self.is_alive_at(now)
    }

    /// Returns the remaining lifetime in milliseconds, or 0 once expired.
    pub fn ttl_remaining_ms(&self, now: Timestamp) -> u64 {
        self.expires_at.saturating_sub(now)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_expiry_is_insertion_plus_lifetime() {
        let entry = TimedEntry::new("value", 1_000, 250);

        assert_eq!(*entry.value(), "value");
        assert_eq!(entry.expires_at(), 1_250);
    }

    #[test]
    fn test_expiration_boundary_is_inclusive() {
        let entry = TimedEntry::new(1, 0, 100);

        assert!(entry.is_alive_at(99));
        assert!(entry.is_alive_at(100), "Entry should be alive at its expiry instant");
        assert!(entry.is_expired_at(101));
    }

    #[test]
    fn test_zero_lifetime_lives_for_its_insertion_instant() {
        let entry = TimedEntry::new('x', 42, 0);

        assert!(entry.is_alive_at(42));
        assert!(entry.is_expired_at(43));
    }

    #[test]
    fn test_expiry_saturates() {
        let entry = TimedEntry::new((), u64::MAX - 1, 10);
        assert_eq!(entry.expires_at(), u64::MAX);
        assert!(entry.is_alive_at(u64::MAX));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = TimedEntry::new("v", 0, 1_000);

        assert_eq!(entry.ttl_remaining_ms(0), 1_000);
        assert_eq!(entry.ttl_remaining_ms(400), 600);
        assert_eq!(entry.ttl_remaining_ms(5_000), 0);
    }

    #[test]
    fn test_into_value() {
        let entry = TimedEntry::new(String::from("owned"), 0, 1);
        assert_eq!(entry.into_value(), "owned");
    }
}
