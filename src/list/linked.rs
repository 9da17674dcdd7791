//! Linked List Module
//!
//! Expiring list stored as a circular doubly linked ring with one sentinel.
//!
//! Nodes live in an arena and link to each other by slot index, so the ring
//! needs no reference cycles. Slot 0 is the sentinel: it never holds an
//! entry, its successor is the head and its predecessor is the tail. Freed
//! slots are recycled through a free list.

use tracing::debug;

use crate::error::{ListError, Result};
use crate::list::{Clock, ExpiringList, SystemClock, TimedEntry, DEFAULT_LIFETIME_MS};

/// Arena slot of the sentinel node.
const SENTINEL: usize = 0;

/// A ring node. `entry` is `None` for the sentinel and for freed slots.
#[derive(Debug)]
struct Node<T> {
    entry: Option<TimedEntry<T>>,
    prev: usize,
    next: usize,
}

// == Linked Expiring List ==
/// Expiring list over a sentinel-headed circular ring.
///
/// Appends and unlinks are O(1); positional lookups walk from whichever end
/// of the ring is closer.
#[derive(Debug)]
pub struct LinkedExpiringList<T, C = SystemClock> {
    /// Node arena, sentinel at slot 0
    nodes: Vec<Node<T>>,
    /// Slots available for reuse
    free: Vec<usize>,
    /// Number of linked entries
    size: usize,
    /// Lifetime given to each inserted entry
    lifetime_ms: u64,
    /// Time source for stamping and purging
    clock: C,
}

impl<T> LinkedExpiringList<T> {
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

impl<T> Default for LinkedExpiringList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Clock> LinkedExpiringList<T, C> {
    /// Creates a list reading time from `clock`.
    pub fn with_clock(lifetime_ms: u64, clock: C) -> Self {
        let sentinel = Node {
            entry: None,
            prev: SENTINEL,
            next: SENTINEL,
        };
        Self {
            nodes: vec![sentinel],
            free: Vec::new(),
            size: 0,
            lifetime_ms,
            clock,
        }
    }

    fn stamp(&self, value: T) -> TimedEntry<T> {
        TimedEntry::new(value, self.clock.now_ms(), self.lifetime_ms)
    }

    // == Ring Operations ==

    /// Stores `entry` in a free or new slot and returns the slot index.
    fn alloc(&mut self, entry: TimedEntry<T>) -> usize {
        let node = Node {
            entry: Some(entry),
            prev: SENTINEL,
            next: SENTINEL,
        };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Links a new node holding `entry` immediately before `at`.
    fn link_before(&mut self, entry: TimedEntry<T>, at: usize) {
        let slot = self.alloc(entry);
        let prev = self.nodes[at].prev;

        self.nodes[slot].prev = prev;
        self.nodes[slot].next = at;
        self.nodes[prev].next = slot;
        self.nodes[at].prev = slot;
        self.size += 1;
    }

    /// Detaches the node at `slot` and returns its entry.
    ///
    /// Fails with `NotFound` for the sentinel or a slot holding no entry.
    fn unlink(&mut self, slot: usize) -> Result<TimedEntry<T>> {
        if slot == SENTINEL {
            return Err(ListError::NotFound("sentinel node".to_string()));
        }
        let entry = self
            .nodes
            .get_mut(slot)
            .and_then(|node| node.entry.take())
            .ok_or_else(|| ListError::NotFound(format!("slot {}", slot)))?;

        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[slot].prev = SENTINEL;
        self.nodes[slot].next = SENTINEL;
        self.free.push(slot);
        self.size -= 1;
        Ok(entry)
    }

    /// Finds the slot holding the entry at `index`.
    ///
    /// Walks forward from the sentinel for the first half of the list and
    /// backward for the second half.
    fn slot_at(&self, index: usize) -> Result<usize> {
        if index >= self.size {
            return Err(ListError::OutOfRange {
                index,
                size: self.size,
            });
        }
        let mut slot = SENTINEL;
        if index < (self.size >> 1) {
            for _ in 0..=index {
                slot = self.nodes[slot].next;
            }
        } else {
            for _ in index..self.size {
                slot = self.nodes[slot].prev;
            }
        }
        Ok(slot)
    }

    /// Finds the first slot, front to back, whose value equals `value`.
    fn slot_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut slot = self.nodes[SENTINEL].next;
        while slot != SENTINEL {
            let node = &self.nodes[slot];
            if node.entry.as_ref().is_some_and(|e| e.value() == value) {
                return Some(slot);
            }
            slot = node.next;
        }
        None
    }
}

impl<T, C: Clock> ExpiringList for LinkedExpiringList<T, C> {
    type Item = T;

    fn lifetime_ms(&self) -> u64 {
        self.lifetime_ms
    }

    fn len(&self) -> usize {
        self.size
    }

    // == Purge ==
    fn purge(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut removed = 0;
        let mut slot = self.nodes[SENTINEL].next;

        while slot != SENTINEL {
            let next = self.nodes[slot].next;
            let expired = self.nodes[slot]
                .entry
                .as_ref()
                .is_some_and(|e| e.is_expired_at(now));
            if expired && self.unlink(slot).is_ok() {
                removed += 1;
            }
            slot = next;
        }

        if removed > 0 {
            debug!("Purged {} expired entries from linked list", removed);
        }
        removed
    }

    fn push(&mut self, value: T) {
        self.purge();
        let entry = self.stamp(value);
        self.link_before(entry, SENTINEL);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.purge();
        let at = if index == self.size {
            SENTINEL
        } else {
            self.slot_at(index)?
        };
        let entry = self.stamp(value);
        self.link_before(entry, at);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        self.purge();
        let slot = self.slot_at(index)?;
        self.unlink(slot).map(TimedEntry::into_value)
    }

    fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.purge();
        match self.slot_of(value) {
            Some(slot) => self.unlink(slot).is_ok(),
            None => false,
        }
    }

    fn contains(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.purge();
        self.slot_of(value).is_some()
    }

    fn get(&mut self, index: usize) -> Result<&T> {
        self.purge();
        let slot = self.slot_at(index)?;
        self.nodes[slot]
            .entry
            .as_ref()
            .map(TimedEntry::value)
            .ok_or_else(|| ListError::NotFound(format!("slot {}", slot)))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ManualClock;
    use tokio_test::{assert_err, assert_ok};

    fn list_at(
        lifetime_ms: u64,
        start: u64,
    ) -> (LinkedExpiringList<&'static str, ManualClock>, ManualClock) {
        let clock = ManualClock::new(start);
        (LinkedExpiringList::with_clock(lifetime_ms, clock.clone()), clock)
    }

    /// Walks the ring both ways and checks the links agree with `size`.
    fn assert_ring_consistent<T, C: Clock>(list: &LinkedExpiringList<T, C>) {
        let mut forward = 0;
        let mut slot = list.nodes[SENTINEL].next;
        while slot != SENTINEL {
            assert_eq!(list.nodes[list.nodes[slot].next].prev, slot);
            forward += 1;
            slot = list.nodes[slot].next;
        }

        let mut backward = 0;
        let mut slot = list.nodes[SENTINEL].prev;
        while slot != SENTINEL {
            assert_eq!(list.nodes[list.nodes[slot].prev].next, slot);
            backward += 1;
            slot = list.nodes[slot].prev;
        }

        assert_eq!(forward, list.size);
        assert_eq!(backward, list.size);
    }

    #[test]
    fn test_new_list_is_empty_ring() {
        let list: LinkedExpiringList<i32> = LinkedExpiringList::new();
        assert_eq!(list.lifetime_ms(), DEFAULT_LIFETIME_MS);
        assert!(list.is_empty());
        assert_eq!(list.nodes[SENTINEL].next, SENTINEL);
        assert_eq!(list.nodes[SENTINEL].prev, SENTINEL);
    }

    #[test]
    fn test_push_appends_at_tail() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");
        list.push("b");
        list.push("c");

        assert_eq!(list.get(0), Ok(&"a"));
        assert_eq!(list.get(2), Ok(&"c"));
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_insert_before_index_and_at_end() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("x");
        list.push("y");

        assert_ok!(list.insert(1, "z"));
        assert_ok!(list.insert(3, "end"));
        assert_ok!(list.insert(0, "front"));
        assert_err!(list.insert(6, "nope"));

        let values: Vec<&str> = (0..list.len()).map(|i| *list.get(i).unwrap()).collect();
        assert_eq!(values, vec!["front", "x", "z", "y", "end"]);
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_slot_lookup_from_both_ends() {
        let (mut list, _clock) = list_at(1_000, 0);
        let values = ["a", "b", "c", "d", "e", "f", "g"];
        for v in values {
            list.push(v);
        }

        for (i, v) in values.iter().enumerate() {
            assert_eq!(list.get(i), Ok(v));
        }
        assert_eq!(list.get(7), Err(ListError::OutOfRange { index: 7, size: 7 }));
    }

    #[test]
    fn test_remove_by_index() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");
        list.push("b");
        list.push("c");

        assert_eq!(list.remove(2), Ok("c"));
        assert_eq!(list.remove(0), Ok("a"));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Ok(&"b"));
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");
        list.push("b");
        assert_eq!(list.nodes.len(), 3);

        assert_ok!(list.remove(0));
        list.push("c");
        assert_eq!(list.nodes.len(), 3);
        assert_eq!(list.get(0), Ok(&"b"));
        assert_eq!(list.get(1), Ok(&"c"));
    }

    #[test]
    fn test_unlink_sentinel_is_not_found() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");

        assert!(matches!(list.unlink(SENTINEL), Err(ListError::NotFound(_))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_unlink_freed_slot_is_not_found() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");

        assert_ok!(list.unlink(1));
        assert!(matches!(list.unlink(1), Err(ListError::NotFound(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_item_and_contains() {
        let (mut list, _clock) = list_at(1_000, 0);
        list.push("a");
        list.push("b");
        list.push("a");

        assert!(list.contains(&"b"));
        assert!(list.remove_item(&"a"));
        assert_eq!(list.get(0), Ok(&"b"));
        assert_eq!(list.get(1), Ok(&"a"));
        assert!(!list.remove_item(&"zzz"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_none_is_its_own_equality_class() {
        let clock = ManualClock::new(0);
        let mut list = LinkedExpiringList::with_clock(1_000, clock);
        list.push(Some("a"));

        assert!(!list.contains(&None));
        list.push(None);
        assert!(list.contains(&None));
        assert!(list.remove_item(&None));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_purge_unlinks_expired_nodes() {
        let (mut list, clock) = list_at(100, 0);
        list.push("a");
        clock.set(40);
        list.push("b");
        clock.set(80);
        list.push("c");

        clock.set(141);
        assert_eq!(list.purge(), 2);
        assert_eq!(list.get(0), Ok(&"c"));
        assert_ring_consistent(&list);

        clock.set(181);
        assert_eq!(list.get(0), Err(ListError::OutOfRange { index: 0, size: 0 }));
        assert_ring_consistent(&list);
    }

    #[test]
    fn test_len_does_not_purge() {
        let (mut list, clock) = list_at(100, 0);
        list.push("a");

        clock.set(150);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());

        assert!(!list.contains(&"a"));
        assert!(list.is_empty());
    }
}
