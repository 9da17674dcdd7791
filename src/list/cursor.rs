//! Cursor Module
//!
//! Stateful iteration over one expiring list.

use crate::error::{ListError, Result};
use crate::list::ExpiringList;

// == Cursor ==
/// Forward cursor bound to a single list.
///
/// [`Cursor::has_next`] compares the position against the list's last
/// purged size and never purges, so repeated checks are cheap but may be
/// stale. [`Cursor::try_next`] purges before reading. When entries expire
/// between the two calls, `has_next` can report `true` and the following
/// `try_next` fail with `IterationExhausted`.
///
/// As an [`Iterator`] the cursor yields `Err` once on exhaustion and then
/// stops.
#[derive(Debug)]
pub struct Cursor<'a, L> {
    list: &'a mut L,
    /// Index of the next entry to read
    cursor: usize,
    /// Index of the entry most recently returned
    last_returned: Option<usize>,
    /// Set after an exhaustion error has been yielded by `Iterator::next`
    fused: bool,
}

impl<'a, L: ExpiringList> Cursor<'a, L> {
    /// Creates a cursor whose first read is the entry at `start`.
    pub fn new(list: &'a mut L, start: usize) -> Self {
        Self {
            list,
            cursor: start,
            last_returned: None,
            fused: false,
        }
    }

    /// Returns true while the position differs from the list's current
    /// size. Does not purge.
    pub fn has_next(&self) -> bool {
        self.cursor != self.list.len()
    }

    /// Purges the list, then reads the entry at the current position and
    /// advances past it.
    pub fn try_next(&mut self) -> Result<L::Item>
    where
        L::Item: Clone,
    {
        let index = self.cursor;
        let value = match self.list.get(index) {
            Ok(value) => value.clone(),
            Err(ListError::OutOfRange { .. }) => {
                return Err(ListError::IterationExhausted(index));
            }
            Err(err) => return Err(err),
        };
        self.last_returned = Some(index);
        self.cursor = index + 1;
        Ok(value)
    }

    /// Index of the next entry to read.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Index of the entry most recently returned, if any.
    pub fn last_returned(&self) -> Option<usize> {
        self.last_returned
    }
}

impl<L> Iterator for Cursor<'_, L>
where
    L: ExpiringList,
    L::Item: Clone,
{
    type Item = Result<L::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused || !self.has_next() {
            return None;
        }
        let result = self.try_next();
        if result.is_err() {
            self.fused = true;
        }
        Some(result)
    }
}
