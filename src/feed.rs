//! Line Feed Module
//!
//! The shared list behind the HTTP board: raw lines are appended with a
//! fixed lifetime and rendered oldest first as a small HTML fragment.
//!
//! A feed is not synchronized. The HTTP layer owns exactly one instance and
//! guards it with a mutex.

use tracing::debug;

use crate::error::Result;
use crate::list::{Clock, ExpiringList, LinkedExpiringList, SystemClock};

/// Lifetime of a posted line when none is configured
pub const DEFAULT_LINE_LIFETIME_MS: u64 = 10_000;

const PAGE_OPEN: &str = "<h1><pre>";
const PAGE_CLOSE: &str = "</pre></h1>";

// == Line Feed ==
/// Expiring feed of posted lines.
///
/// A line is `None` when it was posted without a query string; it renders
/// as an empty line.
#[derive(Debug)]
pub struct LineFeed<C = SystemClock> {
    lines: LinkedExpiringList<Option<String>, C>,
}

impl LineFeed {
    /// Creates a feed whose lines live for `lifetime_ms`.
    pub fn new(lifetime_ms: u64) -> Self {
        Self::with_clock(lifetime_ms, SystemClock)
    }
}

impl Default for LineFeed {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_LIFETIME_MS)
    }
}

impl<C: Clock> LineFeed<C> {
    /// Creates a feed reading time from `clock`.
    pub fn with_clock(lifetime_ms: u64, clock: C) -> Self {
        Self {
            lines: LinkedExpiringList::with_clock(lifetime_ms, clock),
        }
    }

    /// Appends a line at the end of the feed.
    pub fn add_line(&mut self, line: Option<String>) {
        debug!(present = line.is_some(), "Adding line to feed");
        self.lines.push(line);
    }

    /// Renders every live line, oldest first, one per row.
    ///
    /// The feed is purged before the cursor is created, so lines that expired
    /// since the last access never reach the cursor. Fails with
    /// `IterationExhausted` only if lines expire between the cursor's
    /// existence check and its read.
    pub fn render_all(&mut self) -> Result<String> {
        self.lines.purge();
        let mut page = String::from(PAGE_OPEN);
        let mut cursor = self.lines.cursor();
        while cursor.has_next() {
            if let Some(line) = cursor.try_next()? {
                page.push_str(&line);
            }
            page.push('\n');
        }
        page.push_str(PAGE_CLOSE);
        Ok(page)
    }

    /// Number of lines as of the last purge.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the feed held no lines at the last purge.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
