//! Clock Module
//!
//! Time sources used to stamp and expire list entries.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Unix timestamp in milliseconds.
pub type Timestamp = u64;

// == Clock Trait ==
/// Supplies the current time to a list.
///
/// Every purge pass reads the clock once, so a deterministic implementation
/// makes expiry fully reproducible in tests.
pub trait Clock {
    /// Returns the current time in milliseconds.
    fn now_ms(&self) -> Timestamp;
}

// == System Clock ==
/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> Timestamp {
        // Pre-epoch system time clamps to zero
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

// == Manual Clock ==
/// Deterministic clock that only moves when told to.
///
/// Clones share the same time value, so a test can keep one handle while the
/// list (or the HTTP state owning it) holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start)),
        }
    }

    /// Moves the clock to an absolute time.
    pub fn set(&self, now: Timestamp) {
        self.now.store(now, Ordering::SeqCst);
    }

    /// Moves the clock forward by `ms` milliseconds.
    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Timestamp {
        self.now.load(Ordering::SeqCst)
    }
}
