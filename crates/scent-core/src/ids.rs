//! # Id Generation
//!
//! Order ids and new product ids are creation timestamps in epoch
//! milliseconds. Two checkouts in the same millisecond would collide, so the
//! generator bumps past the last id it handed out:
//!
//! ```text
//! now_ms:   1700000000000  1700000000000  1700000000000  1700000000005
//! issued:   1700000000000  1700000000001  1700000000002  1700000000005
//! ```
//!
//! Ids are therefore unique and strictly increasing for the life of the
//! generator, while staying close to wall-clock time.

use chrono::Utc;

/// Monotonic millisecond id source.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Next id based on the current wall clock.
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    /// Next id given an explicit clock reading.
    ///
    /// ## Example
    /// ```rust
    /// use scent_core::ids::IdGenerator;
    ///
    /// let mut ids = IdGenerator::new();
    /// assert_eq!(ids.next_at(100), 100);
    /// assert_eq!(ids.next_at(100), 101);
    /// assert_eq!(ids.next_at(50), 102); // clock went backwards
    /// assert_eq!(ids.next_at(500), 500);
    /// ```
    pub fn next_at(&mut self, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    /// Marks `id` as used so later ids sort after it.
    ///
    /// Seeded catalogs call this so generated product ids never reuse a
    /// seed id, even with a broken clock.
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }

    /// The most recently issued or observed id.
    pub fn last(&self) -> u64 {
        self.last
    }
}
