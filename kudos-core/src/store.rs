//! Review store: durable, ordered collection of reviews
//!
//! The store is the only writer of its slot. Every read-modify-write runs
//! under a single-writer lock so a background reconcile cannot drop a review
//! submitted at the same time. Reads never fail outward: a missing or
//! malformed payload loads as an empty collection. Writes only start over
//! from a malformed payload; a slot that cannot be read is left alone.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, warn};

use crate::merge::merge_reviews;
use crate::review::Review;
use crate::slot::Slot;
use crate::{Error, Result};

/// Source of submission timestamps, in milliseconds since the epoch
pub type Clock = fn() -> i64;

/// Current wall-clock time in milliseconds since the epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Collection after a reconcile, with the number of records it gained
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciled {
    pub items: Vec<Review>,
    pub added: usize,
}

/// Persisted, ordered review collection
pub struct ReviewStore<S: Slot> {
    slot: S,
    write_lock: Mutex<()>,
    clock: Clock,
}

impl<S: Slot> ReviewStore<S> {
    /// Create a store over `slot`
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            write_lock: Mutex::new(()),
            clock: now_millis,
        }
    }

    /// Replace the clock used to stamp submissions
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The underlying slot
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Read the persisted collection, reporting storage and parse errors
    pub fn try_load(&self) -> Result<Vec<Review>> {
        match self.slot.read()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Read the persisted collection
    ///
    /// Anything that cannot be read or parsed yields an empty collection.
    pub fn load(&self) -> Vec<Review> {
        match self.try_load() {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable review collection");
                Vec::new()
            }
        }
    }

    /// Replace the whole persisted collection with `items`
    pub fn save(&self, items: &[Review]) -> Result<()> {
        let _guard = self.lock();
        self.write(items)
    }

    /// Record a new review at the head of the collection
    ///
    /// Input is stored as given; callers validate beforehand.
    pub fn submit(
        &self,
        rating: u8,
        name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Result<Vec<Review>> {
        let _guard = self.lock();

        let review = Review::new(rating, name, comment, (self.clock)());
        let mut items = self.load_for_update()?;
        items.insert(0, review);
        self.write(&items)?;

        debug!(rating, count = items.len(), "Submitted review");
        Ok(items)
    }

    /// Merge `remote` into `local` and persist the result
    ///
    /// An empty `remote` leaves both `local` and the persisted state alone.
    pub fn merge(&self, local: Vec<Review>, remote: Vec<Review>) -> Result<Vec<Review>> {
        if remote.is_empty() {
            return Ok(local);
        }

        let _guard = self.lock();
        let merged = merge_reviews(local, remote);
        self.write(&merged)?;
        Ok(merged)
    }

    /// Merge `remote` into the currently persisted collection
    ///
    /// Reading and writing happen under one lock acquisition, so `added`
    /// counts only records that came from `remote`.
    pub fn reconcile(&self, remote: Vec<Review>) -> Result<Reconciled> {
        if remote.is_empty() {
            return Ok(Reconciled {
                items: self.load(),
                added: 0,
            });
        }

        let _guard = self.lock();
        let local = self.load_for_update()?;
        let before = local.len();
        let merged = merge_reviews(local, remote);
        self.write(&merged)?;

        let added = merged.len().saturating_sub(before);
        debug!(before, added, "Reconciled remote reviews");
        Ok(Reconciled {
            items: merged,
            added,
        })
    }

    // Malformed content starts a fresh collection. Any other read failure is
    // returned so the caller does not overwrite data it never saw.
    fn load_for_update(&self) -> Result<Vec<Review>> {
        match self.try_load() {
            Err(Error::Json(e)) => {
                warn!(error = %e, "Replacing malformed review collection");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn write(&self, items: &[Review]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.slot.write(&raw)
    }

    // The lock guards no in-memory data, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::average;
    use crate::slot::MemorySlot;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Memory slot whose reads can be made to fail
    #[derive(Default)]
    struct LockedSlot {
        inner: MemorySlot,
        locked: AtomicBool,
    }

    impl Slot for LockedSlot {
        fn read(&self) -> Result<Option<String>> {
            if self.locked.load(Ordering::SeqCst) {
                return Err(Error::Storage("database is locked".to_string()));
            }
            self.inner.read()
        }

        fn write(&self, raw: &str) -> Result<()> {
            self.inner.write(raw)
        }
    }

    fn fixed_clock() -> i64 {
        1_000
    }

    fn store() -> ReviewStore<MemorySlot> {
        ReviewStore::new(MemorySlot::new())
    }

    #[test]
    fn test_load_untouched_store_is_empty() {
        assert!(store().load().is_empty());
    }

    #[test]
    fn test_load_garbage_is_empty() {
        let store = ReviewStore::new(MemorySlot::with_value("not json {"));
        assert!(store.load().is_empty());
        assert!(store.try_load().is_err());
    }

    #[test]
    fn test_load_non_array_is_empty() {
        let store = ReviewStore::new(MemorySlot::with_value(r#"{"rating": 5}"#));
        assert!(store.load().is_empty());

        let store = ReviewStore::new(MemorySlot::with_value("null"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = store();
        let items = vec![
            Review::new(5, "Alice", "Great service", 300),
            Review::new(2, "", "Could be better", 200),
            Review::new(4, "Bob", "Nice", 0),
        ];

        store.save(&items).unwrap();
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let store = store();
        store.save(&[Review::new(1, "", "first one", 1)]).unwrap();
        store.save(&[Review::new(2, "", "second one", 2)]).unwrap();

        let items = store.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rating, 2);
    }

    #[test]
    fn test_submit_prepends_with_timestamp() {
        let store = store();
        store.save(&[Review::new(3, "", "older review", 5)]).unwrap();

        let before = now_millis();
        let items = store.submit(5, "Alice", "Great service, very happy").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Alice");
        assert!(items[0].timestamp >= before);
        assert_eq!(items[1].comment, "older review");
        assert_eq!(store.load(), items);
    }

    #[test]
    fn test_submit_then_load_end_to_end() {
        let store = store();
        store.submit(5, "Alice", "Great service, very happy").unwrap();

        let items = store.load();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rating, 5);
        assert_eq!(items[0].name, "Alice");
    }

    #[test]
    fn test_submit_does_not_validate() {
        let store = store();
        let items = store.submit(0, "", "").unwrap();
        assert_eq!(items[0].rating, 0);
    }

    #[test]
    fn test_submit_over_garbage_starts_fresh() {
        let store = ReviewStore::new(MemorySlot::with_value("garbage")).with_clock(fixed_clock);
        let items = store.submit(4, "Bob", "Fresh start").unwrap();
        assert_eq!(items, vec![Review::new(4, "Bob", "Fresh start", 1_000)]);
    }

    #[test]
    fn test_merge_empty_remote_is_noop() {
        let store = store();
        let local = vec![Review::new(1, "", "zero first", 0), Review::new(5, "", "later", 50)];

        let merged = store.merge(local.clone(), Vec::new()).unwrap();
        assert_eq!(merged, local);
        assert_eq!(store.slot().read().unwrap(), None);
    }

    #[test]
    fn test_merge_persists_result() {
        let store = store();
        let merged = store
            .merge(
                vec![Review::new(5, "", "local comment", 200)],
                vec![Review::new(4, "", "remote comment", 100)],
            )
            .unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].timestamp, 200);
        assert_eq!(store.load(), merged);
    }

    #[test]
    fn test_reconcile_keeps_submitted_review() {
        let store = store().with_clock(fixed_clock);
        store.submit(5, "Alice", "Great service").unwrap();

        let reconciled = store
            .reconcile(vec![
                Review::new(4, "Seed", "Seeded review", 0),
                Review::new(5, "Alice", "Great service", 1_000),
            ])
            .unwrap();

        assert_eq!(reconciled.added, 1);
        let merged = reconciled.items;
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Alice");
        assert_eq!(merged[1].name, "Seed");
        assert_eq!(store.load(), merged);
    }

    #[test]
    fn test_reconcile_empty_remote_does_not_write() {
        let store = store();
        let reconciled = store.reconcile(Vec::new()).unwrap();
        assert!(reconciled.items.is_empty());
        assert_eq!(reconciled.added, 0);
        assert_eq!(store.slot().read().unwrap(), None);
    }

    #[test]
    fn test_reconcile_over_garbage_starts_fresh() {
        let store = ReviewStore::new(MemorySlot::with_value("garbage"));
        let reconciled = store
            .reconcile(vec![Review::new(4, "Seed", "Seeded review", 0)])
            .unwrap();
        assert_eq!(reconciled.added, 1);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_unreadable_slot_is_not_overwritten() {
        let store = ReviewStore::new(LockedSlot::default());
        store
            .save(&[
                Review::new(5, "A", "first review", 2),
                Review::new(4, "B", "second review", 1),
            ])
            .unwrap();
        let before = store.slot().inner.read().unwrap();

        store.slot().locked.store(true, Ordering::SeqCst);
        assert!(matches!(
            store.submit(3, "C", "third review"),
            Err(Error::Storage(_))
        ));
        assert!(matches!(
            store.reconcile(vec![Review::new(2, "D", "seeded review", 0)]),
            Err(Error::Storage(_))
        ));
        assert_eq!(store.slot().inner.read().unwrap(), before);

        store.slot().locked.store(false, Ordering::SeqCst);
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn test_concurrent_submits_are_not_lost() {
        let store = Arc::new(store());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.submit(5, format!("user{i}"), "Threaded review").unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.load().len(), 8);
        assert_eq!(average(&store.load()), 5.0);
    }
}
