//! Deterministic weekly display order.
//!
//! Entries are stably sorted by `(earliest weekday, start minute on that
//! day)`. A multi-day entry is keyed by its chronologically earliest day
//! in Monday-first order, regardless of the order its days were entered.
//! Ties keep their timetable order.

use std::sync::Arc;

use crate::models::{Entry, Timetable};

/// Sort key of an entry: (weekday index, start minute).
///
/// Entries always have at least one scheduled day; an empty schedule
/// (only reachable by clearing the public field) sorts last.
pub fn sort_key(entry: &Entry) -> (usize, u16) {
    entry
        .earliest()
        .map_or((usize::MAX, u16::MAX), |iv| (iv.day().index(), iv.start()))
}

/// Returns the timetable's entries in weekly display order.
pub fn order(timetable: &Timetable) -> Vec<Arc<Entry>> {
    let mut entries = timetable.entries.clone();
    entries.sort_by_key(|e| sort_key(e));
    entries
}
