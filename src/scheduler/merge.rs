//! Greedy elective merging.
//!
//! # Algorithm
//! Single pass over the electives in input order. Each elective is tested
//! against everything accepted so far (the base plus earlier accepted
//! electives); it is appended if nothing conflicts, otherwise rejected.
//! No backtracking: the outcome depends on elective order.
//!
//! # Complexity
//! O(e * (b + e)) conflict tests for b base entries and e electives.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::conflict::conflicts_with_any;
use crate::models::{Entry, Timetable};

/// Result of merging electives into a base timetable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Base entries followed by accepted electives, in acceptance order.
    pub timetable: Timetable,
    /// Rejected electives, in input order.
    pub rejected: Vec<Arc<Entry>>,
}

impl MergeOutcome {
    /// Whether every elective was accepted.
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Greedily folds `electives` into a copy of `base`.
///
/// The base is left untouched.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use u_timetable::models::{DaySchedule, Entry, TimeInterval, Timetable, Weekday};
/// use u_timetable::scheduler::merge;
///
/// let mon = |s, e| DaySchedule::new().with(TimeInterval::new(Weekday::Mon, s, e).unwrap());
/// let base: Timetable = [Arc::new(Entry::new("B", "Kim", mon(540, 600)).unwrap())]
///     .into_iter()
///     .collect();
/// let x = Arc::new(Entry::new("X", "Lee", mon(570, 600)).unwrap());
/// let y = Arc::new(Entry::new("Y", "Park", mon(600, 660)).unwrap());
///
/// let outcome = merge(&base, &[x.clone(), y.clone()]);
/// assert_eq!(outcome.rejected, vec![x]);
/// assert_eq!(outcome.timetable.entries.last(), Some(&y));
/// ```
pub fn merge(base: &Timetable, electives: &[Arc<Entry>]) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        timetable: base.clone(),
        rejected: Vec::new(),
    };

    for elective in electives {
        if conflicts_with_any(elective, &outcome.timetable) {
            outcome.rejected.push(elective.clone());
        } else {
            outcome.timetable.push(elective.clone());
        }
    }

    debug!(
        base = base.len(),
        electives = electives.len(),
        rejected = outcome.rejected.len(),
        "merged electives"
    );
    outcome
}
