//! Pairwise conflict detection between entries.
//!
//! Two entries conflict iff they share a weekday on which their intervals
//! overlap with non-zero duration. Touching endpoints are not a conflict.
//!
//! # Complexity
//! O(d_a * log d_b) per pair, where d is the number of scheduled days.

use std::sync::Arc;

use crate::models::Entry;

/// Whether two entries conflict. Symmetric and pure.
///
/// # Example
/// ```
/// use u_timetable::models::{DaySchedule, Entry, TimeInterval, Weekday};
/// use u_timetable::scheduler::conflicts;
///
/// let at = |start, end| {
///     DaySchedule::new().with(TimeInterval::new(Weekday::Mon, start, end).unwrap())
/// };
/// let a = Entry::new("A", "Kim", at(540, 600)).unwrap();
/// let b = Entry::new("B", "Lee", at(600, 660)).unwrap();
/// assert!(!conflicts(&a, &b)); // 09:00-10:00 touches 10:00-11:00
/// ```
pub fn conflicts(a: &Entry, b: &Entry) -> bool {
    a.schedule.iter().any(|iv| {
        b.schedule
            .get(iv.day())
            .is_some_and(|other| iv.overlaps(other))
    })
}

/// Whether `entry` conflicts with any entry in `others`.
pub fn conflicts_with_any<'a, I>(entry: &Entry, others: I) -> bool
where
    I: IntoIterator<Item = &'a Arc<Entry>>,
{
    others.into_iter().any(|other| conflicts(entry, other))
}

/// Index pairs `(i, j)` with `i < j` of mutually conflicting entries.
///
/// Empty for any valid timetable; used to check results independently
/// of how they were produced.
pub fn conflicting_pairs(entries: &[Arc<Entry>]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            if conflicts(&entries[i], &entries[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::test_support::{entry, random_entry};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_touching_is_not_conflict() {
        let a = entry("A", None, &[("Mon", "09:00", "10:00")]);
        let b = entry("B", None, &[("Mon", "10:00", "11:00")]);
        assert!(!conflicts(&a, &b));
        assert!(!conflicts(&b, &a));
    }

    #[test]
    fn test_overlap_same_day() {
        let a = entry("A", None, &[("Mon", "09:00", "10:00")]);
        let b = entry("B", None, &[("Mon", "09:30", "10:30")]);
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn test_different_days() {
        let a = entry("A", None, &[("Mon", "09:00", "10:00")]);
        let b = entry("B", None, &[("Tue", "09:00", "10:00")]);
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_multi_day_overlap_on_second_shared_day() {
        // Shared Mon is clear, shared Wed overlaps
        let a = entry("A", None, &[("Mon", "13:30", "15:20"), ("Wed", "15:30", "17:20")]);
        let b = entry("B", None, &[("Mon", "12:00", "13:15"), ("Wed", "17:00", "18:00")]);
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn test_identical_entries_conflict() {
        let a = entry("A", None, &[("Thu", "09:00", "12:50")]);
        assert!(conflicts(&a, &a.clone()));
    }

    #[test]
    fn test_symmetry_randomized() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..500 {
            let a = random_entry(&mut rng, "A");
            let b = random_entry(&mut rng, "B");
            assert_eq!(conflicts(&a, &b), conflicts(&b, &a), "{a} vs {b}");
        }
    }

    #[test]
    fn test_conflicting_pairs() {
        let entries: Vec<Arc<Entry>> = vec![
            Arc::new(entry("A", None, &[("Mon", "09:00", "10:00")])),
            Arc::new(entry("B", None, &[("Mon", "10:00", "11:00")])),
            Arc::new(entry("C", None, &[("Mon", "09:30", "10:30")])),
        ];
        assert_eq!(conflicting_pairs(&entries), vec![(0, 2), (1, 2)]);
        assert!(conflicts_with_any(&entries[2], &entries[..2]));
        assert!(!conflicts_with_any(&entries[1], &entries[..1]));
    }
}
