//! Removal recommendations for rejected electives.
//!
//! After a merge, each rejected elective collides with at least one entry
//! of the final timetable. [`recommend`] lists those electives in their
//! original order; [`explain`] additionally names the timetable entries
//! each one collides with, so a caller can show what would have to go.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::conflict::conflicts;
use crate::models::{Entry, Timetable};

/// A rejected elective and the timetable entries blocking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The rejected elective.
    pub entry: Arc<Entry>,
    /// Timetable entries it conflicts with, in timetable order.
    pub collisions: Vec<Arc<Entry>>,
}

/// Rejected electives that collide with `timetable`, in input order.
///
/// For the output of [`merge`](super::merge) this is exactly the rejected
/// list.
pub fn recommend(timetable: &Timetable, rejected: &[Arc<Entry>]) -> Vec<Arc<Entry>> {
    explain(timetable, rejected)
        .into_iter()
        .map(|r| r.entry)
        .collect()
}

/// Like [`recommend`], with the colliding timetable entries attached.
pub fn explain(timetable: &Timetable, rejected: &[Arc<Entry>]) -> Vec<Recommendation> {
    rejected
        .iter()
        .filter_map(|entry| {
            let collisions: Vec<Arc<Entry>> = timetable
                .iter()
                .filter(|existing| conflicts(entry, existing))
                .cloned()
                .collect();
            (!collisions.is_empty()).then(|| Recommendation {
                entry: entry.clone(),
                collisions,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::merge::merge;
    use crate::scheduler::test_support::entry;

    fn shared(e: Entry) -> Arc<Entry> {
        Arc::new(e)
    }

    #[test]
    fn test_recommend_equals_rejected_after_merge() {
        let base: Timetable = [
            shared(entry("Computing", None, &[("Mon", "12:00", "13:15")])),
            shared(entry("Physics", None, &[("Thu", "09:00", "12:50")])),
        ]
        .into_iter()
        .collect();
        let electives = vec![
            shared(entry("Art", None, &[("Thu", "12:00", "13:00")])),
            shared(entry("Music", None, &[("Tue", "09:00", "10:00")])),
            shared(entry("Film", None, &[("Mon", "13:00", "14:00")])),
        ];

        let outcome = merge(&base, &electives);
        let recommended = recommend(&outcome.timetable, &outcome.rejected);
        assert_eq!(recommended, outcome.rejected);
        let names: Vec<&str> = recommended.iter().map(|e| e.course.as_str()).collect();
        assert_eq!(names, vec!["Art", "Film"]);
    }

    #[test]
    fn test_explain_lists_collisions() {
        let computing = shared(entry("Computing", None, &[("Mon", "12:00", "13:15")]));
        let math = shared(entry("AI Math", None, &[("Wed", "12:00", "13:15")]));
        let base: Timetable = [computing.clone(), math.clone()].into_iter().collect();
        // Collides with both base entries
        let club = shared(entry(
            "Club",
            None,
            &[("Mon", "13:00", "14:00"), ("Wed", "11:00", "12:30")],
        ));

        let explained = explain(&base, &[club.clone()]);
        assert_eq!(explained.len(), 1);
        assert!(Arc::ptr_eq(&explained[0].entry, &club));
        assert_eq!(explained[0].collisions, vec![computing, math]);
    }

    #[test]
    fn test_non_colliding_entries_are_skipped() {
        let base: Timetable = [shared(entry("A", None, &[("Mon", "09:00", "10:00")]))]
            .into_iter()
            .collect();
        let free = shared(entry("Free", None, &[("Sat", "09:00", "10:00")]));
        assert!(recommend(&base, &[free]).is_empty());
        assert!(recommend(&base, &[]).is_empty());
    }
}
