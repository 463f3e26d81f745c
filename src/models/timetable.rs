//! Timetable (solution) model.
//!
//! A timetable is an ordered selection of entries, at most one per course,
//! pairwise conflict-free. It is a derived value: produced by enumeration
//! or merging, inspected, optionally kept as the selected base, then
//! dropped. Entries are shared with the catalog, never copied.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::Entry;

/// An ordered, conflict-free selection of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Entries in insertion order.
    pub entries: Vec<Arc<Entry>>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: Arc<Entry>) {
        self.entries.push(entry);
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Entry>> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timetable is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry chosen for a course.
    pub fn entry_for_course(&self, course: &str) -> Option<&Arc<Entry>> {
        self.entries.iter().find(|e| e.course == course)
    }
}

impl FromIterator<Arc<Entry>> for Timetable {
    fn from_iter<I: IntoIterator<Item = Arc<Entry>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Timetable {
    type Item = &'a Arc<Entry>;
    type IntoIter = std::slice::Iter<'a, Arc<Entry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
