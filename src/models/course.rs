//! Course (requirement) model.
//!
//! A course is satisfied by choosing exactly one of its candidate entries.
//! Candidate order matters: it fixes the enumeration order of timetables.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::Entry;
use crate::error::CatalogError;

/// A mandatory course and its interchangeable offerings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCourse")]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Candidate entries, in enumeration order.
    pub entries: Vec<Arc<Entry>>,
}

#[derive(Deserialize)]
struct RawCourse {
    name: String,
    entries: Vec<Arc<Entry>>,
}

impl TryFrom<RawCourse> for Course {
    type Error = String;

    /// A stored course holds at least one entry, all filed under its name.
    fn try_from(raw: RawCourse) -> Result<Self, String> {
        if raw.entries.is_empty() {
            return Err(CatalogError::MissingField {
                field: "course entries",
            }
            .to_string());
        }
        if let Some(stray) = raw.entries.iter().find(|e| e.course != raw.name) {
            return Err(format!(
                "entry '{}' is filed under course '{}'",
                stray.course, raw.name
            ));
        }
        Ok(Self {
            name: raw.name,
            entries: raw.entries,
        })
    }
}

impl Course {
    /// Creates a course with no entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Adds a candidate entry (builder form).
    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.add_entry(Arc::new(entry));
        self
    }

    /// Appends a candidate entry.
    pub fn add_entry(&mut self, entry: Arc<Entry>) {
        self.entries.push(entry);
    }

    /// Removes the candidate at `index`, returning it.
    pub fn remove_entry(&mut self, index: usize) -> Option<Arc<Entry>> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    /// Number of candidate entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the course has no candidates left.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
