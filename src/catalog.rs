//! Course catalog: mandatory courses and the flat elective list.
//!
//! The catalog is the only mutable state in the crate. Every mutation is
//! all-or-nothing; entries are handed out as `Arc` clones so timetables
//! built from an earlier state stay intact.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::models::{Course, Entry};
use crate::validation::validate_courses;

/// Mandatory courses plus electives for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    courses: Vec<Course>,
    electives: Vec<Arc<Entry>>,
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    electives: Vec<Arc<Entry>>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = String;

    fn try_from(raw: RawCatalog) -> std::result::Result<Self, String> {
        if let Err(errors) = validate_courses(&raw.courses) {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(messages.join("; "));
        }
        Ok(Self {
            courses: raw.courses,
            electives: raw.electives,
        })
    }
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mandatory courses, in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Finds a course by name.
    pub fn course(&self, name: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.name == name)
    }

    /// Electives, in insertion order.
    pub fn electives(&self) -> &[Arc<Entry>] {
        &self.electives
    }

    /// Adds a mandatory entry to the course of the same name, creating the
    /// course at the end of the list if it does not exist yet.
    pub fn add_course_entry(&mut self, entry: Entry) -> Arc<Entry> {
        let entry = Arc::new(entry);
        match self.courses.iter_mut().find(|c| c.name == entry.course) {
            Some(course) => course.add_entry(entry.clone()),
            None => {
                let mut course = Course::new(entry.course.clone());
                course.add_entry(entry.clone());
                self.courses.push(course);
            }
        }
        info!(course = %entry.course, section = ?entry.section, "added course entry");
        entry
    }

    /// Removes the `index`-th entry (zero-based) of the named course.
    ///
    /// Removing a course's last entry removes the course.
    pub fn remove_course_entry(&mut self, course_name: &str, index: usize) -> Result<Arc<Entry>> {
        let pos = self
            .courses
            .iter()
            .position(|c| c.name == course_name)
            .ok_or_else(|| CatalogError::index_not_found(format!("course '{course_name}'"), index))?;

        let course = &mut self.courses[pos];
        let removed = course
            .remove_entry(index)
            .ok_or_else(|| CatalogError::index_not_found(format!("course '{course_name}'"), index))?;

        if course.is_empty() {
            self.courses.remove(pos);
            info!(course = course_name, "removed last entry; course dropped");
        } else {
            info!(course = course_name, index, "removed course entry");
        }
        Ok(removed)
    }

    /// Appends an elective.
    pub fn add_elective(&mut self, entry: Entry) -> Arc<Entry> {
        let entry = Arc::new(entry);
        self.electives.push(entry.clone());
        info!(course = %entry.course, "added elective");
        entry
    }

    /// Removes the `index`-th elective (zero-based).
    pub fn remove_elective(&mut self, index: usize) -> Result<Arc<Entry>> {
        if index >= self.electives.len() {
            return Err(CatalogError::index_not_found("electives", index));
        }
        let removed = self.electives.remove(index);
        info!(course = %removed.course, index, "removed elective");
        Ok(removed)
    }

    /// Total number of mandatory entries across all courses.
    pub fn entry_count(&self) -> usize {
        self.courses.iter().map(Course::entry_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{DaySchedule, Section, TimeInterval, Weekday};

    fn entry(course: &str, section: &str) -> Entry {
        let schedule =
            DaySchedule::new().with(TimeInterval::new(Weekday::Thu, 540, 770).unwrap());
        Entry::new(course, "Choi", schedule)
            .unwrap()
            .with_section(Section::Named(section.into()))
    }

    #[test]
    fn test_add_groups_by_course_name() {
        let mut catalog = Catalog::new();
        catalog.add_course_entry(entry("Physics", "A"));
        catalog.add_course_entry(entry("Math", "A"));
        catalog.add_course_entry(entry("Physics", "B"));

        let names: Vec<&str> = catalog.courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Physics", "Math"]);
        assert_eq!(catalog.course("Physics").unwrap().entry_count(), 2);
        assert_eq!(catalog.entry_count(), 3);
    }

    #[test]
    fn test_remove_last_entry_drops_course() {
        let mut catalog = Catalog::new();
        catalog.add_course_entry(entry("Physics", "A"));
        catalog.add_course_entry(entry("Math", "A"));

        let removed = catalog.remove_course_entry("Physics", 0).unwrap();
        assert_eq!(removed.course, "Physics");
        assert!(catalog.course("Physics").is_none());
        assert_eq!(catalog.courses().len(), 1);
    }

    #[test]
    fn test_remove_invalid_index_leaves_state() {
        let mut catalog = Catalog::new();
        catalog.add_course_entry(entry("Physics", "A"));
        let before = catalog.clone();

        let err = catalog.remove_course_entry("Physics", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexNotFound);
        let err = catalog.remove_course_entry("Biology", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexNotFound);
        let err = catalog.remove_elective(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexNotFound);

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_electives() {
        let mut catalog = Catalog::new();
        catalog.add_elective(entry("Art", "A"));
        catalog.add_elective(entry("Music", "A"));
        assert_eq!(catalog.electives().len(), 2);

        let removed = catalog.remove_elective(0).unwrap();
        assert_eq!(removed.course, "Art");
        assert_eq!(catalog.electives()[0].course, "Music");
        assert!(catalog.courses().is_empty());
    }

    #[test]
    fn test_removed_entry_survives_in_snapshot() {
        let mut catalog = Catalog::new();
        let added = catalog.add_course_entry(entry("Physics", "A"));
        let snapshot = catalog.courses().to_vec();

        catalog.remove_course_entry("Physics", 0).unwrap();
        assert!(catalog.courses().is_empty());
        assert!(Arc::ptr_eq(&snapshot[0].entries[0], &added));
    }

    #[test]
    fn test_deserialize_validates() {
        let mut catalog = Catalog::new();
        catalog.add_course_entry(entry("Physics", "A"));
        catalog.add_elective(entry("Art", "A"));
        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);

        let physics = serde_json::to_string(&catalog.courses()[0]).unwrap();
        let doubled = format!(r#"{{"courses":[{physics},{physics}]}}"#);
        let err = serde_json::from_str::<Catalog>(&doubled).unwrap_err();
        assert!(err.to_string().contains("Duplicate course name: Physics"));

        let hollow = r#"{"courses":[{"name":"Physics","entries":[]}]}"#;
        assert!(serde_json::from_str::<Catalog>(hollow).is_err());
    }
}
