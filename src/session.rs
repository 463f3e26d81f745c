//! In-process API consumed by a presentation layer.
//!
//! A [`Session`] owns the catalog, the most recently generated candidate
//! timetables and the selected base timetable. There is no ambient state:
//! a caller creates a session and passes it explicitly.
//!
//! # Flow
//!
//! 1. Fill the catalog (`add_course_entry`, `add_elective`, or
//!    [`Session::from_config`]).
//! 2. [`Session::generate_timetables`] snapshots the mandatory courses and
//!    enumerates candidates.
//! 3. [`Session::select_timetable`] pins one candidate as the base.
//! 4. [`Session::merge_electives`] / [`Session::final_timetable`] layer the
//!    electives on top.
//!
//! Indices are zero-based throughout.

use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, ConfigError};
use crate::error::{CatalogError, Result};
use crate::models::{Course, Entry, MeetingInput, Timetable};
use crate::scheduler::{self, MergeOutcome, Recommendation};
use crate::validation::validate_courses;

/// Outcome of building the final timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalTimetable {
    /// Every elective fit; entries in weekly display order.
    Complete(Vec<Arc<Entry>>),
    /// Some electives did not fit; what to consider removing.
    Blocked(Vec<Recommendation>),
}

/// One user's timetabling session.
///
/// # Example
/// ```
/// use u_timetable::models::MeetingInput;
/// use u_timetable::Session;
///
/// let mut session = Session::new();
/// let mon = |s: &str, e: &str| vec![MeetingInput::new("Mon", s, e)];
/// session.add_course_entry("A", "Kim", &mon("09:00", "10:00"), Some("1")).unwrap();
/// session.add_course_entry("A", "Kim", &mon("10:00", "11:00"), Some("2")).unwrap();
/// session.add_course_entry("B", "Lee", &mon("09:30", "10:00"), None).unwrap();
///
/// assert_eq!(session.generate_timetables().len(), 1);
/// session.select_timetable(0).unwrap();
///
/// session.add_elective("X", "Park", &mon("11:00", "12:00"), None).unwrap();
/// let outcome = session.merge_electives().unwrap();
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Catalog,
    candidates: Vec<Timetable>,
    selected: Option<Timetable>,
}

impl Session {
    /// Creates a session with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over an existing catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Creates a session seeded from configuration.
    ///
    /// Every entry goes through [`Session::add_course_entry`] or
    /// [`Session::add_elective`]; the first rejected entry aborts loading.
    pub fn from_config(config: &CatalogConfig) -> std::result::Result<Self, ConfigError> {
        let mut session = Self::new();
        for (index, e) in config.mandatory.iter().enumerate() {
            session
                .add_course_entry(&e.course, &e.instructor, &e.meetings, e.section.as_deref())
                .map_err(|source| ConfigError::Entry {
                    list: "mandatory",
                    index,
                    source,
                })?;
        }
        for (index, e) in config.electives.iter().enumerate() {
            session
                .add_elective(&e.course, &e.instructor, &e.meetings, e.section.as_deref())
                .map_err(|source| ConfigError::Entry {
                    list: "elective",
                    index,
                    source,
                })?;
        }
        info!(
            courses = session.catalog.courses().len(),
            electives = session.catalog.electives().len(),
            "seeded session"
        );
        Ok(session)
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds a mandatory offering from raw form input.
    pub fn add_course_entry(
        &mut self,
        course: &str,
        instructor: &str,
        meetings: &[MeetingInput],
        section: Option<&str>,
    ) -> Result<Arc<Entry>> {
        let entry = Entry::from_meetings(course, instructor, meetings, section)?;
        Ok(self.catalog.add_course_entry(entry))
    }

    /// Removes the `index`-th offering of a course.
    pub fn remove_course_entry(&mut self, course: &str, index: usize) -> Result<Arc<Entry>> {
        self.catalog.remove_course_entry(course, index)
    }

    /// Mandatory courses, in insertion order.
    pub fn list_courses(&self) -> &[Course] {
        self.catalog.courses()
    }

    /// Adds an elective from raw form input.
    pub fn add_elective(
        &mut self,
        course: &str,
        instructor: &str,
        meetings: &[MeetingInput],
        section: Option<&str>,
    ) -> Result<Arc<Entry>> {
        let entry = Entry::from_meetings(course, instructor, meetings, section)?;
        Ok(self.catalog.add_elective(entry))
    }

    /// Removes the `index`-th elective.
    pub fn remove_elective(&mut self, index: usize) -> Result<Arc<Entry>> {
        self.catalog.remove_elective(index)
    }

    /// Electives, in merge order.
    pub fn electives(&self) -> &[Arc<Entry>] {
        self.catalog.electives()
    }

    /// Enumerates candidate timetables from the current mandatory courses
    /// and keeps them for selection.
    ///
    /// Validation problems are logged but do not stop enumeration.
    pub fn generate_timetables(&mut self) -> &[Timetable] {
        let courses = self.catalog.courses().to_vec();
        if let Err(errors) = validate_courses(&courses) {
            for e in &errors {
                warn!(kind = ?e.kind, "{}", e.message);
            }
        }
        self.candidates = scheduler::generate(&courses);
        info!(candidates = self.candidates.len(), "generated timetables");
        &self.candidates
    }

    /// Candidates from the last [`Session::generate_timetables`] call.
    pub fn candidates(&self) -> &[Timetable] {
        &self.candidates
    }

    /// Pins the `index`-th candidate as the base for merging.
    pub fn select_timetable(&mut self, index: usize) -> Result<&Timetable> {
        let chosen = self
            .candidates
            .get(index)
            .cloned()
            .ok_or_else(|| CatalogError::index_not_found("candidate timetables", index))?;
        info!(index, entries = chosen.len(), "selected timetable");
        let selected: &Timetable = self.selected.insert(chosen);
        Ok(selected)
    }

    /// The selected base timetable, if any.
    pub fn selected(&self) -> Option<&Timetable> {
        self.selected.as_ref()
    }

    /// Merges the current electives into the selected base.
    pub fn merge_electives(&self) -> Result<MergeOutcome> {
        let base = self
            .selected
            .as_ref()
            .ok_or(CatalogError::NoTimetableSelected)?;
        Ok(scheduler::merge(base, self.catalog.electives()))
    }

    /// Merges, then either orders the complete result for display or
    /// explains which electives are blocked.
    pub fn final_timetable(&self) -> Result<FinalTimetable> {
        let outcome = self.merge_electives()?;
        if outcome.is_complete() {
            Ok(FinalTimetable::Complete(scheduler::order(&outcome.timetable)))
        } else {
            Ok(FinalTimetable::Blocked(scheduler::explain(
                &outcome.timetable,
                &outcome.rejected,
            )))
        }
    }
}
