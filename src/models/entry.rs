//! Schedule entry (one concrete offering of a course).
//!
//! An entry pairs an instructor and an optional section with a weekly
//! day schedule. Entries are immutable once built; the catalog and every
//! timetable share them through `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{TimeInterval, Weekday};
use crate::error::{CatalogError, Result};

/// Section identifier of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// A named section (e.g., "A", "Writing-intensive").
    Named(String),
    /// The course is offered as a single, unsectioned class.
    #[default]
    Unsectioned,
}

impl Section {
    /// Builds a section from optional free text. Blank text is unsectioned.
    pub fn from_text(text: Option<&str>) -> Self {
        match text.map(str::trim) {
            Some(t) if !t.is_empty() => Section::Named(t.to_string()),
            _ => Section::Unsectioned,
        }
    }

    /// The section name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Section::Named(name) => Some(name),
            Section::Unsectioned => None,
        }
    }
}

/// Weekly schedule of an entry: at most one interval per weekday,
/// iterated Monday first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeInterval>", into = "Vec<TimeInterval>")]
pub struct DaySchedule {
    days: BTreeMap<Weekday, TimeInterval>,
}

impl DaySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interval, replacing any earlier interval on the same day.
    ///
    /// Returns the replaced interval.
    pub fn insert(&mut self, interval: TimeInterval) -> Option<TimeInterval> {
        self.days.insert(interval.day(), interval)
    }

    /// Adds an interval (builder form).
    pub fn with(mut self, interval: TimeInterval) -> Self {
        self.insert(interval);
        self
    }

    /// Interval on the given day.
    pub fn get(&self, day: Weekday) -> Option<&TimeInterval> {
        self.days.get(&day)
    }

    /// Intervals in weekly order.
    pub fn iter(&self) -> impl Iterator<Item = &TimeInterval> {
        self.days.values()
    }

    /// Interval on the earliest scheduled weekday.
    pub fn earliest(&self) -> Option<&TimeInterval> {
        self.days.values().next()
    }

    /// Number of scheduled days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no day is scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl From<Vec<TimeInterval>> for DaySchedule {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        intervals.into_iter().fold(Self::new(), Self::with)
    }
}

impl From<DaySchedule> for Vec<TimeInterval> {
    fn from(schedule: DaySchedule) -> Self {
        schedule.days.into_values().collect()
    }
}

impl fmt::Display for DaySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, iv) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{iv}")?;
        }
        Ok(())
    }
}

/// Raw meeting time as entered by a user or read from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInput {
    /// Day name (`Mon`, `Tuesday`, ...).
    pub day: String,
    /// Start clock time (`HH:MM`).
    pub start: String,
    /// End clock time (`HH:MM`).
    pub end: String,
}

impl MeetingInput {
    pub fn new(day: impl Into<String>, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            start: start.into(),
            end: end.into(),
        }
    }

    /// Parses into a validated interval.
    pub fn to_interval(&self) -> Result<TimeInterval> {
        TimeInterval::parse(self.day.parse()?, &self.start, &self.end)
    }
}

/// One concrete offering that can satisfy a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct Entry {
    /// Course name this entry satisfies.
    pub course: String,
    /// Instructor(s), free text.
    pub instructor: String,
    /// Section identifier.
    pub section: Section,
    /// Weekly meeting times.
    pub schedule: DaySchedule,
}

#[derive(Deserialize)]
struct RawEntry {
    course: String,
    instructor: String,
    #[serde(default)]
    section: Section,
    schedule: DaySchedule,
}

impl TryFrom<RawEntry> for Entry {
    type Error = CatalogError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Ok(Entry::new(raw.course, raw.instructor, raw.schedule)?.with_section(raw.section))
    }
}

impl Entry {
    /// Creates an unsectioned entry.
    ///
    /// Fails with `MissingField` when the course name or instructor is
    /// blank, or the schedule is empty.
    pub fn new(
        course: impl Into<String>,
        instructor: impl Into<String>,
        schedule: DaySchedule,
    ) -> Result<Self> {
        let course: String = course.into();
        let instructor: String = instructor.into();
        let course = course.trim().to_string();
        let instructor = instructor.trim().to_string();
        if course.is_empty() {
            return Err(CatalogError::MissingField {
                field: "course name",
            });
        }
        if instructor.is_empty() {
            return Err(CatalogError::MissingField {
                field: "instructor",
            });
        }
        if schedule.is_empty() {
            return Err(CatalogError::MissingField { field: "schedule" });
        }
        Ok(Self {
            course,
            instructor,
            section: Section::Unsectioned,
            schedule,
        })
    }

    /// Sets the section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// Builds an entry from raw form input.
    ///
    /// Every meeting is parsed before anything is returned; a later meeting
    /// on an already-listed day replaces the earlier one.
    pub fn from_meetings(
        course: &str,
        instructor: &str,
        meetings: &[MeetingInput],
        section: Option<&str>,
    ) -> Result<Self> {
        let mut schedule = DaySchedule::new();
        for meeting in meetings {
            schedule.insert(meeting.to_interval()?);
        }
        Ok(Self::new(course, instructor, schedule)?.with_section(Section::from_text(section)))
    }

    /// Interval on the earliest scheduled weekday (the sort key day).
    pub fn earliest(&self) -> Option<&TimeInterval> {
        self.schedule.earliest()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.section {
            Section::Named(name) => write!(
                f,
                "{} ({}) by {} on {}",
                self.course, name, self.instructor, self.schedule
            ),
            Section::Unsectioned => write!(
                f,
                "{} by {} on {}",
                self.course, self.instructor, self.schedule
            ),
        }
    }
}
