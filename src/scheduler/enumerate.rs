//! Exhaustive enumeration of conflict-free course combinations.
//!
//! # Algorithm
//!
//! 1. Walk the Cartesian product of every course's candidate list with an
//!    odometer of per-course indices (last course varies fastest), so the
//!    output is lexicographic by course index, then by entry index.
//! 2. For each combination, insert entries one at a time in course order
//!    into a growing partial timetable.
//! 3. Discard the combination as soon as the next entry conflicts with an
//!    inserted one, or its course name is already present under a
//!    different section.
//! 4. Combinations that survive insertion are yielded unranked, without
//!    deduplication.
//!
//! # Complexity
//! O(Π n_i * k²) for k courses with n_i candidates each. Pruning is only
//! within a combination; a failing prefix is re-examined for every suffix.
//! Adequate for tens of sections per course, not for large catalogs.

use tracing::debug;

use super::conflict::conflicts_with_any;
use crate::models::{Course, Timetable};

/// Generates every valid timetable, in enumeration order.
///
/// An empty course list yields one empty timetable; a course with no
/// candidates yields none.
///
/// # Example
/// ```
/// use u_timetable::models::{Course, DaySchedule, Entry, Section, TimeInterval, Weekday};
/// use u_timetable::scheduler::generate;
///
/// let mon = |s, e| DaySchedule::new().with(TimeInterval::new(Weekday::Mon, s, e).unwrap());
/// let a = Course::new("A")
///     .with_entry(Entry::new("A", "Kim", mon(540, 600)).unwrap().with_section(Section::Named("1".into())))
///     .with_entry(Entry::new("A", "Kim", mon(600, 660)).unwrap().with_section(Section::Named("2".into())));
/// let b = Course::new("B").with_entry(Entry::new("B", "Lee", mon(570, 600)).unwrap());
///
/// let timetables = generate(&[a, b]);
/// assert_eq!(timetables.len(), 1);
/// assert_eq!(timetables[0].entries[0].section, Section::Named("2".into()));
/// ```
pub fn generate(courses: &[Course]) -> Vec<Timetable> {
    let mut enumerator = TimetableEnumerator::new(courses);
    let timetables: Vec<Timetable> = enumerator.by_ref().collect();
    debug!(
        courses = courses.len(),
        examined = enumerator.examined(),
        valid = timetables.len(),
        "enumerated timetables"
    );
    timetables
}

/// Size of the Cartesian product, or `None` on overflow.
pub fn combination_count(courses: &[Course]) -> Option<usize> {
    courses
        .iter()
        .try_fold(1usize, |acc, c| acc.checked_mul(c.entry_count()))
}

/// Lazy iterator over valid timetables.
#[derive(Debug, Clone)]
pub struct TimetableEnumerator<'a> {
    courses: &'a [Course],
    odometer: Vec<usize>,
    exhausted: bool,
    examined: usize,
}

impl<'a> TimetableEnumerator<'a> {
    /// Creates an enumerator positioned at the first combination.
    pub fn new(courses: &'a [Course]) -> Self {
        Self {
            courses,
            odometer: vec![0; courses.len()],
            exhausted: courses.iter().any(Course::is_empty),
            examined: 0,
        }
    }

    /// Number of combinations examined so far.
    pub fn examined(&self) -> usize {
        self.examined
    }

    /// Builds the current combination, or `None` if it is discarded.
    fn build(&self) -> Option<Timetable> {
        let mut timetable = Timetable::new();
        for (course, &idx) in self.courses.iter().zip(&self.odometer) {
            let entry = &course.entries[idx];
            if conflicts_with_any(entry, &timetable) {
                return None;
            }
            if let Some(existing) = timetable.entry_for_course(&entry.course) {
                if existing.section != entry.section {
                    return None;
                }
            }
            timetable.push(entry.clone());
        }
        Some(timetable)
    }

    fn advance(&mut self) {
        for pos in (0..self.odometer.len()).rev() {
            self.odometer[pos] += 1;
            if self.odometer[pos] < self.courses[pos].entry_count() {
                return;
            }
            self.odometer[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for TimetableEnumerator<'_> {
    type Item = Timetable;

    fn next(&mut self) -> Option<Timetable> {
        while !self.exhausted {
            let candidate = self.build();
            self.advance();
            self.examined += 1;
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}
