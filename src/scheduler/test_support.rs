//! Entry fixtures shared by the scheduler tests.

use rand::Rng;

use crate::models::{Course, DaySchedule, Entry, MeetingInput, TimeInterval, Weekday};

/// Builds an entry from `(day, start, end)` text triples.
pub(crate) fn entry(course: &str, section: Option<&str>, meetings: &[(&str, &str, &str)]) -> Entry {
    let meetings: Vec<MeetingInput> = meetings
        .iter()
        .map(|&(d, s, e)| MeetingInput::new(d, s, e))
        .collect();
    Entry::from_meetings(course, "Staff", &meetings, section).unwrap()
}

/// Random entry on one to three weekdays, 5-minute grid, 08:00-22:00.
pub(crate) fn random_entry<R: Rng>(rng: &mut R, course: &str) -> Entry {
    let mut schedule = DaySchedule::new();
    for _ in 0..rng.random_range(1..=3) {
        let day = Weekday::ALL[rng.random_range(0..7)];
        let start = rng.random_range(96..240u16) * 5;
        let length = rng.random_range(3..=36u16) * 5;
        schedule.insert(TimeInterval::new(day, start, start + length).unwrap());
    }
    Entry::new(course, "Staff", schedule).unwrap()
}

/// Random course with `n` candidate entries.
pub(crate) fn random_course<R: Rng>(rng: &mut R, name: &str, n: usize) -> Course {
    (0..n).fold(Course::new(name), |course, _| {
        course.with_entry(random_entry(rng, name))
    })
}
