//! Timetabling domain models.
//!
//! Provides the data types for course catalogs and the timetables built
//! from them.
//!
//! # Ownership
//!
//! | Type | Owns | Shares |
//! |------|------|--------|
//! | `Course` | its candidate list | entries via `Arc` |
//! | `Timetable` | its selection order | entries via `Arc` |
//! | `Entry` | name, instructor, section, `DaySchedule` | nothing |
//!
//! Entries are immutable once built, so a timetable produced earlier is
//! unaffected by later catalog edits.

mod course;
mod entry;
mod interval;
mod timetable;
mod weekday;

pub use course::Course;
pub use entry::{DaySchedule, Entry, MeetingInput, Section};
pub use interval::{format_clock, parse_clock, TimeInterval, MINUTES_PER_DAY};
pub use timetable::Timetable;
pub use weekday::Weekday;
