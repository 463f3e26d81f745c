//! Weekly class timetabling for the U-Engine ecosystem.
//!
//! Builds conflict-free weekly timetables from a catalog of mandatory
//! courses, each offered in several interchangeable sections, then layers
//! optional electives onto a chosen timetable and reports which electives
//! do not fit.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Weekday`, `TimeInterval`, `Entry`,
//!   `Section`, `Course`, `Timetable`
//! - **`scheduler`**: Conflict detection, combination enumeration, display
//!   ordering, greedy elective merging, removal recommendations
//! - **`catalog`** / **`session`**: The mutable catalog and the in-process
//!   API a presentation layer calls
//! - **`validation`**: Course list integrity checks
//! - **`config`**: TOML seed catalogs
//!
//! # Scale
//!
//! Enumeration is a brute-force Cartesian product with early exit inside
//! each combination. It is meant for catalogs with tens of sections per
//! course; [`scheduler::combination_count`] lets a caller check the search
//! size up front.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod validation;

pub use catalog::Catalog;
pub use error::{CatalogError, ErrorKind, Result};
pub use session::{FinalTimetable, Session};
