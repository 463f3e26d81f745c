//! Timetabling algorithms.
//!
//! Pure functions over explicit inputs; none of them touch the catalog.
//!
//! # Pipeline
//!
//! catalog courses → [`generate`] → candidate timetables → caller selects
//! one → [`merge`] with electives → [`order`] for display →
//! [`recommend`] / [`explain`] for rejected electives.
//!
//! # Algorithms
//!
//! - **Conflict**: half-open interval overlap on shared weekdays.
//! - **Enumeration**: brute-force Cartesian product with in-combination
//!   early exit; intended for catalogs with tens of sections per course.
//! - **Merge**: single-pass greedy, order-dependent, no backtracking.

mod conflict;
mod enumerate;
mod merge;
mod order;
mod recommend;
#[cfg(test)]
mod test_support;

pub use conflict::{conflicting_pairs, conflicts, conflicts_with_any};
pub use enumerate::{combination_count, generate, TimetableEnumerator};
pub use merge::{merge, MergeOutcome};
pub use order::{order, sort_key};
pub use recommend::{explain, recommend, Recommendation};
