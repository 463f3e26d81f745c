//! Input validation for course catalogs.
//!
//! Checks structural integrity of a course list before enumeration.
//! Detects:
//! - Duplicate course names
//! - Courses with no candidate entries
//! - Entries filed under a course with a different name
//! - Entries with an empty day schedule
//!
//! Catalog mutations and deserialization already prevent all of these;
//! lists assembled by hand through the public fields may not.

use crate::models::Course;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same name.
    DuplicateCourse,
    /// A course has no candidate entries.
    EmptyCourse,
    /// An entry's course name differs from the course holding it.
    CourseNameMismatch,
    /// An entry has no scheduled day.
    EmptySchedule,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a mandatory course list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for course in courses {
        if !names.insert(course.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course name: {}", course.name),
            ));
        }

        if course.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCourse,
                format!("Course '{}' has no entries", course.name),
            ));
        }

        for (idx, entry) in course.entries.iter().enumerate() {
            if entry.course != course.name {
                errors.push(ValidationError::new(
                    ValidationErrorKind::CourseNameMismatch,
                    format!(
                        "Entry {} of course '{}' is named '{}'",
                        idx, course.name, entry.course
                    ),
                ));
            }
            if entry.schedule.is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySchedule,
                    format!("Entry {} of course '{}' has no meetings", idx, course.name),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
