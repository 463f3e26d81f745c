//! Error types for catalog input and session operations.
//!
//! Every mutating operation is all-or-nothing: when it returns an error,
//! the catalog is exactly as it was before the call.

use thiserror::Error;

/// Errors reported at the catalog/session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A day or clock time could not be parsed, or the interval is empty
    /// or outside the 0..=1440 minute range.
    #[error("Invalid time format: {message}")]
    InvalidTimeFormat { message: String },

    /// A required field (course name, instructor, schedule) was empty.
    #[error("Missing field: {field}")]
    MissingField { field: &'static str },

    /// Removal or selection by an index that does not exist.
    #[error("Index {index} not found in {target}")]
    IndexNotFound { target: String, index: usize },

    /// Electives were merged before any base timetable was selected.
    #[error("No timetable selected")]
    NoTimetableSelected,
}

/// Category of a [`CatalogError`], for callers that branch on the kind
/// rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidTimeFormat,
    MissingField,
    IndexNotFound,
    NoTimetableSelected,
}

impl CatalogError {
    pub(crate) fn invalid_time(message: impl Into<String>) -> Self {
        CatalogError::InvalidTimeFormat {
            message: message.into(),
        }
    }

    pub(crate) fn index_not_found(target: impl Into<String>, index: usize) -> Self {
        CatalogError::IndexNotFound {
            target: target.into(),
            index,
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::InvalidTimeFormat { .. } => ErrorKind::InvalidTimeFormat,
            CatalogError::MissingField { .. } => ErrorKind::MissingField,
            CatalogError::IndexNotFound { .. } => ErrorKind::IndexNotFound,
            CatalogError::NoTimetableSelected => ErrorKind::NoTimetableSelected,
        }
    }
}

/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
