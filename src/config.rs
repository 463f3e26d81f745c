//! Seed catalog configuration.
//!
//! A seed catalog is a TOML document listing mandatory offerings and
//! electives as raw form input:
//!
//! ```toml
//! [[mandatory]]
//! course = "Physics and Experiments"
//! instructor = "Choi Hyunhee"
//! section = "A"
//! meetings = [{ day = "Thu", start = "09:00", end = "12:50" }]
//!
//! [[electives]]
//! course = "Film Studies"
//! instructor = "Park"
//! meetings = [{ day = "Tue", start = "18:00", end = "19:30" }]
//! ```
//!
//! Entries are validated when fed into a [`Session`](crate::Session), not
//! when parsed, so a seed file goes through exactly the same checks as
//! interactive input.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::error::CatalogError;
use crate::models::MeetingInput;

const BUNDLED_SEED: &str = include_str!("../data/seed_catalog.toml");

/// Errors raised while loading a seed catalog.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML for a seed catalog.
    #[error("Invalid seed catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// An entry was rejected by the catalog.
    #[error("{list} entry {index} rejected: {source}")]
    Entry {
        list: &'static str,
        index: usize,
        #[source]
        source: CatalogError,
    },
}

/// One offering as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryConfig {
    pub course: String,
    pub instructor: String,
    #[serde(default)]
    pub section: Option<String>,
    pub meetings: Vec<MeetingInput>,
}

/// Seed catalog document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Mandatory offerings; same-named offerings form one course.
    #[serde(default)]
    pub mandatory: Vec<EntryConfig>,
    /// Electives, in merge order.
    #[serde(default)]
    pub electives: Vec<EntryConfig>,
}

impl CatalogConfig {
    /// Parses a seed catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a seed catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            mandatory = config.mandatory.len(),
            electives = config.electives.len(),
            "loaded seed catalog"
        );
        Ok(config)
    }

    /// The built-in seed: the initial mandatory courses.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUNDLED_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_seed_parses() {
        let config = CatalogConfig::bundled().unwrap();
        assert_eq!(config.mandatory.len(), 20);
        assert!(config.electives.is_empty());

        let prog = &config.mandatory[10];
        assert_eq!(prog.course, "Programming and Practice 1");
        assert_eq!(prog.section.as_deref(), Some("A"));
        assert_eq!(prog.meetings.len(), 2);
    }

    #[test]
    fn test_parse_with_electives_and_defaults() {
        let config = CatalogConfig::from_toml_str(
            r#"
            [[electives]]
            course = "Film"
            instructor = "Park"
            meetings = [{ day = "Tue", start = "18:00", end = "19:30" }]
            "#,
        )
        .unwrap();
        assert!(config.mandatory.is_empty());
        assert_eq!(config.electives.len(), 1);
        assert_eq!(config.electives[0].section, None);
        assert_eq!(
            config.electives[0].meetings[0],
            MeetingInput::new("Tue", "18:00", "19:30")
        );
    }

    #[test]
    fn test_parse_error() {
        let err = CatalogConfig::from_toml_str("[[mandatory]]\ncourse = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogConfig::load("/nonexistent/seed.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/seed.toml"));
    }
}
