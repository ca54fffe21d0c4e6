//! Catalog settings and record formats
//!
//! Defines how record lines are split and how a catalog load treats comments.

use serde::{Deserialize, Serialize};

/// Main settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Record line layout
    pub record: RecordFormat,
    /// Whether lines starting with `#` are skipped when loading a catalog
    pub skip_comments: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            record: RecordFormat::default(),
            skip_comments: true,
        }
    }
}

impl Settings {
    /// Load settings from JSON, filling missing keys with defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create settings for tab-separated exports
    pub fn tab_separated() -> Self {
        Self {
            record: RecordFormat {
                field_delimiter: '\t',
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Delimiters used in a record line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFormat {
    /// Separator between the eleven fields
    pub field_delimiter: char,
    /// Separator between breed requirement tokens
    pub requirement_separator: char,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            field_delimiter: ',',
            requirement_separator: '+',
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}
