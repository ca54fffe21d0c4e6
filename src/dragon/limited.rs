//! Availability classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dragon can currently be obtained
///
/// Parsing never fails: unrecognized text becomes [`Limited::Unknown`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Limited {
    /// Breedable at any time
    Available,
    /// Only breedable during an event window
    Limited,
    /// Not breedable right now
    Unavailable,
    #[default]
    Unknown,
}

impl Limited {
    /// Parse availability text, case-insensitively
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "available" => Limited::Available,
            "limited" => Limited::Limited,
            "unavailable" => Limited::Unavailable,
            _ => Limited::Unknown,
        }
    }

    /// Display name, as written in record files
    pub fn as_str(&self) -> &'static str {
        match self {
            Limited::Available => "Available",
            Limited::Limited => "Limited",
            Limited::Unavailable => "Unavailable",
            Limited::Unknown => "Unknown",
        }
    }

    /// Check if this availability forbids breeding
    pub fn vetoes_breeding(&self) -> bool {
        matches!(self, Limited::Unavailable)
    }
}

impl From<&str> for Limited {
    fn from(text: &str) -> Self {
        Limited::parse(text)
    }
}

impl fmt::Display for Limited {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
