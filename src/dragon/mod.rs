//! Dragon records and breeding logic
//!
//! This module contains the catalog record for a single dragon along with the
//! small value types it is built from: elements, rarity, availability,
//! breeding requirements and percentages.

pub mod breeding;
pub mod element;
pub mod limited;
pub mod percentage;
pub mod rarity;
pub mod record;
pub mod requirement;

pub use breeding::BreedInformation;
pub use element::{DragonElement, EpicElement, PrimaryElement};
pub use limited::Limited;
pub use percentage::BreedPercentage;
pub use rarity::Rarity;
pub use record::{Dragon, FIELD_COUNT};
pub use requirement::BreedRequirement;

/// Record parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragonError {
    #[error("Expected {expected} fields, found {found}", expected = FIELD_COUNT)]
    MalformedRecord { found: usize },
    #[error("Unrecognized {field}: {value:?}")]
    UnparseableField { field: &'static str, value: String },
}

impl DragonError {
    /// Attach a more specific field name to an unparseable field error
    pub(crate) fn relabel(self, label: &'static str) -> Self {
        match self {
            DragonError::UnparseableField { value, .. } => {
                DragonError::UnparseableField { field: label, value }
            }
            other => other,
        }
    }
}
