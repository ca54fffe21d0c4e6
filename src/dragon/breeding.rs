//! Breed attempt description

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::record::Dragon;
use super::requirement::BreedRequirement;

/// What a pair of parents brings to a breed attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedInformation {
    /// Parent names and elements, as requirement tokens
    pub breed_components: BTreeSet<BreedRequirement>,
    /// Number of distinct primary elements across both parents
    pub element_count: u8,
}

impl BreedInformation {
    /// Create breed information from explicit parts
    pub fn new(breed_components: BTreeSet<BreedRequirement>, element_count: u8) -> Self {
        Self {
            breed_components,
            element_count,
        }
    }

    /// Describe breeding two parents together
    pub fn from_parents(first: &Dragon, second: &Dragon) -> Self {
        let mut breed_components = first.breed_components();
        breed_components.extend(second.breed_components());

        let mut primaries = first.primary_elements();
        primaries.extend(second.primary_elements());

        Self {
            breed_components,
            // At most ten primary elements exist
            element_count: u8::try_from(primaries.len()).unwrap_or(u8::MAX),
        }
    }

    /// Check if the attempt includes a component
    pub fn contains(&self, component: &BreedRequirement) -> bool {
        self.breed_components.contains(component)
    }
}
