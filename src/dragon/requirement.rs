//! Breeding requirements
//!
//! A requirement string joins tokens with `+`, e.g. `"Rainbow+Su+4"`: breed
//! with a Rainbow dragon, include the sun element, and bring at least four
//! distinct primary elements.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::element::DragonElement;

const UNBREEDABLE: &str = "unbreedable";
const SPECIAL: &str = "special";

/// One precondition for breeding a dragon
///
/// The same type describes what a parent contributes to a breed attempt
/// (see [`super::Dragon::breed_components`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BreedRequirement {
    /// A specific dragon must be one of the parents
    Dragon(String),
    /// A parent must carry this element
    DragonElement(DragonElement),
    /// The parents must bring at least this many distinct primary elements
    ElementCount(u8),
    /// Cannot be bred at all
    Unbreedable,
    /// Needs something outside the breeding pair (island, event, ...)
    SpecialRequirement,
}

impl BreedRequirement {
    /// Parse a single requirement token
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let first = token.chars().next()?;

        if token.bytes().all(|b| b.is_ascii_digit()) {
            return token.parse().ok().map(BreedRequirement::ElementCount);
        }
        if let Some(element) = DragonElement::from_code(token) {
            return Some(BreedRequirement::DragonElement(element));
        }
        if token.eq_ignore_ascii_case(UNBREEDABLE) {
            return Some(BreedRequirement::Unbreedable);
        }
        if token.eq_ignore_ascii_case(SPECIAL) {
            return Some(BreedRequirement::SpecialRequirement);
        }
        // Dragon names are capitalized
        if first.is_uppercase() {
            return Some(BreedRequirement::Dragon(token.to_string()));
        }

        None
    }
}

impl fmt::Display for BreedRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedRequirement::Dragon(name) => f.write_str(name),
            BreedRequirement::DragonElement(element) => f.write_str(element.code()),
            BreedRequirement::ElementCount(count) => write!(f, "{}", count),
            BreedRequirement::Unbreedable => f.write_str(UNBREEDABLE),
            BreedRequirement::SpecialRequirement => f.write_str(SPECIAL),
        }
    }
}

/// Parse a separator-joined requirement string, dropping unrecognized tokens
pub fn parse_breed_requirements(text: &str, separator: char) -> BTreeSet<BreedRequirement> {
    text.split(separator)
        .filter_map(|token| {
            let requirement = BreedRequirement::parse(token);
            if requirement.is_none() && !token.trim().is_empty() {
                log::debug!("Dropping unrecognized breed requirement {:?}", token);
            }
            requirement
        })
        .collect()
}

/// Join requirements with the separator, in requirement order
pub fn join_breed_requirements(
    requirements: &BTreeSet<BreedRequirement>,
    separator: char,
) -> String {
    requirements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator.to_string().as_str())
}
