//! Dragon elements and their abbreviation codes
//!
//! Every dragon carries one or more elements. Primary elements are written as a
//! single uppercase letter, epic elements as a fixed one- or two-letter code.
//! Record files concatenate the codes with no delimiter (`"PFAp"`).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// The ten primary elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PrimaryElement {
    Plant,
    Fire,
    Earth,
    Cold,
    Lightning,
    Water,
    Air,
    Metal,
    Light,
    Dark,
}

impl PrimaryElement {
    /// All primary elements in canonical order
    pub const ALL: [PrimaryElement; 10] = [
        PrimaryElement::Plant,
        PrimaryElement::Fire,
        PrimaryElement::Earth,
        PrimaryElement::Cold,
        PrimaryElement::Lightning,
        PrimaryElement::Water,
        PrimaryElement::Air,
        PrimaryElement::Metal,
        PrimaryElement::Light,
        PrimaryElement::Dark,
    ];

    /// Record-file abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            PrimaryElement::Plant => "P",
            PrimaryElement::Fire => "F",
            PrimaryElement::Earth => "E",
            PrimaryElement::Cold => "C",
            PrimaryElement::Lightning => "L",
            PrimaryElement::Water => "W",
            PrimaryElement::Air => "A",
            PrimaryElement::Metal => "M",
            // "L" is taken by lightning
            PrimaryElement::Light => "I",
            PrimaryElement::Dark => "D",
        }
    }
}

/// The twenty-one epic elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EpicElement {
    Rift,
    Apocalypse,
    Aura,
    Chrysalis,
    Crystalline,
    Dream,
    Galaxy,
    Gemstone,
    Hidden,
    Melody,
    Monolith,
    Moon,
    Olympus,
    Ornamental,
    Rainbow,
    Seasonal,
    Snowflake,
    Sun,
    Surface,
    Treasure,
    Zodiac,
}

impl EpicElement {
    /// All epic elements in canonical order
    pub const ALL: [EpicElement; 21] = [
        EpicElement::Rift,
        EpicElement::Apocalypse,
        EpicElement::Aura,
        EpicElement::Chrysalis,
        EpicElement::Crystalline,
        EpicElement::Dream,
        EpicElement::Galaxy,
        EpicElement::Gemstone,
        EpicElement::Hidden,
        EpicElement::Melody,
        EpicElement::Monolith,
        EpicElement::Moon,
        EpicElement::Olympus,
        EpicElement::Ornamental,
        EpicElement::Rainbow,
        EpicElement::Seasonal,
        EpicElement::Snowflake,
        EpicElement::Sun,
        EpicElement::Surface,
        EpicElement::Treasure,
        EpicElement::Zodiac,
    ];

    /// Record-file abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            EpicElement::Rift => "R",
            EpicElement::Apocalypse => "Ap",
            EpicElement::Aura => "Au",
            EpicElement::Chrysalis => "Ch",
            EpicElement::Crystalline => "Cr",
            EpicElement::Dream => "Dr",
            EpicElement::Galaxy => "Ga",
            EpicElement::Gemstone => "Ge",
            EpicElement::Hidden => "Hi",
            EpicElement::Melody => "Me",
            EpicElement::Monolith => "Mh",
            EpicElement::Moon => "Mo",
            EpicElement::Olympus => "Ol",
            EpicElement::Ornamental => "Or",
            EpicElement::Rainbow => "Rb",
            EpicElement::Seasonal => "Se",
            EpicElement::Snowflake => "Sn",
            EpicElement::Sun => "Su",
            EpicElement::Surface => "Sf",
            EpicElement::Treasure => "Tr",
            EpicElement::Zodiac => "Zo",
        }
    }
}

/// An element a dragon can carry
///
/// Ordering puts every primary element before every epic element, each group
/// in its canonical order. Serialized element strings follow this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DragonElement {
    Primary(PrimaryElement),
    Epic(EpicElement),
}

static ELEMENT_CODES: Lazy<HashMap<&'static str, DragonElement>> =
    Lazy::new(|| DragonElement::all().map(|e| (e.code(), e)).collect());

impl DragonElement {
    /// Iterate over every element in canonical order
    pub fn all() -> impl Iterator<Item = DragonElement> {
        PrimaryElement::ALL
            .into_iter()
            .map(DragonElement::Primary)
            .chain(EpicElement::ALL.into_iter().map(DragonElement::Epic))
    }

    /// Resolve an abbreviation code (`"F"`, `"Ap"`) to an element
    pub fn from_code(code: &str) -> Option<Self> {
        ELEMENT_CODES.get(code).copied()
    }

    /// Record-file abbreviation
    pub fn code(&self) -> &'static str {
        match self {
            DragonElement::Primary(primary) => primary.code(),
            DragonElement::Epic(epic) => epic.code(),
        }
    }

    /// Check if this is a primary element
    pub fn is_primary(&self) -> bool {
        matches!(self, DragonElement::Primary(_))
    }
}

impl From<PrimaryElement> for DragonElement {
    fn from(primary: PrimaryElement) -> Self {
        DragonElement::Primary(primary)
    }
}

impl From<EpicElement> for DragonElement {
    fn from(epic: EpicElement) -> Self {
        DragonElement::Epic(epic)
    }
}

impl fmt::Display for DragonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Decode a concatenated element tag string such as `"PFApAu"`
///
/// Characters accumulate into a candidate tag. When an uppercase character
/// arrives and the accumulation so far resolves to a known code, that element
/// is committed and the uppercase character starts the next tag. Otherwise the
/// character is appended and scanning continues. Unresolvable text is dropped.
pub fn parse_element_tags(tags: &str) -> BTreeSet<DragonElement> {
    let mut elements = BTreeSet::new();
    let mut tag = String::new();

    for c in tags.chars() {
        if c.is_uppercase() && !tag.is_empty() {
            if let Some(element) = DragonElement::from_code(&tag) {
                elements.insert(element);
                tag.clear();
            }
        }
        tag.push(c);
    }

    if let Some(element) = DragonElement::from_code(&tag) {
        elements.insert(element);
    }

    elements
}

/// Encode elements as concatenated codes, in canonical element order
pub fn element_tags<'a>(elements: impl IntoIterator<Item = &'a DragonElement>) -> String {
    let mut sorted: Vec<&DragonElement> = elements.into_iter().collect();
    sorted.sort();
    sorted.into_iter().map(DragonElement::code).collect()
}
