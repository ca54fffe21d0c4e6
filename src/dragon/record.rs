//! The dragon record
//!
//! A record line holds eleven fields:
//!
//! ```text
//! name,limited,rarity,elements,requirements,breed time,breed%,clone social%,clone normal%,clone rift%,quest
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::breeding::BreedInformation;
use super::element::{element_tags, parse_element_tags, DragonElement, PrimaryElement};
use super::limited::Limited;
use super::percentage::BreedPercentage;
use super::rarity::Rarity;
use super::requirement::{join_breed_requirements, parse_breed_requirements, BreedRequirement};
use super::DragonError;
use crate::config::RecordFormat;

/// Number of fields in a record line
pub const FIELD_COUNT: usize = 11;

/// One catalog entry
///
/// Equality and hashing cover every field. Ordering is by name first; the
/// remaining fields only break ties between same-named records. `limited` is
/// the only field that can change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dragon {
    name: String,
    limited: Limited,
    rarity: Rarity,
    elements: BTreeSet<DragonElement>,
    breed_requirements: BTreeSet<BreedRequirement>,
    breed_time: String,
    breed_percentage: BreedPercentage,
    clone_social_percentage: BreedPercentage,
    clone_normal_percentage: BreedPercentage,
    clone_rift_percentage: BreedPercentage,
    quest: String,
}

impl Dragon {
    /// Create a dragon with no elements, requirements or quest
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            limited: Limited::default(),
            rarity,
            elements: BTreeSet::new(),
            breed_requirements: BTreeSet::new(),
            breed_time: String::new(),
            breed_percentage: BreedPercentage::NotApplicable,
            clone_social_percentage: BreedPercentage::NotApplicable,
            clone_normal_percentage: BreedPercentage::NotApplicable,
            clone_rift_percentage: BreedPercentage::NotApplicable,
            quest: String::new(),
        }
    }

    pub fn with_limited(mut self, limited: Limited) -> Self {
        self.limited = limited;
        self
    }

    pub fn with_elements(mut self, elements: impl IntoIterator<Item = DragonElement>) -> Self {
        self.elements = elements.into_iter().collect();
        self
    }

    pub fn with_breed_requirements(
        mut self,
        requirements: impl IntoIterator<Item = BreedRequirement>,
    ) -> Self {
        self.breed_requirements = requirements.into_iter().collect();
        self
    }

    pub fn with_breed_time(mut self, breed_time: impl Into<String>) -> Self {
        self.breed_time = breed_time.into();
        self
    }

    /// Set the breed, clone social, clone normal and clone rift percentages
    pub fn with_percentages(
        mut self,
        breed: BreedPercentage,
        clone_social: BreedPercentage,
        clone_normal: BreedPercentage,
        clone_rift: BreedPercentage,
    ) -> Self {
        self.breed_percentage = breed;
        self.clone_social_percentage = clone_social;
        self.clone_normal_percentage = clone_normal;
        self.clone_rift_percentage = clone_rift;
        self
    }

    pub fn with_quest(mut self, quest: impl Into<String>) -> Self {
        self.quest = quest.into();
        self
    }

    /// Build a dragon from the eleven pre-split fields of a record
    pub fn try_from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, DragonError> {
        Self::try_from_fields_with(fields, &RecordFormat::default())
    }

    /// Build a dragon from pre-split fields using a custom record format
    pub fn try_from_fields_with<S: AsRef<str>>(
        fields: &[S],
        format: &RecordFormat,
    ) -> Result<Self, DragonError> {
        let [name, limited, rarity, elements, requirements, breed_time, breed, clone_social, clone_normal, clone_rift, quest] =
            fields
        else {
            return Err(DragonError::MalformedRecord {
                found: fields.len(),
            });
        };

        let field = |value: &S| value.as_ref().trim().to_string();
        let percentage = |value: &S, label: &'static str| {
            value
                .as_ref()
                .parse::<BreedPercentage>()
                .map_err(|e| e.relabel(label))
        };

        Ok(Self {
            name: field(name),
            limited: Limited::parse(limited.as_ref()),
            rarity: rarity.as_ref().parse()?,
            elements: parse_element_tags(elements.as_ref().trim()),
            breed_requirements: parse_breed_requirements(
                requirements.as_ref(),
                format.requirement_separator,
            ),
            breed_time: field(breed_time),
            breed_percentage: percentage(breed, "breed percentage")?,
            clone_social_percentage: percentage(clone_social, "clone social percentage")?,
            clone_normal_percentage: percentage(clone_normal, "clone normal percentage")?,
            clone_rift_percentage: percentage(clone_rift, "clone rift percentage")?,
            quest: field(quest),
        })
    }

    /// Parse one record line using a custom record format
    pub fn parse_line_with(line: &str, format: &RecordFormat) -> Result<Self, DragonError> {
        let fields: Vec<&str> = line.split(format.field_delimiter).collect();
        Self::try_from_fields_with(&fields, format)
    }

    /// Build a dragon from pre-split fields, logging and discarding bad records
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        match Self::try_from_fields(fields) {
            Ok(dragon) => Some(dragon),
            Err(e) => {
                let fields: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
                log::warn!("Rejected dragon record {:?}: {}", fields, e);
                None
            }
        }
    }

    /// Parse one record line, logging and discarding bad records
    pub fn from_line(line: &str) -> Option<Self> {
        match line.parse() {
            Ok(dragon) => Some(dragon),
            Err(e) => {
                log::warn!("Rejected dragon record {:?}: {}", line, e);
                None
            }
        }
    }

    /// Serialize back to a record line using a custom record format
    pub fn to_record(&self, format: &RecordFormat) -> String {
        let fields = [
            self.name.clone(),
            self.limited.to_string(),
            self.rarity.to_string(),
            element_tags(&self.elements),
            join_breed_requirements(&self.breed_requirements, format.requirement_separator),
            self.breed_time.clone(),
            self.breed_percentage.to_string(),
            self.clone_social_percentage.to_string(),
            self.clone_normal_percentage.to_string(),
            self.clone_rift_percentage.to_string(),
            self.quest.clone(),
        ];
        fields.join(format.field_delimiter.to_string().as_str())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn limited(&self) -> Limited {
        self.limited
    }

    /// Update availability in place
    pub fn set_limited(&mut self, limited: Limited) {
        self.limited = limited;
    }

    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    pub fn elements(&self) -> &BTreeSet<DragonElement> {
        &self.elements
    }

    pub fn breed_requirements(&self) -> &BTreeSet<BreedRequirement> {
        &self.breed_requirements
    }

    pub fn breed_time(&self) -> &str {
        &self.breed_time
    }

    pub fn breed_percentage(&self) -> BreedPercentage {
        self.breed_percentage
    }

    pub fn clone_social_percentage(&self) -> BreedPercentage {
        self.clone_social_percentage
    }

    pub fn clone_normal_percentage(&self) -> BreedPercentage {
        self.clone_normal_percentage
    }

    pub fn clone_rift_percentage(&self) -> BreedPercentage {
        self.clone_rift_percentage
    }

    /// Quest needed to obtain the dragon, if any
    pub fn quest(&self) -> Option<&str> {
        (!self.quest.is_empty()).then_some(self.quest.as_str())
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn has_element(&self, element: DragonElement) -> bool {
        self.elements.contains(&element)
    }

    /// Check if the dragon carries every listed element
    pub fn has_elements(&self, elements: &[DragonElement]) -> bool {
        elements.iter().all(|e| self.has_element(*e))
    }

    /// The primary elements this dragon carries
    pub fn primary_elements(&self) -> BTreeSet<PrimaryElement> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                DragonElement::Primary(primary) => Some(*primary),
                DragonElement::Epic(_) => None,
            })
            .collect()
    }

    /// Check if a breed attempt can produce this dragon
    ///
    /// Every requirement must be met by the attempt. Special requirements are
    /// not checked here. Unbreedable and unavailable dragons never qualify.
    pub fn is_breed_result(&self, info: &BreedInformation) -> bool {
        if self.limited.vetoes_breeding() {
            return false;
        }

        for requirement in &self.breed_requirements {
            match requirement {
                BreedRequirement::Dragon(_) | BreedRequirement::DragonElement(_) => {
                    if !info.contains(requirement) {
                        return false;
                    }
                }
                BreedRequirement::ElementCount(count) => {
                    if *count > info.element_count {
                        return false;
                    }
                }
                BreedRequirement::Unbreedable => return false,
                BreedRequirement::SpecialRequirement => {}
            }
        }

        true
    }

    /// Components this dragon contributes as a breeding parent
    pub fn breed_components(&self) -> BTreeSet<BreedRequirement> {
        std::iter::once(BreedRequirement::Dragon(self.name.clone()))
            .chain(
                self.elements
                    .iter()
                    .map(|e| BreedRequirement::DragonElement(*e)),
            )
            .collect()
    }

    /// Check if this dragon alone satisfies every listed requirement
    pub fn satisfies_breed_requirements<'a>(
        &self,
        requirements: impl IntoIterator<Item = &'a BreedRequirement>,
    ) -> bool {
        requirements
            .into_iter()
            .all(|requirement| self.satisfies_breed_requirement(requirement))
    }

    /// Check a single requirement against this dragon
    ///
    /// Only dragon and element requirements are inspected; other kinds pass.
    pub fn satisfies_breed_requirement(&self, requirement: &BreedRequirement) -> bool {
        match requirement {
            BreedRequirement::Dragon(name) => self.has_name(name),
            BreedRequirement::DragonElement(element) => self.has_element(*element),
            _ => true,
        }
    }
}

impl FromStr for Dragon {
    type Err = DragonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line_with(s, &RecordFormat::default())
    }
}

impl fmt::Display for Dragon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_record(&RecordFormat::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dragon::element::EpicElement;
    use std::collections::HashSet;

    const FIRE: DragonElement = DragonElement::Primary(PrimaryElement::Fire);
    const EARTH: DragonElement = DragonElement::Primary(PrimaryElement::Earth);
    const SUN: DragonElement = DragonElement::Epic(EpicElement::Sun);

    fn info(components: &[BreedRequirement], element_count: u8) -> BreedInformation {
        BreedInformation::new(components.iter().cloned().collect(), element_count)
    }

    #[test]
    fn test_parse_line() {
        let dragon: Dragon = "Sunburst,Available,Epic,FSu,Fire+Su+3,1d 12h,5%,N/A,2.5%,-,"
            .parse()
            .unwrap();

        assert_eq!(dragon.name(), "Sunburst");
        assert_eq!(dragon.limited(), Limited::Available);
        assert_eq!(dragon.rarity(), Rarity::Epic);
        assert!(dragon.has_elements(&[FIRE, SUN]));
        assert_eq!(dragon.breed_requirements().len(), 3);
        assert_eq!(dragon.breed_time(), "1d 12h");
        assert_eq!(dragon.breed_percentage(), BreedPercentage::Chance(500));
        assert_eq!(
            dragon.clone_social_percentage(),
            BreedPercentage::NotApplicable
        );
        assert_eq!(dragon.clone_normal_percentage(), BreedPercentage::Chance(250));
        assert_eq!(dragon.quest(), None);
    }

    #[test]
    fn test_round_trip() {
        let line = "Solstice,Limited,Legendary,SuFI,Sun+special+5+I+Fire,2d,0.5%,1%,10%,N/A,Summer quest";
        let dragon: Dragon = line.parse().unwrap();
        let serialized = dragon.to_string();

        assert_eq!(
            serialized,
            "Solstice,Limited,Legendary,FISu,Fire+Sun+I+5+special,2d,0.5%,1%,10%,N/A,Summer quest"
        );
        assert_eq!(serialized.parse::<Dragon>().unwrap(), dragon);
    }

    #[test]
    fn test_wrong_field_count() {
        let fields = ["Neon", "Available", "Epic", "P", "", "1h", "5%", "5%", "5%", "5%"];
        assert_eq!(
            Dragon::try_from_fields(&fields),
            Err(DragonError::MalformedRecord { found: 10 })
        );
        assert!(Dragon::from_fields(&fields).is_none());
        assert!(Dragon::from_line("Neon,Available").is_none());
    }

    #[test]
    fn test_invalid_percentage() {
        let line = "Neon,Available,Epic,P,,1h,invalid,5%,5%,5%,";
        assert_eq!(
            line.parse::<Dragon>(),
            Err(DragonError::UnparseableField {
                field: "breed percentage",
                value: "invalid".to_string()
            })
        );
        assert!(Dragon::from_line(line).is_none());
    }

    #[test]
    fn test_invalid_percentage_each_field() {
        let labels = [
            (6, "breed percentage"),
            (7, "clone social percentage"),
            (8, "clone normal percentage"),
            (9, "clone rift percentage"),
        ];

        for (index, label) in labels {
            let mut fields = ["A", "Available", "Rare", "F", "", "", "1%", "1%", "1%", "1%", ""];
            fields[index] = "invalid";
            let line = fields.join(",");

            assert_eq!(
                Dragon::try_from_fields(&fields),
                Err(DragonError::UnparseableField {
                    field: label,
                    value: "invalid".to_string()
                })
            );
            assert!(Dragon::from_line(&line).is_none(), "{line:?} should be rejected");
        }
    }

    #[test]
    fn test_invalid_rarity() {
        assert!(Dragon::from_line("Neon,Available,Shiny,P,,1h,5%,5%,5%,5%,").is_none());
    }

    #[test]
    fn test_unbreedable_never_result() {
        let fields = [
            "Neon",
            "Available",
            "Epic",
            "NeonPEACLWAMID",
            "unbreedable",
            "1h",
            "5%",
            "5%",
            "5%",
            "5%",
            "",
        ];
        let dragon = Dragon::from_fields(&fields).unwrap();
        let everything: Vec<_> = DragonElement::all()
            .map(BreedRequirement::DragonElement)
            .collect();

        assert!(!dragon.is_breed_result(&info(&everything, 10)));
        assert!(!dragon.is_breed_result(&BreedInformation::default()));
    }

    #[test]
    fn test_breed_result_requirements() {
        let magma = Dragon::new("Magma", Rarity::Common)
            .with_limited(Limited::Available)
            .with_breed_requirements([
                BreedRequirement::DragonElement(FIRE),
                BreedRequirement::DragonElement(EARTH),
                BreedRequirement::ElementCount(2),
                BreedRequirement::SpecialRequirement,
            ]);

        let fire = BreedRequirement::DragonElement(FIRE);
        let earth = BreedRequirement::DragonElement(EARTH);

        assert!(magma.is_breed_result(&info(&[fire.clone(), earth.clone()], 2)));
        assert!(magma.is_breed_result(&info(&[fire.clone(), earth.clone()], 3)));
        assert!(!magma.is_breed_result(&info(&[fire.clone(), earth], 1)));
        assert!(!magma.is_breed_result(&info(&[fire], 2)));
    }

    #[test]
    fn test_unavailable_vetoes_breeding() {
        let mut plant = Dragon::new("Plant", Rarity::Common);
        assert!(plant.is_breed_result(&BreedInformation::default()));

        plant.set_limited(Limited::Unavailable);
        assert!(!plant.is_breed_result(&BreedInformation::default()));
    }

    #[test]
    fn test_dragon_requirement() {
        let rainbow = Dragon::new("Double Rainbow", Rarity::Epic)
            .with_breed_requirements([BreedRequirement::Dragon("Rainbow".to_string())]);

        let with_parent = info(&[BreedRequirement::Dragon("Rainbow".to_string())], 2);
        assert!(rainbow.is_breed_result(&with_parent));
        assert!(!rainbow.is_breed_result(&info(&[], 10)));
    }

    #[test]
    fn test_breed_components() {
        let dragon = Dragon::new("Sunburst", Rarity::Epic).with_elements([FIRE, SUN]);
        let components = dragon.breed_components();

        assert!(components.contains(&BreedRequirement::Dragon("Sunburst".to_string())));
        assert!(components.contains(&BreedRequirement::DragonElement(SUN)));
        assert_eq!(components.len(), 3);
        assert!(Dragon::new("Bare", Rarity::Common)
            .breed_components()
            .contains(&BreedRequirement::Dragon("Bare".to_string())));
    }

    #[test]
    fn test_satisfies_breed_requirements() {
        let dragon = Dragon::new("Magma", Rarity::Common)
            .with_limited(Limited::Unavailable)
            .with_elements([FIRE, EARTH]);

        let requirements: BTreeSet<_> = [
            BreedRequirement::Dragon("Magma".to_string()),
            BreedRequirement::DragonElement(FIRE),
            BreedRequirement::ElementCount(9),
            BreedRequirement::Unbreedable,
        ]
        .into_iter()
        .collect();
        assert!(dragon.satisfies_breed_requirements(&requirements));
        assert!(!dragon.satisfies_breed_requirement(&BreedRequirement::Dragon(
            "Lava".to_string()
        )));
        assert!(!dragon.satisfies_breed_requirement(&BreedRequirement::DragonElement(SUN)));
    }

    #[test]
    fn test_element_queries() {
        let dragon = Dragon::new("Sunburst", Rarity::Epic).with_elements([FIRE, SUN]);

        assert!(dragon.has_elements(&[]));
        assert!(!dragon.has_elements(&[FIRE, EARTH]));
        assert_eq!(
            dragon.primary_elements(),
            BTreeSet::from([PrimaryElement::Fire])
        );
    }

    #[test]
    fn test_ordering_by_name() {
        let aqua = Dragon::new("Aqua", Rarity::Mythic);
        let zephyr = Dragon::new("Zephyr", Rarity::Common);
        assert!(aqua < zephyr);
    }

    #[test]
    fn test_structural_equality() {
        let a = Dragon::new("Fire", Rarity::Common);
        let b = a.clone().with_quest("Light the forge");

        assert_ne!(a, b);
        let set: HashSet<_> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_builder_serialization() {
        let dragon = Dragon::new("Blue Moon", Rarity::Epic)
            .with_limited(Limited::Limited)
            .with_elements([DragonElement::Epic(EpicElement::Moon), EARTH])
            .with_breed_requirements([
                BreedRequirement::ElementCount(3),
                BreedRequirement::Dragon("Moon".to_string()),
            ])
            .with_breed_time("1d")
            .with_percentages(
                BreedPercentage::Chance(325),
                BreedPercentage::Chance(5_000),
                BreedPercentage::NotApplicable,
                BreedPercentage::Chance(0),
            )
            .with_quest("Night watch");

        assert_eq!(
            dragon.to_string(),
            "Blue Moon,Limited,Epic,EMo,Moon+3,1d,3.25%,50%,N/A,0%,Night watch"
        );
        assert_eq!(Dragon::from_line(&dragon.to_string()), Some(dragon));
    }

    #[test]
    fn test_serde_json() {
        let dragon = Dragon::new("Fire", Rarity::Common).with_elements([FIRE]);
        let json = serde_json::to_string(&dragon).unwrap();
        let back: Dragon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dragon);
    }
}
