//! Breeding and cloning probabilities
//!
//! Record files write probabilities as `"12.5%"`. Values are kept as hundredths
//! of a percent so they compare and hash exactly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::DragonError;

/// Hundredths of a percent in 100%
const FULL: u16 = 10_000;

/// Probability of a breeding or cloning outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BreedPercentage {
    /// Chance in hundredths of a percent (0-10000)
    Chance(u16),
    /// The outcome cannot happen through this mode
    NotApplicable,
}

impl BreedPercentage {
    /// Create a chance from hundredths of a percent
    pub fn from_hundredths(hundredths: u16) -> Option<Self> {
        (hundredths <= FULL).then_some(BreedPercentage::Chance(hundredths))
    }

    /// Probability as a fraction (0.0-1.0), if applicable
    pub fn probability(&self) -> Option<f64> {
        match self {
            BreedPercentage::Chance(hundredths) => Some(f64::from(*hundredths) / f64::from(FULL)),
            BreedPercentage::NotApplicable => None,
        }
    }

    /// Check if the outcome can happen at all
    pub fn is_possible(&self) -> bool {
        matches!(self, BreedPercentage::Chance(h) if *h > 0)
    }

    fn parse_hundredths(text: &str) -> Option<u16> {
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty()
            || fraction.len() > 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let whole: u32 = whole.parse().ok()?;
        let fraction: u32 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u32>().ok()? * 10,
            _ => fraction.parse().ok()?,
        };

        let hundredths = whole.checked_mul(100)?.checked_add(fraction)?;
        u16::try_from(hundredths).ok().filter(|h| *h <= FULL)
    }
}

impl FromStr for BreedPercentage {
    type Err = DragonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text.eq_ignore_ascii_case("n/a") || text == "-" {
            return Ok(BreedPercentage::NotApplicable);
        }

        let number = text.strip_suffix('%').unwrap_or(text).trim_end();
        Self::parse_hundredths(number)
            .map(BreedPercentage::Chance)
            .ok_or_else(|| DragonError::UnparseableField {
                field: "percentage",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for BreedPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreedPercentage::Chance(hundredths) => {
                let whole = hundredths / 100;
                let fraction = hundredths % 100;
                if fraction == 0 {
                    write!(f, "{}%", whole)
                } else if fraction % 10 == 0 {
                    write!(f, "{}.{}%", whole, fraction / 10)
                } else {
                    write!(f, "{}.{:02}%", whole, fraction)
                }
            }
            BreedPercentage::NotApplicable => f.write_str("N/A"),
        }
    }
}
