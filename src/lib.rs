//! Dragon Dex - DragonVale catalog records and breeding predicates
//!
//! This library parses dragon catalog records from delimited text lines,
//! serializes them back to a canonical form, and answers breeding questions:
//! which dragons a pair of parents can produce, and which requirements a
//! single dragon satisfies.
//!
//! Reading files is left to the caller; everything here works on lines that
//! are already in memory.

pub mod config;
pub mod dragon;

use std::collections::BTreeMap;

use crate::config::Settings;
use crate::dragon::{BreedInformation, Dragon, Limited};

/// In-memory dragon catalog keyed by name
#[derive(Debug, Clone, Default)]
pub struct Dex {
    dragons: BTreeMap<String, Dragon>,
    settings: Settings,
    rejected: usize,
}

impl Dex {
    /// Create an empty catalog with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            dragons: BTreeMap::new(),
            settings,
            rejected: 0,
        }
    }

    /// Build a catalog from record lines
    ///
    /// Blank lines are skipped, as are `#` comments when the settings ask for
    /// it. Malformed records are logged and counted but do not stop the load.
    pub fn from_records<'a>(lines: impl IntoIterator<Item = &'a str>, settings: Settings) -> Self {
        let mut dex = Self::new(settings);

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() || (dex.settings.skip_comments && trimmed.starts_with('#')) {
                continue;
            }

            match Dragon::parse_line_with(line, &dex.settings.record) {
                Ok(dragon) => {
                    if let Some(previous) = dex.insert(dragon) {
                        log::warn!("Duplicate dragon {:?} replaced", previous.name());
                    }
                }
                Err(e) => {
                    log::warn!("Rejected dragon record {:?}: {}", line, e);
                    dex.rejected += 1;
                }
            }
        }

        log::info!(
            "Loaded {} dragons ({} records rejected)",
            dex.len(),
            dex.rejected
        );
        dex
    }

    /// Add a dragon, returning the record it replaced
    pub fn insert(&mut self, dragon: Dragon) -> Option<Dragon> {
        self.dragons.insert(dragon.name().to_string(), dragon)
    }

    /// Look up a dragon by name
    pub fn get(&self, name: &str) -> Option<&Dragon> {
        self.dragons.get(name)
    }

    pub fn len(&self) -> usize {
        self.dragons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dragons.is_empty()
    }

    /// Number of records rejected while loading
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Iterate over dragons in name order
    pub fn iter(&self) -> impl Iterator<Item = &Dragon> {
        self.dragons.values()
    }

    /// Update a dragon's availability, returning false if it is unknown
    pub fn set_limited(&mut self, name: &str, limited: Limited) -> bool {
        match self.dragons.get_mut(name) {
            Some(dragon) => {
                dragon.set_limited(limited);
                true
            }
            None => false,
        }
    }

    /// Every dragon that breeding the two parents can produce, in name order
    pub fn breed(&self, first: &str, second: &str) -> Result<Vec<&Dragon>, DexError> {
        let first = self.lookup(first)?;
        let second = self.lookup(second)?;
        let info = BreedInformation::from_parents(first, second);

        Ok(self.iter().filter(|d| d.is_breed_result(&info)).collect())
    }

    /// Canonical record lines for every dragon, in name order
    pub fn to_records(&self) -> Vec<String> {
        self.iter()
            .map(|d| d.to_record(&self.settings.record))
            .collect()
    }

    fn lookup(&self, name: &str) -> Result<&Dragon, DexError> {
        self.get(name)
            .ok_or_else(|| DexError::UnknownDragon(name.to_string()))
    }
}

/// Catalog errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DexError {
    #[error("Unknown dragon: {0}")]
    UnknownDragon(String),
}
