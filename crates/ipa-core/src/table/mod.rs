//! Literal ASCII-IPA ↔ Unicode IPA correspondence data.
//!
//! An `Inventory` is the forward (ASCII → Unicode) description of a notation.
//! `Tables::derive` turns it into the sorted forward and reverse views the
//! scanners consume.

mod config;
mod default;

pub use config::{parse_inventory_toml, TableConfigError};

use serde::{Deserialize, Serialize};

/// How the nasalization mark renders, depending on the preceding segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NasalRule {
    pub mark: String,
    pub vowel: String,
    pub consonant: String,
}

/// Forward correspondence lists, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// ASCII forms of the segments that count as vowels.
    pub vowels: Vec<String>,
    pub segments: Vec<(String, String)>,
    pub diacritics: Vec<(String, String)>,
    /// Alternative Unicode spellings accepted when reading Unicode input.
    #[serde(default)]
    pub diacritic_variants: Vec<(String, String)>,
    pub stress: Vec<(String, String)>,
    pub nasal: NasalRule,
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, u)| (a.to_string(), u.to_string()))
        .collect()
}

impl Inventory {
    /// The built-in Kirshenbaum inventory.
    pub fn kirshenbaum() -> Self {
        Self {
            vowels: default::VOWELS.iter().map(|v| v.to_string()).collect(),
            segments: owned(default::SEGMENTS),
            diacritics: owned(default::DIACRITICS),
            diacritic_variants: owned(default::DIACRITIC_VARIANTS),
            stress: owned(default::STRESS),
            nasal: NasalRule {
                mark: default::NASAL_MARK.to_string(),
                vowel: default::NASAL_AFTER_VOWEL.to_string(),
                consonant: default::NASAL_AFTER_CONSONANT.to_string(),
            },
        }
    }

    /// Serialize as TOML in the format accepted by `parse_inventory_toml`.
    pub fn to_toml(&self) -> Result<String, TableConfigError> {
        toml::to_string_pretty(self).map_err(|e| TableConfigError::Serialize(e.to_string()))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::kirshenbaum()
    }
}
