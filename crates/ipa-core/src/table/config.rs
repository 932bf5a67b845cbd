use std::collections::HashSet;

use super::Inventory;

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("TOML serialize error: {0}")]
    Serialize(String),
    #[error("{0} table is empty")]
    Empty(&'static str),
    #[error("non-ASCII key in {table}: {key}")]
    NonAsciiKey { table: &'static str, key: String },
    #[error("empty key in {0}")]
    EmptyKey(&'static str),
    #[error("empty value for key {key:?} in {table}")]
    EmptyValue { table: &'static str, key: String },
    #[error("vowel {0:?} is not a segment")]
    UnknownVowel(String),
    #[error("stress mark must be a single character: {0:?}")]
    MultiCharStress(String),
    #[error("symbol tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate an inventory TOML document.
pub fn parse_inventory_toml(toml_str: &str) -> Result<Inventory, TableConfigError> {
    let inv: Inventory =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;
    validate(&inv)?;
    Ok(inv)
}

fn check_pairs(table: &'static str, pairs: &[(String, String)]) -> Result<(), TableConfigError> {
    for (key, value) in pairs {
        if key.is_empty() {
            return Err(TableConfigError::EmptyKey(table));
        }
        if !key.is_ascii() {
            return Err(TableConfigError::NonAsciiKey {
                table,
                key: key.clone(),
            });
        }
        // The value becomes a key of the reverse table.
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn validate(inv: &Inventory) -> Result<(), TableConfigError> {
    if inv.segments.is_empty() {
        return Err(TableConfigError::Empty("segments"));
    }
    check_pairs("segments", &inv.segments)?;
    check_pairs("diacritics", &inv.diacritics)?;
    check_pairs("diacritic_variants", &inv.diacritic_variants)?;
    check_pairs("stress", &inv.stress)?;

    for (mark, _) in &inv.stress {
        if mark.chars().count() != 1 {
            return Err(TableConfigError::MultiCharStress(mark.clone()));
        }
    }

    let nasal = &inv.nasal;
    check_pairs(
        "nasal",
        &[
            (nasal.mark.clone(), nasal.vowel.clone()),
            (nasal.mark.clone(), nasal.consonant.clone()),
        ],
    )?;

    let segment_keys: HashSet<&str> = inv.segments.iter().map(|(a, _)| a.as_str()).collect();
    if let Some(v) = inv.vowels.iter().find(|v| !segment_keys.contains(v.as_str())) {
        return Err(TableConfigError::UnknownVowel(v.clone()));
    }

    Ok(())
}
