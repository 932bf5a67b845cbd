//! Sorted and reversed symbol tables derived from an `Inventory`.
//!
//! Derivation happens once. The global instance lives in a `OnceLock`, so the
//! tables are shared read-only by every scanner in the process.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

use crate::table::{parse_inventory_toml, Inventory, TableConfigError};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Entries in longest-match order: descending key length in characters, then
/// ascending code-point order. Keys are unique.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
}

impl SymbolTable {
    /// Sort `pairs` into match order. When a key repeats, the earliest pair wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        // Empty keys would match without consuming input.
        let mut entries: Vec<(String, String)> =
            pairs.into_iter().filter(|(k, _)| !k.is_empty()).collect();
        // Stable: equal keys keep source order, so dedup keeps the first.
        entries.sort_by(|a, b| {
            (Reverse(a.0.chars().count()), &a.0).cmp(&(Reverse(b.0.chars().count()), &b.0))
        });
        entries.dedup_by(|later, earlier| later.0 == earlier.0);
        Self { entries }
    }

    /// Swap keys and values, keeping source order for de-duplication.
    pub fn inverted<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        Self::from_pairs(pairs.into_iter().map(|(k, v)| (v.clone(), k.clone())))
    }

    /// The first entry, in match order, whose key is a prefix of `input`.
    pub fn longest_match(&self, input: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(key, _)| input.starts_with(key.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Context-dependent rendering of a single mark (the forward tilde).
#[derive(Debug, Clone)]
pub struct NasalSpelling {
    pub mark: String,
    pub after_vowel: String,
    pub after_consonant: String,
}

/// Everything one scan direction reads.
#[derive(Debug, Clone)]
pub struct DirectionTables {
    pub stress: SymbolTable,
    pub segments: SymbolTable,
    pub diacritics: SymbolTable,
    /// Segment forms (on this direction's input side) that are vowels.
    pub vowels: HashSet<String>,
    pub nasal: Option<NasalSpelling>,
}

#[derive(Debug, Clone)]
pub struct Tables {
    forward: DirectionTables,
    reverse: DirectionTables,
}

impl Tables {
    /// Set a custom inventory TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_inventory_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global tables.
    pub fn global() -> &'static Tables {
        static INSTANCE: OnceLock<Tables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let inventory = CUSTOM_TOML
                .get()
                .and_then(|s| parse_inventory_toml(s).ok())
                .unwrap_or_else(Inventory::kirshenbaum);
            Tables::derive(&inventory)
        })
    }

    pub fn derive(inv: &Inventory) -> Self {
        let _span = debug_span!("derive_tables", segments = inv.segments.len()).entered();

        let sorted_segments = SymbolTable::from_pairs(inv.segments.iter().cloned());
        let sorted_diacritics = SymbolTable::from_pairs(inv.diacritics.iter().cloned());
        let reverse_segments = SymbolTable::inverted(&inv.segments);

        let nasal = &inv.nasal;
        let nasal_pairs = [
            (nasal.mark.clone(), nasal.vowel.clone()),
            (nasal.mark.clone(), nasal.consonant.clone()),
        ];
        let reverse_diacritics = SymbolTable::inverted(
            inv.diacritics
                .iter()
                .chain(&inv.diacritic_variants)
                .chain(&nasal_pairs),
        );

        let vowels: HashSet<String> = inv.vowels.iter().cloned().collect();
        let vowel_unicode: HashSet<String> = inv
            .vowels
            .iter()
            .filter_map(|v| sorted_segments.get(v))
            .map(str::to_string)
            .collect();

        debug!(
            forward_segments = sorted_segments.len(),
            reverse_segments = reverse_segments.len(),
            reverse_diacritics = reverse_diacritics.len(),
            "derived symbol tables"
        );

        Tables {
            forward: DirectionTables {
                stress: SymbolTable::from_pairs(inv.stress.iter().cloned()),
                segments: sorted_segments,
                diacritics: sorted_diacritics,
                vowels,
                nasal: Some(NasalSpelling {
                    mark: nasal.mark.clone(),
                    after_vowel: nasal.vowel.clone(),
                    after_consonant: nasal.consonant.clone(),
                }),
            },
            reverse: DirectionTables {
                stress: SymbolTable::inverted(&inv.stress),
                segments: reverse_segments,
                diacritics: reverse_diacritics,
                vowels: vowel_unicode,
                nasal: None,
            },
        }
    }

    /// ASCII → Unicode tables.
    pub fn forward(&self) -> &DirectionTables {
        &self.forward
    }

    /// Unicode → ASCII tables.
    pub fn reverse(&self) -> &DirectionTables {
        &self.reverse
    }

    pub fn sorted_segments(&self) -> &SymbolTable {
        &self.forward.segments
    }

    pub fn sorted_diacritics(&self) -> &SymbolTable {
        &self.forward.diacritics
    }

    pub fn reverse_segments(&self) -> &SymbolTable {
        &self.reverse.segments
    }

    pub fn reverse_diacritics(&self) -> &SymbolTable {
        &self.reverse.diacritics
    }

    pub fn vowel_unicode_set(&self) -> &HashSet<String> {
        &self.reverse.vowels
    }
}
