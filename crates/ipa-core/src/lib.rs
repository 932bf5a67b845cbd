//! Kirshenbaum ASCII-IPA ⇄ Unicode IPA transliteration.
//!
//! ```
//! assert_eq!(ipa_core::ascii_to_unicode("'sEkrItri"), "ˈsɛkɹɪtɹi");
//! assert_eq!(ipa_core::unicode_to_ascii("θ"), "T");
//! ```

pub mod derive;
pub mod scan;
pub mod table;

pub use derive::{SymbolTable, Tables};
pub use scan::{
    ascii_to_unicode, transliterate, unicode_to_ascii, Context, Direction, Scanner, Token,
    TokenKind, Transliteration,
};
pub use table::{parse_inventory_toml, Inventory, NasalRule, TableConfigError};
