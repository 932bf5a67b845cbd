//! Forward (ASCII → Unicode) and reverse (Unicode → ASCII) scanning.
//!
//! Both directions run the same greedy scanner over different tables. The
//! scanners never fail: anything that matches no table is copied through one
//! character at a time.

mod scanner;
#[cfg(test)]
mod tests;

pub use scanner::{Context, Scanner, Token, TokenKind};

use tracing::{debug, debug_span};

use crate::derive::Tables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Kirshenbaum ASCII-IPA to Unicode IPA.
    AsciiToUnicode,
    /// Unicode IPA to Kirshenbaum ASCII-IPA.
    UnicodeToAscii,
}

/// Output of a scan plus how many characters matched no table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliteration {
    pub text: String,
    pub unrecognized: usize,
}

impl Tables {
    pub fn tokens<'a>(&'a self, input: &'a str, direction: Direction) -> Scanner<'a> {
        let tables = match direction {
            Direction::AsciiToUnicode => self.forward(),
            Direction::UnicodeToAscii => self.reverse(),
        };
        Scanner::new(tables, input)
    }

    pub fn transliterate(&self, input: &str, direction: Direction) -> Transliteration {
        let _span = debug_span!("transliterate", ?direction, len = input.len()).entered();

        let mut out = Transliteration {
            text: String::with_capacity(input.len() * 2),
            unrecognized: 0,
        };
        for tok in self.tokens(input, direction) {
            if tok.kind == TokenKind::Unrecognized {
                out.unrecognized += 1;
            }
            out.text.push_str(tok.output);
        }

        if out.unrecognized > 0 {
            debug!(unrecognized = out.unrecognized, "passed through unmapped characters");
        }
        out
    }

    pub fn ascii_to_unicode(&self, input: &str) -> String {
        self.transliterate(input, Direction::AsciiToUnicode).text
    }

    pub fn unicode_to_ascii(&self, input: &str) -> String {
        self.transliterate(input, Direction::UnicodeToAscii).text
    }
}

/// Convert Kirshenbaum ASCII-IPA to Unicode IPA using the global tables.
pub fn ascii_to_unicode(input: &str) -> String {
    Tables::global().ascii_to_unicode(input)
}

/// Convert Unicode IPA to Kirshenbaum ASCII-IPA using the global tables.
pub fn unicode_to_ascii(input: &str) -> String {
    Tables::global().unicode_to_ascii(input)
}

pub fn transliterate(input: &str, direction: Direction) -> Transliteration {
    Tables::global().transliterate(input, direction)
}
