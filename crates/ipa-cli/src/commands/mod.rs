pub mod convert_ops;
pub mod table_ops;
pub mod token_ops;

use clap::ValueEnum;
use ipa_core::Direction;

use crate::delimit::infer_direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DirectionChoice {
    /// Pick from the input: pure ASCII converts to Unicode, anything else to ASCII
    Auto,
    /// Kirshenbaum ASCII-IPA to Unicode IPA
    ToUnicode,
    /// Unicode IPA to Kirshenbaum ASCII-IPA
    ToAscii,
}

impl DirectionChoice {
    pub fn resolve(self, text: &str, delimited: bool) -> Direction {
        match self {
            DirectionChoice::Auto => infer_direction(text, delimited),
            DirectionChoice::ToUnicode => Direction::AsciiToUnicode,
            DirectionChoice::ToAscii => Direction::UnicodeToAscii,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_choice_ignores_content() {
        assert_eq!(
            DirectionChoice::ToAscii.resolve("D@", false),
            Direction::UnicodeToAscii
        );
        assert_eq!(
            DirectionChoice::ToUnicode.resolve("ðə", false),
            Direction::AsciiToUnicode
        );
    }

    #[test]
    fn auto_infers() {
        assert_eq!(
            DirectionChoice::Auto.resolve("ðə", false),
            Direction::UnicodeToAscii
        );
        assert_eq!(
            DirectionChoice::Auto.resolve("D@", false),
            Direction::AsciiToUnicode
        );
    }
}
