use ipa_core::{Direction, Tables, Transliteration};
use tracing::debug;

use super::DirectionChoice;
use crate::delimit::transliterate_delimited;

pub fn convert(
    tables: &Tables,
    text: &str,
    choice: DirectionChoice,
    delimited: bool,
) -> (Direction, Transliteration) {
    let direction = choice.resolve(text, delimited);
    debug!(?direction, delimited, "convert");
    let out = if delimited {
        transliterate_delimited(tables, text, direction)
    } else {
        tables.transliterate(text, direction)
    };
    (direction, out)
}

/// Stderr warning for input the tables did not fully cover.
pub fn unrecognized_warning(out: &Transliteration) -> Option<String> {
    match out.unrecognized {
        0 => None,
        1 => Some("warning: input contained 1 unrecognized character".to_string()),
        n => Some(format!("warning: input contained {n} unrecognized characters")),
    }
}
