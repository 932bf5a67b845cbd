
use crate::derive::Tables;
use crate::scan::{Direction, TokenKind};
use crate::table::Inventory;

fn kinds(input: &str, direction: Direction) -> Vec<TokenKind> {
    Tables::global()
        .tokens(input, direction)
        .map(|t| t.kind)
        .collect()
}

#[test]
fn empty_input_both_directions() {
    assert_eq!(crate::ascii_to_unicode(""), "");
    assert_eq!(crate::unicode_to_ascii(""), "");
    assert_eq!(Tables::global().tokens("", Direction::AsciiToUnicode).count(), 0);
}

#[test]
fn local_tables_match_global() {
    let tables = Tables::derive(&Inventory::kirshenbaum());
    let text = "ai hir D@ 'sEkrI,t&ri";
    assert_eq!(tables.ascii_to_unicode(text), crate::ascii_to_unicode(text));
}

#[test]
fn custom_inventory_drives_scanner() {
    let toml = r#"
vowels = ["a"]
segments = [["a", "a"], ["sh", "ʃ"], ["s", "s"]]
diacritics = [[":", "ː"]]
stress = [["'", "ˈ"]]

[nasal]
mark = "~"
vowel = "\u0303"
consonant = "\u0334"
"#;
    let inv = crate::parse_inventory_toml(toml).unwrap();
    let tables = Tables::derive(&inv);
    assert_eq!(tables.ascii_to_unicode("'sha:s~"), "ˈʃaːs\u{0334}");
    assert_eq!(tables.unicode_to_ascii("ˈʃaːs"), "'sha:s");
    // `T` is not in this inventory.
    assert_eq!(tables.ascii_to_unicode("T"), "T");
}

#[test]
fn scanner_exposes_state_between_tokens() {
    let tables = Tables::global();
    let mut scanner = tables.tokens("ta~", Direction::AsciiToUnicode);
    assert_eq!(scanner.context(), crate::Context::Vowel);

    let first = scanner.next().unwrap();
    assert_eq!(first.source, "t");
    assert_eq!(scanner.context(), crate::Context::Consonant);
    assert_eq!(scanner.remainder(), "a~");

    let second = scanner.next().unwrap();
    assert_eq!(second.kind, TokenKind::Segment(crate::Context::Vowel));
    assert_eq!(scanner.next().map(|t| t.output), Some("\u{0303}"));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.remainder(), "");
}

#[test]
fn token_kinds_for_mixed_input() {
    assert_eq!(
        kinds("'a 5", Direction::AsciiToUnicode),
        vec![
            TokenKind::Stress,
            TokenKind::Segment(crate::Context::Vowel),
            TokenKind::Stress,
            TokenKind::Unrecognized,
        ]
    );
}
