//! Built-in Kirshenbaum correspondence lists.
//!
//! Pairs are `(ascii, unicode)` in source order. Order only matters for
//! reverse de-duplication: when several ASCII forms share a Unicode form, the
//! first one listed here is the one `unicode_to_ascii` produces.

pub(crate) const SEGMENTS: &[(&str, &str)] = &[
    ("m", "m"),
    ("p", "p"),
    ("b", "b"),
    ("P", "Φ"),
    ("B", "β"),
    ("b<trl>", "ʙ"),
    ("p`", "pʼ"),
    ("b`", "ɓ"),
    ("p!", "ʘ"),
    ("M", "ɱ"),
    ("f", "f"),
    ("v", "v"),
    ("r<lbd>", "ʋ"),
    ("n[", "n\u{032A}"),
    ("t[", "t\u{032A}"),
    ("T", "θ"),
    ("D", "ð"),
    ("r[", "r\u{032A}"),
    ("l[", "l\u{032A}"),
    ("t[`", "t\u{032A}\u{02BC}"),
    ("d`", "ɗ"),
    ("t!", "ʇ"),
    ("n", "n"),
    ("t", "t"),
    ("d", "d"),
    ("s", "s"),
    ("z", "z"),
    ("s<lat>", "ɬ"),
    ("z<lat>", "ɮ"),
    ("r", "ɹ"),
    ("l", "l"),
    ("r<trl>", "ʀ"),
    ("*", "ɾ"),
    ("*<lat>", "ɺ"),
    ("t`", "t\u{02BC}"),
    ("c!", "ʗ"),
    ("l!", "ʖ"),
    ("n.", "ɳ"),
    ("t.", "ʈ"),
    ("d.", "ɖ"),
    ("s.", "ʂ"),
    ("z.", "ʐ"),
    ("r.", "ɖ"),
    ("l.", "ɭ"),
    ("*.", "ɽ"),
    ("S", "ʃ"),
    ("Z", "ʒ"),
    ("n^", "n^"),
    ("c", "c"),
    ("J", "ɟ"),
    ("C", "ç"),
    ("C<vcd>", "ʝ"),
    ("j", "j"),
    ("j<rnd>", "ɥ"),
    ("l^", "ʎ"),
    ("J`", "ʄ"),
    ("N", "ŋ"),
    ("k", "k"),
    ("g", "g"),
    ("x", "x"),
    ("Q", "ɣ"),
    ("j<vel>", "ɰ"),
    ("L", "ɫ"),
    ("{vls,alv,lat,frc}", "ɬ"),
    ("k`", "k\u{02BC}"),
    ("g`", "g\u{02BC}"),
    ("k!", "ʞ"),
    ("n<lbv>", "n\u{2030}g"),
    ("t<lbv>", "k\u{2030}p"),
    ("d<lbv>", "g\u{2030}b"),
    ("w<vls>", "ʍ"),
    ("w", "w"),
    ("n\"", "ɴ"),
    ("q", "q"),
    ("G", "ɢ"),
    ("X", "χ"),
    ("g\"", "ʁ"),
    ("r\"", "ʀ"),
    ("q`", "ʠ"),
    ("G`", "ʛ"),
    ("H", "ħ"),
    ("H<vcd>", "ʕ"),
    ("?", "ʔ"),
    ("h", "h"),
    ("h<?>", "ɦ"),
    ("i", "i"),
    ("y", "y"),
    ("I", "ɪ"),
    ("I.", "ʏ"),
    ("e", "e"),
    ("Y", "ø"),
    ("E", "ɛ"),
    ("W", "œ"),
    ("&", "æ"),
    ("&.", "ɶ"),
    ("i\"", "ɨ"),
    ("u\"", "ʉ"),
    ("@<umd>", "ɘ"),
    ("R<umd>", "ɝ"),
    ("@", "ə"),
    ("R", "ɚ"),
    ("@.", "ɵ"),
    ("V\"", "ɜ"),
    ("O\"", "ɞ"),
    ("a", "a"),
    ("u-", "ɯ"),
    ("u", "u"),
    ("U", "ʊ"),
    ("o-", "ɤ"),
    ("o", "o"),
    ("V", "ʌ"),
    ("O", "ɔ"),
    ("A", "ɑ"),
    ("A.", "ɒ"),
];

pub(crate) const VOWELS: &[&str] = &[
    "@<umd>", "R<umd>", "&.", "@.", "A.", "I.", "O\"", "V\"", "i\"", "o-", "u\"", "u-", "&", "@",
    "A", "E", "I", "O", "R", "U", "V", "W", "Y", "a", "e", "i", "o", "u", "y",
];

/// Diacritics whose rendering does not depend on the preceding segment.
pub(crate) const DIACRITICS: &[(&str, &str)] = &[
    (":", "ː"),
    (".", "\u{0322}"),
    ("`", "\u{02BC}"),
    ("[", "\u{032A}"),
    (";", "\u{02B2}"),
    ("\"", "\""),
    ("^", "^"),
    ("<H>", "\u{0334}"),
    ("<h>", "\u{02B0}"),
    ("<unx>", "\u{02DA}"),
    ("<vls>", "\u{0325}"),
    ("<o>", "\u{02DA}"),
    ("<r>", "\u{02B3}"),
    ("<w>", "\u{02B7}"),
    ("<?>", "\u{02B1}"),
];

/// Older glyph choices for `.` and `;`. Only read back, never written.
pub(crate) const DIACRITIC_VARIANTS: &[(&str, &str)] = &[(".", "\u{0323}"), (";", "\u{0321}")];

pub(crate) const NASAL_MARK: &str = "~";
pub(crate) const NASAL_AFTER_VOWEL: &str = "\u{0303}";
pub(crate) const NASAL_AFTER_CONSONANT: &str = "\u{0334}";

pub(crate) const STRESS: &[(&str, &str)] = &[("'", "ˈ"), (",", "ˌ"), (" ", " "), ("\n", "\n")];
