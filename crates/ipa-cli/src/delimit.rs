//! Transcriptions embedded in prose: `/.../` phonemic and `[...]` phonetic.
//!
//! Only the text between the delimiters is transliterated. The delimiters and
//! everything outside them are copied unchanged. A delimiter with no closing
//! partner, or enclosing nothing, is ordinary prose.

use ipa_core::{Direction, Tables, Transliteration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    Prose(&'a str),
    /// Contents of `/.../`, delimiters excluded.
    Phonemic(&'a str),
    /// Contents of `[...]`, delimiters excluded.
    Phonetic(&'a str),
}

fn closing(open: char) -> Option<char> {
    match open {
        '/' => Some('/'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Split `text` into prose and transcription spans, left to right.
pub fn split_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut prose_start = 0;
    let mut i = 0;

    while let Some(c) = text[i..].chars().next() {
        let body_start = i + c.len_utf8();
        let body_len = closing(c).and_then(|close| text[body_start..].find(close));
        match body_len {
            Some(len) if len > 0 => {
                if prose_start < i {
                    spans.push(Span::Prose(&text[prose_start..i]));
                }
                let body = &text[body_start..body_start + len];
                spans.push(if c == '/' {
                    Span::Phonemic(body)
                } else {
                    Span::Phonetic(body)
                });
                // Both closing delimiters are one byte.
                i = body_start + len + 1;
                prose_start = i;
            }
            _ => i = body_start,
        }
    }
    if prose_start < text.len() {
        spans.push(Span::Prose(&text[prose_start..]));
    }
    spans
}

/// Direction implied by the transcriptions in `text` (all of `text` when it
/// has none): pure ASCII reads as Kirshenbaum, anything else as Unicode IPA.
pub fn infer_direction(text: &str, delimited: bool) -> Direction {
    let bodies: Vec<&str> = if delimited {
        split_spans(text)
            .into_iter()
            .filter_map(|s| match s {
                Span::Prose(_) => None,
                Span::Phonemic(b) | Span::Phonetic(b) => Some(b),
            })
            .collect()
    } else {
        Vec::new()
    };
    let ascii = if bodies.is_empty() {
        text.is_ascii()
    } else {
        bodies.iter().all(|b| b.is_ascii())
    };
    if ascii {
        Direction::AsciiToUnicode
    } else {
        Direction::UnicodeToAscii
    }
}

/// Transliterate only the delimited spans of `text`.
pub fn transliterate_delimited(
    tables: &Tables,
    text: &str,
    direction: Direction,
) -> Transliteration {
    let mut out = Transliteration {
        text: String::with_capacity(text.len() * 2),
        unrecognized: 0,
    };
    for span in split_spans(text) {
        let (open, body, close) = match span {
            Span::Prose(p) => {
                out.text.push_str(p);
                continue;
            }
            Span::Phonemic(b) => ("/", b, "/"),
            Span::Phonetic(b) => ("[", b, "]"),
        };
        let converted = tables.transliterate(body, direction);
        out.text.push_str(open);
        out.text.push_str(&converted.text);
        out.text.push_str(close);
        out.unrecognized += converted.unrecognized;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_mixed_text() {
        let spans = split_spans("cat /k&t/ or [k&t<h>] ok");
        assert_eq!(
            spans,
            vec![
                Span::Prose("cat "),
                Span::Phonemic("k&t"),
                Span::Prose(" or "),
                Span::Phonetic("k&t<h>"),
                Span::Prose(" ok"),
            ]
        );
    }

    #[test]
    fn unclosed_and_empty_delimiters_are_prose() {
        assert_eq!(split_spans("a // b"), vec![Span::Prose("a // b")]);
        assert_eq!(split_spans("a [] b"), vec![Span::Prose("a [] b")]);
        assert_eq!(split_spans("and/or"), vec![Span::Prose("and/or")]);
    }

    #[test]
    fn bracket_body_may_contain_open_bracket() {
        assert_eq!(split_spans("[t[`a]"), vec![Span::Phonetic("t[`a")]);
    }

    #[test]
    fn non_ascii_prose_around_spans() {
        assert_eq!(
            split_spans("« /T/ »"),
            vec![Span::Prose("« "), Span::Phonemic("T"), Span::Prose(" »")]
        );
    }

    #[test]
    fn empty_text() {
        assert!(split_spans("").is_empty());
    }

    #[test]
    fn infer_from_content() {
        assert_eq!(infer_direction("D@", false), Direction::AsciiToUnicode);
        assert_eq!(infer_direction("ðə", false), Direction::UnicodeToAscii);
        // Prose outside the delimiters does not count.
        assert_eq!(infer_direction("« /D@/ »", true), Direction::AsciiToUnicode);
        assert_eq!(infer_direction("the /ðə/", true), Direction::UnicodeToAscii);
        assert_eq!(infer_direction("café", true), Direction::UnicodeToAscii);
    }

    #[test]
    fn only_spans_are_converted() {
        let tables = Tables::global();
        let out = transliterate_delimited(
            tables,
            "the /D@/ and [T@] stay",
            Direction::AsciiToUnicode,
        );
        assert_eq!(out.text, "the /ðə/ and [θə] stay");
        assert_eq!(out.unrecognized, 0);

        let back = transliterate_delimited(tables, &out.text, Direction::UnicodeToAscii);
        assert_eq!(back.text, "the /D@/ and [T@] stay");
    }

    #[test]
    fn unrecognized_counted_inside_spans_only() {
        let out = transliterate_delimited(
            Tables::global(),
            "123 /a5/",
            Direction::AsciiToUnicode,
        );
        assert_eq!(out.text, "123 /a5/");
        assert_eq!(out.unrecognized, 1);
    }
}
