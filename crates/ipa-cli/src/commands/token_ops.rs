use ipa_core::{Context, Token, TokenKind};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    pub kind: &'static str,
    pub source: &'a str,
    pub output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'static str>,
}

impl<'a> From<Token<'a>> for TokenRecord<'a> {
    fn from(tok: Token<'a>) -> Self {
        let (kind, context) = match tok.kind {
            TokenKind::Stress => ("stress", None),
            TokenKind::Segment(Context::Vowel) => ("segment", Some("vowel")),
            TokenKind::Segment(Context::Consonant) => ("segment", Some("consonant")),
            TokenKind::Diacritic => ("diacritic", None),
            TokenKind::Nasal => ("nasal", None),
            TokenKind::Unrecognized => ("unrecognized", None),
        };
        TokenRecord {
            kind,
            source: tok.source,
            output: tok.output,
            context,
        }
    }
}

/// Make whitespace and bare combining marks visible in a table cell.
fn visible(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ' ' => out.push('␠'),
            _ => out.push(c),
        }
    }
    if out.width() == 0 && !out.is_empty() {
        // Dotted circle carrier for a lone combining mark.
        out.insert(0, '\u{25CC}');
    }
    out
}

fn pad(cell: &str, width: usize) -> String {
    let w = cell.width();
    format!("{cell}{}", " ".repeat(width.saturating_sub(w)))
}

pub fn render_text(records: &[TokenRecord<'_>]) -> String {
    let rows: Vec<(String, String, String)> = records
        .iter()
        .map(|r| {
            let kind = match r.context {
                Some(ctx) => format!("{} ({ctx})", r.kind),
                None => r.kind.to_string(),
            };
            (kind, visible(r.source), visible(r.output))
        })
        .collect();
    let kind_w = rows.iter().map(|r| r.0.width()).max().unwrap_or(0);
    let src_w = rows.iter().map(|r| r.1.width()).max().unwrap_or(0);

    let mut out = String::new();
    for (kind, src, dst) in &rows {
        out.push_str(&pad(kind, kind_w));
        out.push_str("  ");
        out.push_str(&pad(src, src_w));
        out.push_str("  ");
        out.push_str(dst);
        out.push('\n');
    }
    out
}

pub fn render_json(records: &[TokenRecord<'_>]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use ipa_core::{Direction, Tables};

    use super::*;

    fn records(input: &str) -> Vec<TokenRecord<'_>> {
        Tables::global()
            .tokens(input, Direction::AsciiToUnicode)
            .map(TokenRecord::from)
            .collect()
    }

    #[test]
    fn text_columns_align_by_display_width() {
        let text = render_text(&records("t[`a~"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "segment (consonant)  t[`  t\u{032A}\u{02BC}");
        assert_eq!(lines[1], "segment (vowel)      a    a");
        assert_eq!(lines[2], "nasal                ~    \u{25CC}\u{0303}");
    }

    #[test]
    fn whitespace_is_visible() {
        let text = render_text(&records("a 5"));
        assert!(text.contains("stress"));
        assert!(text.contains('␠'));
        assert!(text.contains("unrecognized"));
    }

    #[test]
    fn json_records() {
        let json = render_json(&records("'a")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "stress");
        assert_eq!(value[0]["output"], "ˈ");
        assert!(value[0].get("context").is_none());
        assert_eq!(value[1]["kind"], "segment");
        assert_eq!(value[1]["context"], "vowel");
    }
}
