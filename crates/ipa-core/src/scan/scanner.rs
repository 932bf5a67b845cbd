use crate::derive::DirectionTables;

/// Whether the last segment was a vowel. Only the forward tilde reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Context {
    #[default]
    Vowel,
    Consonant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Stress,
    /// A segment, carrying the context it leaves behind.
    Segment(Context),
    Diacritic,
    Nasal,
    /// Matched nothing; copied through unchanged.
    Unrecognized,
}

/// One committed step of a scan: `source` was consumed and `output` emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub source: &'a str,
    pub output: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Segment,
    Diacritic,
    Nasal,
}

/// Greedy left-to-right scanner over one direction's tables.
///
/// Each pass tries a stress mark (restarting the pass on success), then one
/// segment, one diacritic and the nasal mark, each against whatever input the
/// previous step left. A pass where no segment, diacritic or nasal fired
/// copies exactly one character through.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    tables: &'a DirectionTables,
    rest: &'a str,
    context: Context,
    step: Step,
    fired: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(tables: &'a DirectionTables, input: &'a str) -> Self {
        Self {
            tables,
            rest: input,
            context: Context::default(),
            step: Step::Segment,
            fired: false,
        }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// Input not yet consumed.
    pub fn remainder(&self) -> &'a str {
        self.rest
    }

    fn consume(&mut self, len: usize, kind: TokenKind, output: &'a str) -> Token<'a> {
        let (source, rest) = self.rest.split_at(len);
        self.rest = rest;
        Token {
            kind,
            source,
            output,
        }
    }

    fn stress(&mut self) -> Option<Token<'a>> {
        let tables = self.tables;
        let (mark, glyph) = tables.stress.longest_match(self.rest)?;
        Some(self.consume(mark.len(), TokenKind::Stress, glyph))
    }

    fn segment(&mut self) -> Option<Token<'a>> {
        let tables = self.tables;
        let (form, glyph) = tables.segments.longest_match(self.rest)?;
        self.context = if tables.vowels.contains(form) {
            Context::Vowel
        } else {
            Context::Consonant
        };
        Some(self.consume(form.len(), TokenKind::Segment(self.context), glyph))
    }

    fn diacritic(&mut self) -> Option<Token<'a>> {
        let tables = self.tables;
        let (form, glyph) = tables.diacritics.longest_match(self.rest)?;
        Some(self.consume(form.len(), TokenKind::Diacritic, glyph))
    }

    fn nasal(&mut self) -> Option<Token<'a>> {
        let tables = self.tables;
        let nasal = tables.nasal.as_ref()?;
        if !self.rest.starts_with(nasal.mark.as_str()) {
            return None;
        }
        let glyph = match self.context {
            Context::Vowel => nasal.after_vowel.as_str(),
            Context::Consonant => nasal.after_consonant.as_str(),
        };
        Some(self.consume(nasal.mark.len(), TokenKind::Nasal, glyph))
    }

    fn passthrough(&mut self) -> Option<Token<'a>> {
        let len = self.rest.chars().next()?.len_utf8();
        let (source, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(Token {
            kind: TokenKind::Unrecognized,
            source,
            output: source,
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        while !self.rest.is_empty() {
            match self.step {
                Step::Segment => {
                    if let Some(tok) = self.stress() {
                        return Some(tok);
                    }
                    self.step = Step::Diacritic;
                    self.fired = false;
                    if let Some(tok) = self.segment() {
                        self.fired = true;
                        return Some(tok);
                    }
                }
                Step::Diacritic => {
                    self.step = Step::Nasal;
                    if let Some(tok) = self.diacritic() {
                        self.fired = true;
                        return Some(tok);
                    }
                }
                Step::Nasal => {
                    self.step = Step::Segment;
                    if let Some(tok) = self.nasal() {
                        return Some(tok);
                    }
                    if !self.fired {
                        return self.passthrough();
                    }
                }
            }
        }
        None
    }
}
