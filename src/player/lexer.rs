//! Tokenizer for the typewriter reveal.
//!
//! Assistant text supports two inline forms: `**bold**` and ``` ``code`` ```.
//! Delimiters are consumed; a delimiter with no closing partner is revealed
//! literally, one character at a time.

const BOLD_DELIMITER: &str = "**";
const CODE_DELIMITER: &str = "``";

/// One unit of revealed output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealToken {
    Char(char),
    LineBreak,
    Bold(String),
    Code(String),
}

/// Lazily splits text into [`RevealToken`]s
pub struct RevealLexer<'a> {
    rest: &'a str,
}

impl<'a> RevealLexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn span(&mut self, delimiter: &str) -> Option<String> {
        let body = self.rest.strip_prefix(delimiter)?;
        let end = body.find(delimiter)?;
        let inner = body[..end].to_string();
        self.rest = &body[end + delimiter.len()..];
        Some(inner)
    }
}

impl Iterator for RevealLexer<'_> {
    type Item = RevealToken;

    fn next(&mut self) -> Option<RevealToken> {
        if let Some(bold) = self.span(BOLD_DELIMITER) {
            return Some(RevealToken::Bold(bold));
        }
        if let Some(code) = self.span(CODE_DELIMITER) {
            return Some(RevealToken::Code(code));
        }

        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        Some(match c {
            '\n' => RevealToken::LineBreak,
            c => RevealToken::Char(c),
        })
    }
}

pub fn tokenize(text: &str) -> RevealLexer<'_> {
    RevealLexer::new(text)
}
