//! Splits a scene line into whitespace-separated tokens

/// Tokens of one physical line, with its 1-based number
///
/// Only built through [`ParsedLine::parse`], so there is always at least
/// one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    tokens: Vec<&'a str>,
    line_number: usize,
}

impl<'a> ParsedLine<'a> {
    /// Tokenize `line`. Leading and trailing blanks are ignored and runs of
    /// blanks count as a single separator. Returns `None` for a line with
    /// no token at all.
    pub fn parse(line: &'a str, line_number: usize) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens, line_number })
        }
    }

    pub fn keyword(&self) -> &'a str {
        self.tokens.first().copied().unwrap_or_default()
    }

    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
