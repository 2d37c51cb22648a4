use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

use crate::error::Span;
use crate::style::FontStyle;

/// `{kind}` or `{kind:value}` for the three recognised kinds.
const TOKEN_PATTERN: &str = r"\{(char|font|par)(?::([^}]+))?\}";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern compiles"));

/// Kind of a brace-delimited token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Char,
    Font,
    Par,
}

impl TokenKind {
    pub const ALL: [TokenKind; 3] = [TokenKind::Char, TokenKind::Font, TokenKind::Par];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Char => "char",
            TokenKind::Font => "font",
            TokenKind::Par => "par",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "char" => Some(TokenKind::Char),
            "font" => Some(TokenKind::Font),
            "par" => Some(TokenKind::Par),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Semantic event a token decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Character(char),
    FontChange(FontStyle),
    Paragraph,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Event::Character(c) => write!(f, "character {:?}", c),
            Event::FontChange(s) => write!(f, "font {}", s),
            Event::Paragraph => f.write_str("paragraph"),
        }
    }
}

/// A matched token, borrowing its value from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: Option<&'a str>,
    pub span: Span,
}

impl Token<'_> {
    /// Decode into an event. `None` means the token is dropped: a `char`
    /// whose value is missing or not exactly one character, or a `font`
    /// whose value is not a known style.
    #[must_use]
    pub fn event(&self) -> Option<Event> {
        match self.kind {
            TokenKind::Char => {
                let mut chars = self.value?.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Event::Character(c)),
                    _ => None,
                }
            }
            TokenKind::Font => self.value?.parse().ok().map(Event::FontChange),
            TokenKind::Par => Some(Event::Paragraph),
        }
    }
}

/// Iterator over the tokens of an input, left to right, non-overlapping.
/// Text that does not match the grammar is stepped over.
pub struct Lexer<'a> {
    matches: CaptureMatches<'static, 'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { matches: TOKEN_RE.captures_iter(input) }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let caps = self.matches.next()?;
        let whole = caps.get(0)?;
        // Group 1 is an alternation of exactly the known kind names.
        let kind = TokenKind::from_name(caps.get(1)?.as_str())?;
        Some(Token {
            kind,
            value: caps.get(2).map(|m| m.as_str()),
            span: Span::new(whole.start(), whole.end()),
        })
    }
}
