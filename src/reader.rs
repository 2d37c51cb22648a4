//! Drive a converter from an input string.
//!
//! The reader scans the input with the [`Lexer`], decodes each token into an
//! event, and forwards the event to the converter straight away. It keeps no
//! state of its own besides the scan position; everything it learns about
//! the input ends up in the returned [`ParseReport`].

use rustc_hash::FxHashMap;

use crate::converter::Converter;
use crate::error::Span;
use crate::lexer::{Lexer, Token, TokenKind};

/// Input left over after the last recognised token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparsed {
    pub span: Span,
    pub text: String,
}

/// What a single parse call saw.
#[derive(Debug, Default)]
pub struct ParseReport {
    matched: FxHashMap<TokenKind, usize>,
    pub events: usize,
    pub skipped: usize,
    pub unparsed: Option<Unparsed>,
}

impl ParseReport {
    /// Number of tokens of `kind` the scan matched (dispatched or skipped).
    #[must_use]
    pub fn matched(&self, kind: TokenKind) -> usize {
        self.matched.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_matched(&self) -> usize {
        self.matched.values().sum()
    }

    /// The advisory line for trailing input, if any remained.
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.unparsed
            .as_ref()
            .map(|u| format!("Warning: Unparsed input remains: {}", u.text))
    }

    /// One-line summary, e.g. `12 tokens (char 9, font 2, par 1), 11 events, 1 skipped`.
    #[must_use]
    pub fn summary(&self) -> String {
        let per_kind = TokenKind::ALL
            .iter()
            .map(|k| format!("{} {}", k, self.matched(*k)))
            .collect::<Vec<_>>()
            .join(", ");
        let mut out = format!(
            "{} tokens ({}), {} events, {} skipped",
            self.total_matched(),
            per_kind,
            self.events,
            self.skipped
        );
        if let Some(u) = &self.unparsed {
            out.push_str(&format!(", {} bytes unparsed at {}", u.span.len(), u.span.start));
        }
        out
    }

    fn record(&mut self, tok: &Token<'_>, dispatched: bool) {
        *self.matched.entry(tok.kind).or_insert(0) += 1;
        if dispatched {
            self.events += 1;
        } else {
            self.skipped += 1;
        }
    }
}

/// Tokenizer front end. Construct with [`Reader::new`] to have the unparsed
/// input warning printed to stderr, or [`Reader::silent`] to only record it.
#[derive(Debug, Clone, Copy)]
pub struct Reader {
    warn: bool,
}

impl Default for Reader {
    fn default() -> Self {
        Reader { warn: true }
    }
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn silent() -> Self {
        Reader { warn: false }
    }

    /// Scan `input` without converting.
    pub fn tokens<'a>(&self, input: &'a str) -> Lexer<'a> {
        Lexer::new(input)
    }

    /// Scan `input`, feeding every decoded event to `converter` in order.
    ///
    /// Only text after the end of the last match counts as unparsed; text
    /// before or between tokens is skipped over without comment.
    pub fn parse(&self, input: &str, converter: &mut dyn Converter) -> ParseReport {
        let mut report = ParseReport::default();
        let mut last_end = 0;

        for tok in Lexer::new(input) {
            let event = tok.event();
            if let Some(event) = event {
                converter.handle(event);
            }
            report.record(&tok, event.is_some());
            last_end = tok.span.end;
        }

        if last_end < input.len() {
            report.unparsed = Some(Unparsed {
                span: Span::new(last_end, input.len()),
                text: input[last_end..].to_string(),
            });
        }

        if self.warn
            && let Some(w) = report.warning()
        {
            eprintln!("{}", w);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Event;
    use crate::style::{FontStyle, StyleSet};

    /// Records every call so dispatch order can be checked.
    #[derive(Default)]
    struct Recorder {
        events: Vec<Event>,
        styles: StyleSet,
    }

    impl Converter for Recorder {
        fn convert_character(&mut self, c: char) {
            self.events.push(Event::Character(c));
        }
        fn convert_font_change(&mut self, style: FontStyle) {
            self.styles.toggle(style);
            self.events.push(Event::FontChange(style));
        }
        fn convert_paragraph(&mut self) {
            self.events.push(Event::Paragraph);
        }
        fn active_styles(&self) -> StyleSet {
            self.styles
        }
        fn result(&self) -> String {
            String::new()
        }
    }

    fn run(src: &str) -> (Vec<Event>, ParseReport) {
        let mut rec = Recorder::default();
        let report = Reader::silent().parse(src, &mut rec);
        (rec.events, report)
    }

    #[test]
    fn empty_input() {
        let (events, report) = run("");
        assert!(events.is_empty());
        assert!(report.unparsed.is_none());
        assert!(report.warning().is_none());
        assert_eq!(report.total_matched(), 0);
    }

    #[test]
    fn no_tokens_reports_whole_input() {
        let (events, report) = run("just text");
        assert!(events.is_empty());
        let u = report.unparsed.unwrap();
        assert_eq!(u.span, Span::new(0, 9));
        assert_eq!(u.text, "just text");
    }

    #[test]
    fn events_in_input_order() {
        let (events, _) = run("{char:a}{font:italic}{par}{char:b}");
        assert_eq!(
            events,
            vec![
                Event::Character('a'),
                Event::FontChange(FontStyle::Italic),
                Event::Paragraph,
                Event::Character('b'),
            ]
        );
    }

    #[test]
    fn leading_text_is_not_reported() {
        let (events, report) = run("garbage{char:Q}");
        assert_eq!(events, vec![Event::Character('Q')]);
        assert!(report.unparsed.is_none());
    }

    #[test]
    fn text_between_tokens_is_not_reported() {
        let (events, report) = run("{char:a} and then {char:b}");
        assert_eq!(events.len(), 2);
        assert!(report.unparsed.is_none());
    }

    #[test]
    fn trailing_text_is_reported() {
        let (_, report) = run("{char:a}{par} tail{");
        let u = report.unparsed.as_ref().unwrap();
        assert_eq!(u.text, " tail{");
        assert_eq!(u.span, Span::new(13, 19));
        assert_eq!(report.warning().unwrap(), "Warning: Unparsed input remains:  tail{");
    }

    #[test]
    fn skipped_tokens_are_counted_not_dispatched() {
        let (events, report) = run("{char:ab}{font:strike}{char}{char:c}");
        assert_eq!(events, vec![Event::Character('c')]);
        assert_eq!(report.matched(TokenKind::Char), 3);
        assert_eq!(report.matched(TokenKind::Font), 1);
        assert_eq!(report.matched(TokenKind::Par), 0);
        assert_eq!(report.events, 1);
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn summary_line() {
        let (_, report) = run("{char:a}{font:nope}{par}xy");
        assert_eq!(
            report.summary(),
            "3 tokens (char 1, font 1, par 1), 2 events, 1 skipped, 2 bytes unparsed at 24"
        );
    }

    #[test]
    fn tokens_matches_parse() {
        let src = "{char:a}x{par}";
        let toks: Vec<_> = Reader::silent().tokens(src).collect();
        let (_, report) = run(src);
        assert_eq!(toks.len(), report.total_matched());
    }
}
