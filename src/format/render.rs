use std::fmt::Write;

use super::theme::{Role, Theme};
use crate::lexer::Token;

const RULE: &str = "-----------------------------";

/// `text:` painted as `role`.
pub fn heading<T: Theme + ?Sized>(theme: &T, role: Role, text: &str) -> String {
    theme.paint(role, &format!("{}:", text))
}

pub fn rule<T: Theme + ?Sized>(theme: &T) -> String {
    theme.paint(Role::Rule, RULE)
}

/// One token as `start..end  kind  value  -> event`, or `skipped`.
pub fn token_line<T: Theme + ?Sized>(theme: &T, tok: &Token<'_>) -> String {
    let mut line = String::new();
    let span = format!("{:>5}..{:<5}", tok.span.start, tok.span.end);
    line.push_str(&theme.paint(Role::Dim, &span));
    let _ = write!(line, " {:<4} {:<10}", tok.kind.name(), tok.value.unwrap_or("-"));
    match tok.event() {
        Some(event) => {
            let _ = write!(line, " -> {}", event);
        }
        None => line.push_str(&theme.paint(Role::Dim, " skipped")),
    }
    line
}

/// All tokens of `tokens`, one per line.
pub fn token_dump<'a, T, I>(theme: &T, tokens: I) -> String
where
    T: Theme + ?Sized,
    I: IntoIterator<Item = Token<'a>>,
{
    let mut out = String::new();
    for tok in tokens {
        out.push_str(&token_line(theme, &tok));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::AnsiTheme;
    use crate::lexer::Lexer;

    #[test]
    fn plain_heading_and_rule() {
        let t = AnsiTheme::none();
        assert_eq!(heading(&t, Role::Target, "ASCII Conversion"), "ASCII Conversion:");
        assert_eq!(rule(&t), RULE);
    }

    #[test]
    fn dump_marks_skipped_tokens() {
        let t = AnsiTheme::none();
        let out = token_dump(&t, Lexer::new("{char:a}{font:huge}{par}"));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("char"));
        assert!(lines[0].ends_with("-> character 'a'"));
        assert!(lines[1].ends_with("skipped"));
        assert!(lines[1].contains("huge"));
        assert!(lines[2].ends_with("-> paragraph"));
    }

    #[test]
    fn dump_shows_spans() {
        let t = AnsiTheme::none();
        let line = token_line(&t, &Lexer::new("ab{par}").next().unwrap());
        assert!(line.trim_start().starts_with("2..7"));
    }
}
