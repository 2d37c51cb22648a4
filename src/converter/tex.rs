use super::Converter;
use crate::style::{FontStyle, StyleSet};

/// TeX-like markup: special characters are backslash-escaped and styled
/// characters are wrapped in `\textbf`, `\textit` or `\underline`.
#[derive(Debug, Default)]
pub struct TexConverter {
    out: String,
    styles: StyleSet,
}

impl TexConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap already-escaped `text` according to the active styles.
    ///
    /// First match wins: bold+italic, bold, italic, underline. Underline is
    /// dropped whenever bold or italic is also on.
    fn push_styled(&mut self, text: &str) {
        let bold = self.styles.contains(FontStyle::Bold);
        let italic = self.styles.contains(FontStyle::Italic);
        let (open, close) = if bold && italic {
            ("\\textbf{\\textit{", "}}")
        } else if bold {
            ("\\textbf{", "}")
        } else if italic {
            ("\\textit{", "}")
        } else if self.styles.contains(FontStyle::Underline) {
            ("\\underline{", "}")
        } else {
            ("", "")
        };
        self.out.push_str(open);
        self.out.push_str(text);
        self.out.push_str(close);
    }
}

/// Escaped form of `c`, or `None` when it needs no escaping.
pub fn escape(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("\\&"),
        '%' => Some("\\%"),
        '$' => Some("\\$"),
        '#' => Some("\\#"),
        '_' => Some("\\_"),
        '{' => Some("\\{"),
        '}' => Some("\\}"),
        _ => None,
    }
}

impl Converter for TexConverter {
    fn convert_character(&mut self, c: char) {
        let mut buf = [0u8; 4];
        let text = match escape(c) {
            Some(esc) => esc,
            None => &*c.encode_utf8(&mut buf),
        };
        self.push_styled(text);
    }

    fn convert_font_change(&mut self, style: FontStyle) {
        self.styles.toggle(style);
    }

    fn convert_paragraph(&mut self) {
        self.out.push_str("\n\n");
    }

    fn active_styles(&self) -> StyleSet {
        self.styles
    }

    fn result(&self) -> String {
        self.out.clone()
    }
}
