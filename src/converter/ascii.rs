use super::Converter;
use crate::style::{FontStyle, StyleSet};

/// Plain text: characters verbatim, one `\n` per paragraph. Styles are
/// tracked but have no visible effect.
#[derive(Debug, Default)]
pub struct AsciiConverter {
    out: String,
    styles: StyleSet,
}

impl AsciiConverter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Converter for AsciiConverter {
    fn convert_character(&mut self, c: char) {
        self.out.push(c);
    }

    fn convert_font_change(&mut self, style: FontStyle) {
        self.styles.toggle(style);
    }

    fn convert_paragraph(&mut self) {
        self.out.push('\n');
    }

    fn active_styles(&self) -> StyleSet {
        self.styles
    }

    fn result(&self) -> String {
        self.out.clone()
    }
}
