use super::Converter;
use crate::style::{FontStyle, StyleSet};

/// Paragraph marker fragment.
const PARAGRAPH: &str = "Paragraph";

/// Widget listing: one `TextWidget{...}` line per character and a
/// `Paragraph` line per paragraph break.
#[derive(Debug, Default)]
pub struct WidgetConverter {
    elements: Vec<String>,
    styles: StyleSet,
}

impl WidgetConverter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragments emitted so far, in input order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

impl Converter for WidgetConverter {
    fn convert_character(&mut self, c: char) {
        self.elements
            .push(format!("TextWidget{{text='{}', font='{}'}}", c, self.styles.label()));
    }

    fn convert_font_change(&mut self, style: FontStyle) {
        self.styles.toggle(style);
    }

    fn convert_paragraph(&mut self) {
        self.elements.push(PARAGRAPH.to_string());
    }

    fn active_styles(&self) -> StyleSet {
        self.styles
    }

    /// Fragments joined by `\n`, with no trailing newline.
    fn result(&self) -> String {
        self.elements.join("\n")
    }
}
