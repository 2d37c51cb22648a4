//! Output formats for the token stream.
//!
//! Every format implements [`Converter`]; the caller picks one through
//! [`Target`] (or constructs the concrete type directly) and hands it to a
//! [`Reader`](crate::reader::Reader).

mod ascii;
mod tex;
mod widget;

use std::str::FromStr;

pub use ascii::AsciiConverter;
pub use tex::TexConverter;
pub use widget::WidgetConverter;

use crate::error::RtError;
use crate::lexer::Event;
use crate::reader::Reader;
use crate::style::{FontStyle, StyleSet};

/// Receives the events of one document and renders them.
pub trait Converter {
    /// Append `c`, rendered under the currently active styles.
    fn convert_character(&mut self, c: char);
    /// Toggle `style`. Produces no output by itself.
    fn convert_font_change(&mut self, style: FontStyle);
    /// Append a paragraph separator.
    fn convert_paragraph(&mut self);
    /// Styles currently switched on.
    fn active_styles(&self) -> StyleSet;
    /// Rendered output so far. Does not consume or reset anything.
    fn result(&self) -> String;

    fn handle(&mut self, event: Event) {
        match event {
            Event::Character(c) => self.convert_character(c),
            Event::FontChange(style) => self.convert_font_change(style),
            Event::Paragraph => self.convert_paragraph(),
        }
    }
}

/// Output format selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Ascii,
    Tex,
    Widget,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Ascii, Target::Tex, Target::Widget];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Target::Ascii => "ascii",
            Target::Tex => "tex",
            Target::Widget => "widget",
        }
    }

    /// Heading used when several targets are printed together.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Target::Ascii => "ASCII Conversion",
            Target::Tex => "TeX Conversion",
            Target::Widget => "Text Widget Conversion",
        }
    }

    /// A fresh converter with no active styles and no output.
    #[must_use]
    pub fn converter(self) -> Box<dyn Converter + Send> {
        match self {
            Target::Ascii => Box::new(AsciiConverter::new()),
            Target::Tex => Box::new(TexConverter::new()),
            Target::Widget => Box::new(WidgetConverter::new()),
        }
    }
}

impl FromStr for Target {
    type Err = RtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" | "text" | "plain" => Ok(Target::Ascii),
            "tex" | "latex" => Ok(Target::Tex),
            "widget" | "widgets" => Ok(Target::Widget),
            other => Err(RtError::new(format!(
                "unknown target: {} (expected ascii, tex or widget)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert `input` to `target` with a fresh converter. Unparsed trailing
/// input is dropped without a warning.
#[must_use]
pub fn convert(input: &str, target: Target) -> String {
    let mut conv = target.converter();
    Reader::silent().parse(input, conv.as_mut());
    conv.result()
}
