//! Terminal presentation for the command line: themes map output roles to
//! ANSI styles, and the render helpers lay out headings and token dumps.

mod render;
mod theme;

pub use render::{heading, rule, token_dump, token_line};
pub use theme::{AnsiTheme, Role, Theme};
