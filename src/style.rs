//! Font styles and the toggle set a converter keeps of them.

use std::str::FromStr;

/// A font style that can be toggled on and off by `{font:...}` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Bold,
    Italic,
    Underline,
}

impl FontStyle {
    /// Declaration order; also the iteration order of [`StyleSet`].
    pub const ALL: [FontStyle; 3] = [FontStyle::Bold, FontStyle::Italic, FontStyle::Underline];

    /// Lower-case name as it appears in the input and in widget labels.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::Underline => "underline",
        }
    }

    fn bit(self) -> u8 {
        match self {
            FontStyle::Bold => 0b001,
            FontStyle::Italic => 0b010,
            FontStyle::Underline => 0b100,
        }
    }
}

impl FromStr for FontStyle {
    type Err = ();

    /// Exact, case-sensitive match on the three style names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "underline" => Ok(FontStyle::Underline),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of active font styles, stored as a bitset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleSet(u8);

impl StyleSet {
    #[must_use]
    pub fn new() -> Self {
        StyleSet(0)
    }

    #[must_use]
    pub fn contains(self, style: FontStyle) -> bool {
        self.0 & style.bit() != 0
    }

    /// Flip membership of `style`: remove it if present, insert it otherwise.
    pub fn toggle(&mut self, style: FontStyle) {
        self.0 ^= style.bit();
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Active styles in declaration order.
    pub fn iter(self) -> impl Iterator<Item = FontStyle> {
        FontStyle::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    /// `normal` when empty, otherwise the active names joined with `+`.
    #[must_use]
    pub fn label(self) -> String {
        if self.is_empty() {
            return "normal".to_string();
        }
        self.iter().map(FontStyle::name).collect::<Vec<_>>().join("+")
    }
}

impl FromIterator<FontStyle> for StyleSet {
    fn from_iter<I: IntoIterator<Item = FontStyle>>(iter: I) -> Self {
        let mut set = StyleSet::new();
        for style in iter {
            if !set.contains(style) {
                set.toggle(style);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("bold".parse(), Ok(FontStyle::Bold));
        assert_eq!("italic".parse(), Ok(FontStyle::Italic));
        assert_eq!("underline".parse(), Ok(FontStyle::Underline));
        assert!("Bold".parse::<FontStyle>().is_err());
        assert!("strike".parse::<FontStyle>().is_err());
        assert!("".parse::<FontStyle>().is_err());
    }

    #[test]
    fn toggle_twice_restores() {
        let mut set = StyleSet::new();
        set.toggle(FontStyle::Italic);
        assert!(set.contains(FontStyle::Italic));
        assert_eq!(set.len(), 1);
        set.toggle(FontStyle::Italic);
        assert!(set.is_empty());
        assert_eq!(set, StyleSet::new());
    }

    #[test]
    fn toggles_are_independent() {
        let mut set = StyleSet::new();
        set.toggle(FontStyle::Bold);
        set.toggle(FontStyle::Underline);
        set.toggle(FontStyle::Bold);
        assert!(!set.contains(FontStyle::Bold));
        assert!(set.contains(FontStyle::Underline));
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let set: StyleSet = [FontStyle::Underline, FontStyle::Bold].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![FontStyle::Bold, FontStyle::Underline]);
    }

    #[test]
    fn collecting_ignores_duplicates() {
        let set: StyleSet = [FontStyle::Bold, FontStyle::Bold].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn labels() {
        assert_eq!(StyleSet::new().label(), "normal");
        let set: StyleSet = FontStyle::ALL.into_iter().collect();
        assert_eq!(set.label(), "bold+italic+underline");
        let set: StyleSet = [FontStyle::Italic].into_iter().collect();
        assert_eq!(set.label(), "italic");
    }
}
