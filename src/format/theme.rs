//! Styling: map output roles to prefixes/suffixes (ANSI, or nothing).
//!
//! - **Section** — top-level headings such as `Sample Input:`
//! - **Target** — per-format headings such as `TeX Conversion:`
//! - **Rule** — separator lines between targets
//! - **Dim** — secondary detail in token dumps (spans, skipped markers)

/// What a piece of CLI output is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Section,
    Target,
    Rule,
    Dim,
}

/// Something that can map a role to a prefix/suffix (e.g. ANSI codes).
pub trait Theme {
    /// Prefix to emit before text with this role.
    fn prefix(&self, role: Role) -> &str;
    /// Suffix to emit after it (e.g. reset).
    fn suffix(&self, role: Role) -> &str;

    fn paint(&self, role: Role, text: &str) -> String {
        format!("{}{}{}", self.prefix(role), text, self.suffix(role))
    }
}

#[derive(Debug)]
pub struct AnsiTheme {
    reset: String,
    section: String,
    target: String,
    rule: String,
    dim: String,
}

impl AnsiTheme {
    /// Bold blue sections, bold green targets.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            reset: "\x1b[0m".into(),
            section: "\x1b[1;34m".into(),
            target: "\x1b[1;32m".into(),
            rule: "\x1b[1;34m".into(),
            dim: "\x1b[2m".into(),
        }
    }

    /// No styling (e.g. output piped to a file).
    #[must_use]
    pub fn none() -> Self {
        Self {
            reset: String::new(),
            section: String::new(),
            target: String::new(),
            rule: String::new(),
            dim: String::new(),
        }
    }
}

impl Theme for AnsiTheme {
    fn prefix(&self, role: Role) -> &str {
        match role {
            Role::Section => &self.section,
            Role::Target => &self.target,
            Role::Rule => &self.rule,
            Role::Dim => &self.dim,
        }
    }

    fn suffix(&self, _role: Role) -> &str {
        &self.reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_transparent() {
        let t = AnsiTheme::none();
        assert_eq!(t.paint(Role::Target, "TeX Conversion:"), "TeX Conversion:");
    }

    #[test]
    fn dark_wraps_and_resets() {
        let t = AnsiTheme::dark();
        let s = t.paint(Role::Section, "Sample Input:");
        assert!(s.starts_with("\x1b[1;34m"));
        assert!(s.ends_with("\x1b[0m"));
        assert!(s.contains("Sample Input:"));
    }
}
