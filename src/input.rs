use std::fs;
use std::io::{self, Read};

use crate::error::RtError;

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(String),
    Inline(String),
}

impl Source {
    /// `-` means stdin; anything else is a path.
    pub fn from_operand(operand: &str) -> Self {
        if operand == "-" {
            Source::Stdin
        } else {
            Source::File(operand.to_string())
        }
    }

    /// Name used in headings and error messages.
    pub fn name(&self) -> &str {
        match self {
            Source::Stdin => "-",
            Source::File(path) => path,
            Source::Inline(_) => "<inline>",
        }
    }

    /// Read the whole document. Each source is converted on its own.
    pub fn read(&self) -> Result<String, RtError> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| RtError::new(e.to_string()).in_source(self.name()))?;
                Ok(strip_final_newline(buf))
            }
            Source::File(path) => fs::read_to_string(path)
                .map(strip_final_newline)
                .map_err(|e| RtError::new(e.to_string()).in_source(path.as_str())),
            Source::Inline(text) => Ok(text.clone()),
        }
    }
}

/// Drop a single trailing newline so a file ending in `\n` doesn't warn
/// about unparsed input.
fn strip_final_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_dash_is_stdin() {
        assert_eq!(Source::from_operand("-"), Source::Stdin);
        assert_eq!(Source::from_operand("a.rtf"), Source::File("a.rtf".into()));
    }

    #[test]
    fn inline_is_returned_verbatim() {
        let src = Source::Inline("{par}\n".into());
        assert_eq!(src.read().unwrap(), "{par}\n");
        assert_eq!(src.name(), "<inline>");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Source::File("/nonexistent/doc.rtf".into()).read().unwrap_err();
        assert_eq!(err.source_name.as_deref(), Some("/nonexistent/doc.rtf"));
    }

    #[test]
    fn reads_file_and_strips_newline() {
        let path = std::env::temp_dir().join(format!("rtconv-input-{}.txt", std::process::id()));
        fs::write(&path, "{char:a}\r\n").unwrap();
        let text = Source::File(path.to_string_lossy().into_owned()).read().unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(text, "{char:a}");
    }

    #[test]
    fn strips_only_one_newline() {
        assert_eq!(strip_final_newline("x\n\n".into()), "x\n");
        assert_eq!(strip_final_newline("x".into()), "x");
    }
}
