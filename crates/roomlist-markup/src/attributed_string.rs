// roomlist/roomlist-markup
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextAttributes {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    /// The destination if the run is part of a link.
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributedRun {
    pub text: String,
    pub attributes: TextAttributes,
}

/// Text made of runs that each carry their own styling.
///
/// Adjacent runs never share the same attributes, pushing text with the attributes of the last
/// run extends that run instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributedString {
    runs: Vec<AttributedRun>,
}

impl AttributedString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        let mut string = Self::new();
        string.push(text, TextAttributes::default());
        string
    }

    pub fn push(&mut self, text: impl Into<String>, attributes: TextAttributes) {
        let text = text.into();
        if text.is_empty() {
            return;
        }

        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.text.push_str(&text),
            _ => self.runs.push(AttributedRun { text, attributes }),
        }
    }

    pub fn runs(&self) -> &[AttributedRun] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn ends_with_whitespace(&self) -> bool {
        self.runs
            .last()
            .and_then(|run| run.text.chars().last())
            .map(char::is_whitespace)
            .unwrap_or(false)
    }

    /// Number of characters across all runs.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|run| run.text.chars().count()).sum()
    }
}

impl Display for AttributedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl From<&str> for AttributedString {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

impl From<String> for AttributedString {
    fn from(value: String) -> Self {
        Self::plain(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merges_runs_with_equal_attributes() {
        let mut string = AttributedString::plain("Hello");
        string.push(", ", TextAttributes::default());
        string.push(
            "world",
            TextAttributes {
                bold: true,
                ..Default::default()
            },
        );
        string.push("", TextAttributes::default());

        assert_eq!(string.runs().len(), 2);
        assert_eq!(string.runs()[0].text, "Hello, ");
        assert_eq!(string.to_string(), "Hello, world");
        assert_eq!(string.len(), 12);
        assert!(!string.ends_with_whitespace());
    }

    #[test]
    fn test_empty_string() {
        let string = AttributedString::from("");
        assert!(string.is_empty());
        assert_eq!(string.len(), 0);
        assert!(!string.ends_with_whitespace());
    }
}
