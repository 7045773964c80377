//! Expense tag
//!
//! A free-text label for the next expense. The sentinel "Tag" stands for
//! "no tag chosen", and a tag is never empty.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label shown when no tag has been chosen
pub const UNSET_TAG: &str = "Tag";

/// Free-text label attached to the next confirmed expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// The unset sentinel
    pub fn unset() -> Self {
        Self(UNSET_TAG.to_string())
    }

    /// Build a tag from raw user input
    ///
    /// Surrounding whitespace is trimmed; blank input maps to the sentinel.
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::unset()
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Whether this is the unset sentinel
    pub fn is_unset(&self) -> bool {
        self.0 == UNSET_TAG
    }

    /// The tag text, including the sentinel
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The tag text, or `None` when unset
    pub fn label(&self) -> Option<&str> {
        if self.is_unset() {
            None
        } else {
            Some(&self.0)
        }
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self::unset()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_unset() {
        assert!(Tag::from_input("").is_unset());
        assert!(Tag::from_input("  ").is_unset());
        assert!(Tag::from_input("\t\n").is_unset());
        assert_eq!(Tag::from_input("  ").as_str(), "Tag");
    }

    #[test]
    fn test_input_is_trimmed() {
        let tag = Tag::from_input("  Coffee ");
        assert_eq!(tag.as_str(), "Coffee");
        assert_eq!(tag.label(), Some("Coffee"));
    }

    #[test]
    fn test_no_length_limit() {
        let long = "x".repeat(500);
        assert_eq!(Tag::from_input(&long).as_str().len(), 500);
    }

    #[test]
    fn test_unset_has_no_label() {
        assert_eq!(Tag::default().label(), None);
    }
}
