//! Page slugs
//!
//! A slug is both the public identifier of a page and its storage key.
//! Validation guarantees that `slug + ".md"` is a plain file name inside the
//! store directory and that the file name maps back to exactly the same slug.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// File extension appended to a slug to form its backing file name
pub const PAGE_EXTENSION: &str = "md";

/// Maximum slug length in characters
pub const MAX_SLUG_LEN: usize = 128;

/// Reasons a proposed slug is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("page name is required")]
    Empty,

    #[error("page name is too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },

    #[error("page name must not contain path separators or '..'")]
    PathTraversal,

    #[error("page name contains invalid character {0:?} (allowed: letters, digits, '-', '_')")]
    InvalidChar(char),
}

/// A validated page identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Validate and normalize a raw slug.
    ///
    /// Surrounding whitespace is trimmed; everything else must already be
    /// ASCII alphanumerics, `-` or `_`.
    pub fn parse(raw: &str) -> Result<Self, SlugError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(SlugError::Empty);
        }

        if trimmed.contains('/') || trimmed.contains('\\') || trimmed.contains("..") {
            return Err(SlugError::PathTraversal);
        }

        let len = trimmed.chars().count();
        if len > MAX_SLUG_LEN {
            return Err(SlugError::TooLong {
                len,
                max: MAX_SLUG_LEN,
            });
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(SlugError::InvalidChar(c));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Recover a slug from a directory entry name.
    ///
    /// Returns `None` for anything that is not `<slug>.md` with a slug that
    /// parses to itself unchanged.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(PAGE_EXTENSION)?.strip_suffix('.')?;
        let slug = Self::parse(stem).ok()?;
        (slug.0 == stem).then_some(slug)
    }

    /// Backing file name for this slug
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.0, PAGE_EXTENSION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a raw page name, returning the normalized slug
pub fn validate(raw: &str) -> Result<Slug, SlugError> {
    Slug::parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_slugs() {
        for raw in ["welcome", "about-us", "release_notes", "Page2", "a"] {
            let slug = validate(raw).unwrap();
            assert_eq!(slug.as_str(), raw);
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let slug = validate("  about \n").unwrap();
        assert_eq!(slug.as_str(), "about");
    }

    #[test]
    fn test_rejects_empty_and_blank() {
        assert_eq!(validate(""), Err(SlugError::Empty));
        assert_eq!(validate("   "), Err(SlugError::Empty));
        assert_eq!(validate("\t\n"), Err(SlugError::Empty));
    }

    #[test]
    fn test_rejects_traversal() {
        for raw in ["../escape", "..", "a/b", "/etc/passwd", "a\\b", "foo..bar"] {
            assert_eq!(validate(raw), Err(SlugError::PathTraversal), "{raw}");
        }
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(validate(".hidden"), Err(SlugError::InvalidChar('.')));
        assert_eq!(validate("with space"), Err(SlugError::InvalidChar(' ')));
        assert_eq!(validate("página"), Err(SlugError::InvalidChar('á')));
        assert_eq!(validate("a\0b"), Err(SlugError::InvalidChar('\0')));
    }

    #[test]
    fn test_rejects_overlong() {
        let raw = "x".repeat(MAX_SLUG_LEN + 1);
        assert_eq!(
            validate(&raw),
            Err(SlugError::TooLong {
                len: MAX_SLUG_LEN + 1,
                max: MAX_SLUG_LEN
            })
        );
        assert!(validate(&"x".repeat(MAX_SLUG_LEN)).is_ok());
    }

    #[test]
    fn test_file_name_round_trip() {
        let slug = validate("about").unwrap();
        assert_eq!(slug.file_name(), "about.md");
        assert_eq!(Slug::from_file_name(&slug.file_name()), Some(slug));
    }

    #[test]
    fn test_from_file_name_skips_foreign_entries() {
        assert_eq!(Slug::from_file_name("notes.txt"), None);
        assert_eq!(Slug::from_file_name("md"), None);
        assert_eq!(Slug::from_file_name(".md"), None);
        assert_eq!(Slug::from_file_name("aboutmd"), None);
        assert_eq!(Slug::from_file_name(".about.1234.tmp"), None);
        assert_eq!(Slug::from_file_name("with space.md"), None);
        // Trimming would change the name, so it does not round-trip
        assert_eq!(Slug::from_file_name(" about.md"), None);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let slug = validate("about").unwrap();
        assert_eq!(serde_json::to_string(&slug).unwrap(), "\"about\"");
    }
}
