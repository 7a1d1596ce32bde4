// src/vocab.rs
//! Reference vocabulary and the acceptance check.
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::core::tokens::{selected, tokenize};
use crate::error::{IoContext, Result};

/// Stock color names. Matching is case-insensitive; names are lowercased on load.
pub const DEFAULT_COLORS: &[&str] = &[
    "Black", "Blue", "Brown", "Burgundy", "Cardinal", "Carolina Blue", "Columbia Blue",
    "Crimson", "Dark Gray", "Dark Green", "Forest Green", "Gold", "Gray", "Green",
    "Hunter Green", "Kelly Green", "Lime", "Light Blue", "Light Pink", "Magenta",
    "Maroon", "Navy", "Neon Green", "Neon Yellow", "Old Gold", "Orange", "Pink",
    "Purple", "Red", "Royal Blue", "Scarlet", "Silver", "Sports Yellow", "Teal",
    "Vegas Gold", "White", "Yellow",
];

/// Immutable set of lowercase color names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    colors: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_COLORS.iter().copied())
    }
}

impl Vocabulary {
    pub fn new<I, S>(colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        Self { colors }
    }

    /// One color per line; blank lines and `#` comments are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).at(path)?;
        let vocab = Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        log::debug!("loaded {} colors from {}", vocab.len(), path.display());
        Ok(vocab)
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Exact lookup; `color` must already be lowercase.
    pub fn contains(&self, color: &str) -> bool {
        self.colors.contains(color)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// True when every judged token of `raw` is a known color.
    /// Only the first two tokens are judged when there are more than two;
    /// an empty description is accepted.
    pub fn accepts(&self, raw: &str) -> bool {
        let tokens = tokenize(raw);
        selected(&tokens).iter().all(|t| self.contains(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rw() -> Vocabulary {
        Vocabulary::new(["Red", "White"])
    }

    #[test]
    fn default_is_lowercased() {
        let v = Vocabulary::default();
        assert_eq!(v.len(), DEFAULT_COLORS.len());
        assert!(v.contains("carolina blue"));
        assert!(!v.contains("Carolina Blue"));
    }

    #[test]
    fn two_or_fewer_tokens_must_all_match() {
        let v = rw();
        assert!(v.accepts("Red, White"));
        assert!(v.accepts("WHITE"));
        assert!(v.accepts("red&white"));
        assert!(!v.accepts("Blue, Gold"));
        assert!(!v.accepts("Red, Gold"));
    }

    #[test]
    fn only_first_two_judged() {
        let v = rw();
        assert!(v.accepts("Red, White, Blue"));
        assert!(v.accepts("Red, White, Blue & Gold, anything at all"));
        assert!(!v.accepts("Red, Blue, White"));
    }

    #[test]
    fn empty_description_is_accepted() {
        assert!(rw().accepts(" , & "));
    }

    #[test]
    fn load_skips_comments_and_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("colors.txt");
        fs::write(&p, "# school palette\nNavy\n\n  Old Gold  \n").unwrap();
        let v = Vocabulary::load(&p).unwrap();
        assert_eq!(v.iter().collect::<Vec<_>>(), ["navy", "old gold"]);
    }
}
