//! Skill tokens parsed from comma-separated profile fields.
//!
//! Players and requirements both store skills as free text such as
//! `"Dribbling, passing ,  "`. [`SkillSet`] normalises that text into a
//! sorted set of lowercase, trimmed tokens so set algebra and iteration order
//! are deterministic.
//!
//! # Examples
//! ```
//! use rosterfit_core::SkillSet;
//!
//! let skills = SkillSet::parse("Reflexes, communication,,REFLEXES");
//! assert_eq!(skills.len(), 2);
//! assert_eq!(skills.to_string(), "communication,reflexes");
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = ',';

/// Sorted, deduplicated set of lowercase skill tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct SkillSet {
    tokens: BTreeSet<String>,
}

impl SkillSet {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated skill list.
    ///
    /// Tokens are trimmed and lowercased; empty tokens are discarded. Parsing
    /// never fails.
    ///
    /// # Examples
    /// ```
    /// use rosterfit_core::SkillSet;
    ///
    /// assert!(SkillSet::parse(" , ,").is_empty());
    /// assert!(SkillSet::parse("Python, SQL").contains("sql"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.split(SEPARATOR).collect()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Report whether the set holds no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Report whether `skill` is present, comparing case-insensitively.
    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.tokens.contains(&normalise(skill))
    }

    /// Tokens present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            tokens: self.tokens.intersection(&other.tokens).cloned().collect(),
        }
    }

    /// Tokens present in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            tokens: self.tokens.difference(&other.tokens).cloned().collect(),
        }
    }

    /// Iterate over tokens in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

fn normalise(token: &str) -> String {
    token.trim().to_lowercase()
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let tokens = iter
            .into_iter()
            .map(|token| normalise(token.as_ref()))
            .filter(|token| !token.is_empty())
            .collect();
        Self { tokens }
    }
}

impl FromStr for SkillSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for SkillSet {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for SkillSet {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SkillSet> for String {
    fn from(skills: SkillSet) -> Self {
        skills.to_string()
    }
}

impl fmt::Display for SkillSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(token)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
