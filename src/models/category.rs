//! Category identifiers and the membership sets built from theme settings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Opaque forum category identifier.
///
/// Forum categories are addressed by non-negative integer ids
/// (e.g. `/c/general/5`). The resolver never interprets the value beyond
/// equality, so the id is kept as a newtype rather than a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Creates a category id from its numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| format!("'{trimmed}' is not a valid category id"))
    }
}

/// Unordered set of category ids.
///
/// Backed by a `BTreeSet` so iteration (and therefore any rendered output)
/// is stable regardless of the order ids appeared in the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet(BTreeSet<CategoryId>);

impl CategorySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Parses a delimited category list, returning the set and the entries
    /// that were rejected.
    ///
    /// Entries may be separated by `,`, `;`, `|` or whitespace. Empty entries
    /// are skipped silently; anything that is not a non-negative integer is
    /// returned in the rejected list so callers can report it.
    ///
    /// # Examples
    ///
    /// ```
    /// use topic_cards::models::{CategoryId, CategorySet};
    ///
    /// let (set, rejected) = CategorySet::parse_list("5|7, abc; 9");
    /// assert!(set.contains(CategoryId::new(7)));
    /// assert_eq!(set.len(), 3);
    /// assert_eq!(rejected, vec!["abc".to_string()]);
    /// ```
    pub fn parse_list(text: &str) -> (Self, Vec<String>) {
        let mut set = Self::new();
        let mut rejected = Vec::new();

        for entry in text
            .split(|c: char| matches!(c, ',' | ';' | '|') || c.is_whitespace())
            .filter(|entry| !entry.is_empty())
        {
            match entry.parse::<CategoryId>() {
                Ok(id) => {
                    set.insert(id);
                }
                Err(_) => rejected.push(entry.to_string()),
            }
        }

        (set, rejected)
    }

    /// Adds an id to the set. Returns false if it was already present.
    pub fn insert(&mut self, id: CategoryId) -> bool {
        self.0.insert(id)
    }

    /// Returns true if the id is a member.
    pub fn contains(&self, id: CategoryId) -> bool {
        self.0.contains(&id)
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = CategoryId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CategoryId> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CategoryId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", ids.join("|"))
    }
}
