//! Items drawn against each other and their exclusion tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the draw an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Items drawn one at a time (rows of the matrix).
    A,
    /// Items chosen as partners (columns of the matrix).
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A drawable item carrying exclusion tags.
///
/// Two items that share any tag may never be paired. Tags are free-form
/// strings; a common convention is `class:value`, e.g. `country:Italy`.
///
/// # Example
///
/// ```
/// use matchdraw_core::Item;
///
/// let napoli = Item::new("Napoli", ["country:Italy", "group:A"]);
/// let inter = Item::new("Inter", ["country:Italy", "group:C"]);
/// let porto = Item::new("Porto", ["country:Portugal", "group:B"]);
///
/// assert!(napoli.excludes(&inter));
/// assert!(!napoli.excludes(&porto));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl Item {
    /// Creates an item with the given exclusion tags.
    pub fn new<I, T>(name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an item without tags.
    pub fn untagged(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns true if the two items share an exclusion tag.
    ///
    /// The relation is symmetric.
    pub fn excludes(&self, other: &Item) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
