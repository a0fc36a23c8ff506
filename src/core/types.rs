//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a building, house or antenna
///
/// Always matches `[A-Za-z_][A-Za-z0-9_]*`. Ordering is the plain byte-wise
/// ordering of the text, which is what the scene store sorts by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Identifier(String);

impl Identifier {
    /// Build an identifier, returning `None` if `s` is not a valid one
    pub fn new(s: &str) -> Option<Self> {
        if Self::is_valid(s) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Whether `s` fully matches `[A-Za-z_][A-Za-z0-9_]*`
    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of a scene entity; each kind has its own identifier namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Building,
    House,
    Antenna,
}

impl EntityKind {
    /// Keyword introducing a line of this kind in a scene stream
    pub fn keyword(&self) -> &'static str {
        match self {
            EntityKind::Building => "building",
            EntityKind::House => "house",
            EntityKind::Antenna => "antenna",
        }
    }

    /// Number of tokens on a line of this kind, keyword included
    pub fn token_count(&self) -> usize {
        match self {
            EntityKind::Building | EntityKind::House => 6,
            EntityKind::Antenna => 5,
        }
    }

    /// Plural form used in summaries and error messages
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Building => "buildings",
            EntityKind::House => "houses",
            EntityKind::Antenna => "antennas",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Integer point on the scene plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
