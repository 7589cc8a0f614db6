//! Display order for news listings

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Order in which a listing presents items.
///
/// Storage always keeps insertion order; this only affects display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayOrder {
    /// Most recently added first
    #[default]
    Newest,
    /// Insertion order
    Oldest,
}

impl DisplayOrder {
    /// Arrange items (given in insertion order) for display
    pub fn arrange<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        match self {
            DisplayOrder::Newest => items.iter().rev().collect(),
            DisplayOrder::Oldest => items.iter().collect(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayOrder::Newest => "newest",
            DisplayOrder::Oldest => "oldest",
        }
    }
}

impl FromStr for DisplayOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(DisplayOrder::Newest),
            "oldest" => Ok(DisplayOrder::Oldest),
            _ => Err(format!(
                "Invalid order: '{}'. Valid orders are: newest, oldest",
                s
            )),
        }
    }
}
