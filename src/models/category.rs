//! Spot categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TourspotError;

/// Closed classification of a tourist spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nature,
    /// Landmarks and notable buildings
    #[serde(alias = "building")]
    Landmark,
    History,
    Religion,
}

impl Category {
    /// All categories in the order the category picker shows them
    pub const ALL: [Category; 4] = [
        Category::Nature,
        Category::Landmark,
        Category::History,
        Category::Religion,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Landmark => "landmark",
            Category::History => "history",
            Category::Religion => "religion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TourspotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nature" => Ok(Category::Nature),
            "landmark" | "building" => Ok(Category::Landmark),
            "history" => Ok(Category::History),
            "religion" => Ok(Category::Religion),
            other => Err(TourspotError::validation(format!(
                "Unknown category '{other}'. Must be one of: {}",
                Category::ALL.map(Category::as_str).join(", ")
            ))),
        }
    }
}
