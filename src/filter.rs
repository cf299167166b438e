//! List filtering
//!
//! A spot passes when it matches the selected category (if any) and its name
//! contains the search text (if any). Matching is case-sensitive and the
//! result keeps catalog order.

use tracing::debug;

use crate::catalog::SpotCatalog;
use crate::models::{Category, TouristSpot};

/// Filter state of the spot list view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotFilter {
    pub query: String,
    /// `None` means all categories
    pub category: Option<Category>,
}

impl SpotFilter {
    #[must_use]
    pub fn new(query: impl Into<String>, category: Option<Category>) -> Self {
        Self {
            query: query.into(),
            category,
        }
    }

    #[must_use]
    pub fn matches(&self, spot: &TouristSpot) -> bool {
        let category_ok = self.category.is_none_or(|c| spot.category() == c);
        let text_ok = self.query.is_empty() || spot.name().contains(self.query.as_str());
        category_ok && text_ok
    }

    /// Stable filter over `spots`
    #[must_use]
    pub fn apply<'a>(&self, spots: &'a [TouristSpot]) -> Vec<&'a TouristSpot> {
        let matched: Vec<_> = spots.iter().filter(|spot| self.matches(spot)).collect();
        debug!(
            query = %self.query,
            category = ?self.category,
            "Filter matched {} of {} spots",
            matched.len(),
            spots.len()
        );
        matched
    }
}

/// Spots of `catalog` matching `query` and `category`, in catalog order
#[must_use]
pub fn filter<'a>(
    catalog: &'a SpotCatalog,
    query: &str,
    category: Option<Category>,
) -> Vec<&'a TouristSpot> {
    SpotFilter::new(query, category).apply(catalog.all())
}
