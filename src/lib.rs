//! `TourSpot` - tourist spot browsing core
//!
//! This library provides the data model behind a travel browsing app: the
//! static spot catalog, the category and text filter for the list view, and
//! the per-session favorites store.

pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod geo;
pub mod models;
pub mod session;
pub mod settings;
pub mod telemetry;

// Re-export core types for public API
pub use catalog::SpotCatalog;
pub use config::TourspotConfig;
pub use error::TourspotError;
pub use favorites::{FavoritesEvent, FavoritesStore};
pub use filter::{SpotFilter, filter};
pub use geo::{GeographicSearch, distance_km};
pub use models::{Category, Coordinates, SpotId, TouristSpot};
pub use session::BrowseSession;
pub use settings::{FileSettings, Language, MemorySettings, SettingsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TourspotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
