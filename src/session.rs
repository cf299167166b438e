//! Browsing session
//!
//! Ties the shared catalog, the session's favorites and the display language
//! together for the presentation layer. Switching language keeps favorites:
//! the store lives as long as the session, not as long as one UI tree.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

use crate::catalog::SpotCatalog;
use crate::config::TourspotConfig;
use crate::favorites::{FavoritesEvent, FavoritesStore};
use crate::filter::filter;
use crate::geo::{DEFAULT_NEARBY_RADIUS_KM, GeographicSearch};
use crate::models::{Category, TouristSpot};
use crate::settings::{FileSettings, Language, SettingsStore, load_language, save_language};

#[derive(Debug)]
pub struct BrowseSession {
    catalog: Arc<SpotCatalog>,
    favorites: FavoritesStore,
    language: Language,
    nearby_radius_km: f64,
    settings: Box<dyn SettingsStore>,
}

impl BrowseSession {
    /// Start a session with empty favorites and the stored language
    pub fn new(catalog: Arc<SpotCatalog>, settings: Box<dyn SettingsStore>) -> crate::Result<Self> {
        Self::with_defaults(
            catalog,
            settings,
            Language::default(),
            DEFAULT_NEARBY_RADIUS_KM,
        )
    }

    /// Start a session over the sample catalog using the configured settings
    /// file, fallback language and nearby radius
    pub fn from_config(config: &TourspotConfig) -> crate::Result<Self> {
        let fallback = config.language()?;
        let settings = FileSettings::open(&config.defaults.settings_path)?;
        Self::with_defaults(
            SpotCatalog::sample(),
            Box::new(settings),
            fallback,
            config.defaults.nearby_radius_km,
        )
    }

    fn with_defaults(
        catalog: Arc<SpotCatalog>,
        settings: Box<dyn SettingsStore>,
        fallback_language: Language,
        nearby_radius_km: f64,
    ) -> crate::Result<Self> {
        let language = load_language(settings.as_ref(), fallback_language)?;
        info!(
            "Starting browse session with {} spots, language {}",
            catalog.len(),
            language
        );
        Ok(Self {
            catalog,
            favorites: FavoritesStore::new(),
            language,
            nearby_radius_km,
            settings,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &SpotCatalog {
        &self.catalog
    }

    /// Spots for the list view
    #[must_use]
    pub fn filter(&self, query: &str, category: Option<Category>) -> Vec<&TouristSpot> {
        filter(&self.catalog, query, category)
    }

    pub fn toggle_favorite(&mut self, spot: &TouristSpot) -> bool {
        self.favorites.toggle(spot)
    }

    #[must_use]
    pub fn is_favorite(&self, spot: &TouristSpot) -> bool {
        self.favorites.is_favorite(spot)
    }

    #[must_use]
    pub fn favorites(&self) -> &[TouristSpot] {
        self.favorites.list()
    }

    #[must_use]
    pub fn subscribe_favorites(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.favorites.subscribe()
    }

    /// Other catalog spots within the nearby radius of `spot`
    #[must_use]
    pub fn nearby(&self, spot: &TouristSpot) -> Vec<&TouristSpot> {
        GeographicSearch::spots_within_radius(
            self.catalog.all(),
            &spot.coordinates(),
            self.nearby_radius_km,
        )
        .into_iter()
        .filter(|other| *other != spot)
        .collect()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Persist and apply a new display language
    pub fn set_language(&mut self, language: Language) -> crate::Result<()> {
        if language == self.language {
            return Ok(());
        }
        save_language(self.settings.as_mut(), language)?;
        info!(
            "Language changed from {} to {}, keeping {} favorites",
            self.language,
            language,
            self.favorites.len()
        );
        self.language = language;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TourspotError;
    use crate::settings::{LANGUAGE_KEY, MemorySettings};
    use tempfile::TempDir;

    fn session() -> BrowseSession {
        BrowseSession::new(SpotCatalog::sample(), Box::new(MemorySettings::new())).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = session();
        assert!(session.favorites().is_empty());
        assert_eq!(session.language(), Language::TraditionalChinese);
        assert_eq!(session.catalog().len(), 12);
    }

    #[test]
    fn test_session_reads_stored_language() {
        let mut settings = MemorySettings::new();
        settings.set(LANGUAGE_KEY, "en").unwrap();
        let session = BrowseSession::new(SpotCatalog::sample(), Box::new(settings)).unwrap();
        assert_eq!(session.language(), Language::English);
    }

    #[test]
    fn test_language_change_keeps_favorites() {
        let mut session = session();
        let spot = session.catalog().all()[3].clone();
        session.toggle_favorite(&spot);

        session.set_language(Language::English).unwrap();

        assert_eq!(session.language(), Language::English);
        assert!(session.is_favorite(&spot));
        assert_eq!(session.favorites(), &[spot]);
    }

    #[test]
    fn test_filter_through_session() {
        let session = session();
        let result = session.filter("101", None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name(), "台北 101");
    }

    #[test]
    fn test_session_favorite_events() {
        let mut session = session();
        let mut rx = session.subscribe_favorites();
        let spot = session.catalog().all()[1].clone();

        assert!(session.toggle_favorite(&spot));

        assert_eq!(rx.try_recv().unwrap(), FavoritesEvent::Added(spot));
    }

    #[test]
    fn test_nearby_excludes_self() {
        let session = session();
        let taipei_101 = session.catalog().all()[0].clone();

        let names: Vec<_> = session.nearby(&taipei_101).iter().map(|s| s.name()).collect();

        assert_eq!(names, vec!["國立故宮博物院", "中正紀念堂", "龍山寺", "總統府"]);
    }

    #[test]
    fn test_from_config_uses_configured_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = TourspotConfig::default();
        config.defaults.language = "en".to_string();
        config.defaults.nearby_radius_km = 5.0;
        config.defaults.settings_path = temp_dir
            .path()
            .join("settings.json")
            .to_string_lossy()
            .into_owned();

        let mut session = BrowseSession::from_config(&config).unwrap();
        assert_eq!(session.language(), Language::English);

        let taipei_101 = session.catalog().all()[0].clone();
        let names: Vec<_> = session.nearby(&taipei_101).iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["中正紀念堂"]);

        session.set_language(Language::TraditionalChinese).unwrap();
        let reopened = BrowseSession::from_config(&config).unwrap();
        assert_eq!(reopened.language(), Language::TraditionalChinese);
    }

    #[test]
    fn test_from_config_rejects_unknown_language() {
        let mut config = TourspotConfig::default();
        config.defaults.language = "fr".to_string();

        let err = BrowseSession::from_config(&config).unwrap_err();

        assert!(matches!(err, TourspotError::Config { .. }));
    }

    #[test]
    fn test_failed_language_save_keeps_language() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let mut config = TourspotConfig::default();
        config.defaults.settings_path = blocker
            .join("settings.json")
            .to_string_lossy()
            .into_owned();
        let mut session = BrowseSession::from_config(&config).unwrap();

        assert!(session.set_language(Language::English).is_err());
        assert_eq!(session.language(), Language::TraditionalChinese);
    }
}
