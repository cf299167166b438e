//! Favorites store
//!
//! An ordered membership set of spots. Insertion order is the display order
//! of the favorites screen. Consumers that need live updates subscribe to a
//! broadcast channel instead of polling.

use tokio::sync::broadcast;
use tracing::{debug, trace};

use crate::models::TouristSpot;

const EVENT_CAPACITY: usize = 64;

/// Change published on every toggle
#[derive(Debug, Clone, PartialEq)]
pub enum FavoritesEvent {
    Added(TouristSpot),
    Removed(TouristSpot),
}

/// In-memory favorites for one session
#[derive(Debug)]
pub struct FavoritesStore {
    spots: Vec<TouristSpot>,
    events: broadcast::Sender<FavoritesEvent>,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FavoritesStore {
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            spots: Vec::new(),
            events,
        }
    }

    /// Flip membership of `spot`: remove it if present, otherwise append it.
    /// Returns whether the spot is a favorite afterwards.
    pub fn toggle(&mut self, spot: &TouristSpot) -> bool {
        let event = match self.spots.iter().position(|s| s == spot) {
            Some(index) => {
                let removed = self.spots.remove(index);
                debug!("Removed '{}' from favorites", removed.name());
                FavoritesEvent::Removed(removed)
            }
            None => {
                self.spots.push(spot.clone());
                debug!("Added '{}' to favorites", spot.name());
                FavoritesEvent::Added(spot.clone())
            }
        };
        let now_favorite = matches!(event, FavoritesEvent::Added(_));

        if self.events.send(event).is_err() {
            trace!("No favorites subscribers");
        }

        now_favorite
    }

    #[must_use]
    pub fn is_favorite(&self, spot: &TouristSpot) -> bool {
        self.spots.contains(spot)
    }

    /// Current favorites in the order they were added
    #[must_use]
    pub fn list(&self) -> &[TouristSpot] {
        &self.spots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// Receive every subsequent favorites change
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<FavoritesEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Coordinates};
    use tokio::sync::broadcast::error::TryRecvError;

    fn create_test_spot(name: &str) -> TouristSpot {
        TouristSpot::new(
            name,
            format!("{name} description"),
            name.to_lowercase(),
            Coordinates::new(24.0, 121.0).unwrap(),
            Category::Nature,
        )
    }

    #[test]
    fn test_toggle_adds_to_end() {
        let mut store = FavoritesStore::new();
        let a = create_test_spot("A");
        let b = create_test_spot("B");

        assert!(store.toggle(&a));
        assert!(store.toggle(&b));

        assert!(store.is_favorite(&b));
        assert_eq!(store.list().last(), Some(&b));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut store = FavoritesStore::new();
        let a = create_test_spot("A");
        let b = create_test_spot("B");
        let c = create_test_spot("C");
        store.toggle(&a);
        store.toggle(&b);
        store.toggle(&c);
        let before = store.list().to_vec();

        assert!(!store.toggle(&b));
        assert_eq!(store.list(), &[a.clone(), c.clone()]);
        assert!(store.toggle(&b));

        // b comes back at the end, others keep their relative order
        assert_eq!(store.list(), &[a, c, b]);
        assert_eq!(store.len(), before.len());

        let d = create_test_spot("D");
        store.toggle(&d);
        store.toggle(&d);
        assert!(!store.is_favorite(&d));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_order_is_insertion_not_catalog() {
        let catalog = crate::SpotCatalog::sample();
        let mut store = FavoritesStore::new();
        let later = &catalog.all()[5];
        let earlier = &catalog.all()[1];

        store.toggle(later);
        store.toggle(earlier);

        assert_eq!(store.list(), &[later.clone(), earlier.clone()]);
    }

    #[test]
    fn test_equal_clone_counts_as_member() {
        let mut store = FavoritesStore::new();
        let a = create_test_spot("A");
        store.toggle(&a);
        assert!(store.is_favorite(&a.clone()));
        assert!(!store.toggle(&a.clone()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_same_name_different_spot_is_distinct() {
        let mut store = FavoritesStore::new();
        let a1 = create_test_spot("A");
        let a2 = create_test_spot("A");
        store.toggle(&a1);
        assert!(!store.is_favorite(&a2));
    }

    #[test]
    fn test_toggle_publishes_events() {
        let mut store = FavoritesStore::new();
        let mut rx = store.subscribe();
        let a = create_test_spot("A");

        store.toggle(&a);
        store.toggle(&a);

        assert_eq!(rx.try_recv().unwrap(), FavoritesEvent::Added(a.clone()));
        assert_eq!(rx.try_recv().unwrap(), FavoritesEvent::Removed(a));
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[test]
    fn test_toggle_without_subscribers() {
        let mut store = FavoritesStore::default();
        let a = create_test_spot("A");
        assert!(store.toggle(&a));
        assert!(store.is_favorite(&a));
    }

    #[test]
    fn test_double_toggle_for_deserialized_spot() {
        let mut store = FavoritesStore::new();
        let json = serde_json::to_string(&create_test_spot("Edge")).unwrap();
        let spot: TouristSpot = serde_json::from_str(&json).unwrap();
        assert_eq!(spot, spot.clone());

        assert!(store.toggle(&spot));
        assert!(!store.toggle(&spot));

        assert!(store.is_empty());
        assert!(!store.is_favorite(&spot));
    }

    #[test]
    fn test_spots_cannot_carry_nan_coordinates() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        let json = r#"{"latitude": 100.0, "longitude": 0.0}"#;
        assert!(serde_json::from_str::<Coordinates>(json).is_err());

        let mut store = FavoritesStore::new();
        let extreme = TouristSpot::new(
            "Pole",
            "",
            "",
            Coordinates::new(90.0, 180.0).unwrap(),
            Category::Nature,
        );
        store.toggle(&extreme);
        store.toggle(&extreme);
        assert!(store.is_empty());
    }
}
