//! Geographic search over spot coordinates

use crate::models::{Coordinates, TouristSpot};

/// Radius used for "nearby spots" unless configured otherwise
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

/// Great-circle distance between two points in kilometers
#[must_use]
pub fn distance_km(from: &Coordinates, to: &Coordinates) -> f64 {
    haversine::distance(
        haversine::Location {
            latitude: from.latitude(),
            longitude: from.longitude(),
        },
        haversine::Location {
            latitude: to.latitude(),
            longitude: to.longitude(),
        },
        haversine::Units::Kilometers,
    )
}

/// Geographic search functionality
pub struct GeographicSearch;

impl GeographicSearch {
    /// Find spots within radius (km) of a location, keeping input order
    #[must_use]
    pub fn spots_within_radius<'a>(
        spots: &'a [TouristSpot],
        center: &Coordinates,
        radius_km: f64,
    ) -> Vec<&'a TouristSpot> {
        spots
            .iter()
            .filter(|spot| distance_km(center, &spot.coordinates()) <= radius_km)
            .collect()
    }
}
