//! Tourist spot record and its coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::Category;
use crate::TourspotError;

/// Opaque spot identifier, generated once per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(Uuid);

impl SpotId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// WGS84 coordinates in decimal degrees.
///
/// Fields are private: every value has passed the range check, so NaN or
/// out-of-range coordinates never reach a `TouristSpot`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinates")]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawCoordinates {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinates> for Coordinates {
    type Error = TourspotError;

    fn try_from(raw: RawCoordinates) -> Result<Self, Self::Error> {
        Coordinates::new(raw.latitude, raw.longitude)
    }
}

const fn in_range(latitude: f64, longitude: f64) -> bool {
    latitude >= -90.0 && latitude <= 90.0 && longitude >= -180.0 && longitude <= 180.0
}

impl Coordinates {
    /// Create coordinates, rejecting values outside the WGS84 ranges
    pub fn new(latitude: f64, longitude: f64) -> crate::Result<Self> {
        if in_range(latitude, longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(TourspotError::validation(format!(
                "Coordinates out of range: {latitude:.4}, {longitude:.4}"
            )))
        }
    }

    /// Range-checked at compile time when used in a `const` context
    pub(crate) const fn from_const(latitude: f64, longitude: f64) -> Self {
        assert!(in_range(latitude, longitude), "coordinates out of range");
        Self {
            latitude,
            longitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        in_range(self.latitude, self.longitude)
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A single tourist destination.
///
/// Fields are private so a record cannot change after construction. Two spots
/// are equal only when every field matches, including the generated id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouristSpot {
    id: SpotId,
    name: String,
    description: String,
    image_name: String,
    coordinates: Coordinates,
    category: Category,
}

impl TouristSpot {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        image_name: impl Into<String>,
        coordinates: Coordinates,
        category: Category,
    ) -> Self {
        Self {
            id: SpotId::generate(),
            name: name.into(),
            description: description.into(),
            image_name: image_name.into(),
            coordinates,
            category,
        }
    }

    #[must_use]
    pub fn id(&self) -> SpotId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Name of the image asset, resolved by the presentation layer
    #[must_use]
    pub fn image_name(&self) -> &str {
        &self.image_name
    }

    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude()
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }
}
