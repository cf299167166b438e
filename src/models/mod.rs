//! Data models for TourSpot
//!
//! - Category: closed classification of spots
//! - Spot: the immutable tourist spot record and its coordinates

pub mod category;
pub mod spot;

pub use category::Category;
pub use spot::{Coordinates, SpotId, TouristSpot};
