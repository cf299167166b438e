//! Spot catalog
//!
//! The catalog is the full, ordered set of spots the app can browse. It is
//! built once at startup and never mutated afterwards.

use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::models::{Category, Coordinates, SpotId, TouristSpot};

/// Embedded sample data: (name, description, image, coordinates, category)
const SAMPLE_SPOTS: [(&str, &str, &str, Coordinates, Category); 12] = [
    (
        "台北 101",
        "台北最著名的摩天大樓，觀景台可俯瞰整個台北盆地。",
        "taipei101",
        Coordinates::from_const(25.033_964, 121.564_468),
        Category::Landmark,
    ),
    (
        "日月潭",
        "台灣最大的天然湖泊，湖光山色四季皆美。",
        "sun_moon_lake",
        Coordinates::from_const(23.857_2, 120.915_7),
        Category::Nature,
    ),
    (
        "阿里山",
        "以日出、雲海與森林鐵路聞名的高山景區。",
        "alishan",
        Coordinates::from_const(23.510_6, 120.802_7),
        Category::Nature,
    ),
    (
        "國立故宮博物院",
        "收藏數十萬件中華文物的世界級博物館。",
        "national_palace_museum",
        Coordinates::from_const(25.102_4, 121.548_5),
        Category::History,
    ),
    (
        "中正紀念堂",
        "白牆藍瓦的紀念建築，廣場上定時舉行衛兵交接。",
        "cks_memorial_hall",
        Coordinates::from_const(25.034_7, 121.521_8),
        Category::History,
    ),
    (
        "龍山寺",
        "萬華地區香火鼎盛的古剎，建於清乾隆年間。",
        "longshan_temple",
        Coordinates::from_const(25.037_2, 121.499_9),
        Category::Religion,
    ),
    (
        "總統府",
        "日治時期興建的巴洛克風格建築，現為總統辦公處所。",
        "presidential_office",
        Coordinates::from_const(25.040_0, 121.511_9),
        Category::Landmark,
    ),
    (
        "赤崁樓",
        "荷蘭人建於十七世紀的城堡遺址，台南的歷史地標。",
        "chihkan_tower",
        Coordinates::from_const(22.997_5, 120.202_5),
        Category::History,
    ),
    (
        "佛光山",
        "高雄大樹區的佛教聖地，佛陀紀念館莊嚴壯觀。",
        "fo_guang_shan",
        Coordinates::from_const(22.755_4, 120.442_7),
        Category::Religion,
    ),
    (
        "85 大樓",
        "高雄港邊的地標摩天樓，造型取自「高」字。",
        "tower_85",
        Coordinates::from_const(22.611_6, 120.300_3),
        Category::Landmark,
    ),
    (
        "安平古堡",
        "台灣最早的城堡，見證荷蘭與鄭氏時期的歷史。",
        "anping_fort",
        Coordinates::from_const(23.001_6, 120.160_6),
        Category::History,
    ),
    (
        "鹿港天后宮",
        "供奉湄洲媽祖開基聖像的百年廟宇。",
        "lukang_mazu_temple",
        Coordinates::from_const(24.057_3, 120.432_3),
        Category::Religion,
    ),
];

static SAMPLE_CATALOG: LazyLock<Arc<SpotCatalog>> = LazyLock::new(|| {
    let spots = SAMPLE_SPOTS
        .iter()
        .map(|&(name, description, image, coordinates, category)| {
            TouristSpot::new(name, description, image, coordinates, category)
        })
        .collect();
    Arc::new(SpotCatalog::from_spots(spots))
});

/// Immutable, ordered collection of tourist spots
#[derive(Debug, Clone, Default)]
pub struct SpotCatalog {
    spots: Vec<TouristSpot>,
}

impl SpotCatalog {
    /// Build a catalog from records, keeping their order
    #[must_use]
    pub fn from_spots(spots: Vec<TouristSpot>) -> Self {
        debug!("Built spot catalog with {} spots", spots.len());
        Self { spots }
    }

    /// The embedded sample catalog. Built on first use and shared afterwards,
    /// so spot ids stay stable for the whole process.
    #[must_use]
    pub fn sample() -> Arc<SpotCatalog> {
        Arc::clone(&SAMPLE_CATALOG)
    }

    #[must_use]
    pub fn all(&self) -> &[TouristSpot] {
        &self.spots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TouristSpot> {
        self.spots.iter()
    }

    /// Look up a spot by id
    #[must_use]
    pub fn get(&self, id: &SpotId) -> Option<&TouristSpot> {
        self.spots.iter().find(|spot| spot.id() == *id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpotCatalog {
    type Item = &'a TouristSpot;
    type IntoIter = std::slice::Iter<'a, TouristSpot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
