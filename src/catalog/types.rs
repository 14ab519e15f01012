//! Type definitions for the static content catalog.
//!
//! The catalog is data, not behavior: survey options, the two home-page
//! video rails, the restaurant table and the decorative card slots, all
//! loaded from TOML.

use serde::Deserialize;

/// One selectable K-content genre in the taste survey.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreOption {
    /// Stable identifier stored in the preference record (e.g., "drama")
    pub id: String,
    /// Display label
    pub label: String,
    /// Decorative emoji shown on the option button
    pub emoji: String,
}

/// One selectable travel style in the taste survey.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelStyleOption {
    pub id: String,
    pub label: String,
    pub emoji: String,
    /// One-line description under the label
    pub desc: String,
}

/// A card on one of the home-page video rails.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoCard {
    pub id: i64,
    pub title: String,
    /// Corner badge text (e.g., "TOP 1", "HEALING")
    pub tag: String,
    /// Runtime label; not every card carries one
    #[serde(default)]
    pub duration: Option<String>,
    /// Poster asset path
    pub image: String,
}

/// Which brigade a restaurant's chef competed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpoonTier {
    White,
    Black,
}

/// A restaurant from the show, listed on the travel page.
#[derive(Debug, Clone, Deserialize)]
pub struct RestaurantEntry {
    pub id: i64,
    pub name: String,
    pub chef: String,
    pub address: String,
    pub tier: SpoonTier,
}

/// Fixed geometry and image pool for one decorative floating card slot.
#[derive(Debug, Clone, Deserialize)]
pub struct CardSlot {
    pub id: String,
    /// Base width in pixels before per-frame scaling
    pub width: u32,
    /// Base height in pixels before per-frame scaling
    pub height: u32,
    /// Posters specific to this slot, tried before the shared pool
    #[serde(default)]
    pub images: Vec<String>,
}

/// Root catalog loaded from catalog.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub genres: Vec<GenreOption>,
    pub travel_styles: Vec<TravelStyleOption>,
    /// Rail shown to survey participants (Route A)
    pub personalized_videos: Vec<VideoCard>,
    /// TOP-10 rail shown to everyone else (Route B)
    pub popular_videos: Vec<VideoCard>,
    pub restaurants: Vec<RestaurantEntry>,
    pub card_slots: Vec<CardSlot>,
    /// Shared poster pool every card slot can draw from
    #[serde(default)]
    pub card_images: Vec<String>,
}

impl Catalog {
    /// Display label for a genre id, if the catalog knows it.
    pub fn genre_label(&self, id: &str) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.label.as_str())
    }

    /// Display label for a travel style id, if the catalog knows it.
    pub fn travel_style_label(&self, id: &str) -> Option<&str> {
        self.travel_styles
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.label.as_str())
    }
}
