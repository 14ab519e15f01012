//! Static content tables for the SeoulMate page.
//!
//! Two loading methods, mirroring how the rest of the app treats data files:
//! - `default_catalog()` - the catalog embedded into the binary
//! - `load_catalog(path)` - a replacement catalog from a file path

pub mod types;

use std::path::Path;

use anyhow::{Context, Result};

pub use types::{
    CardSlot, Catalog, GenreOption, RestaurantEntry, SpoonTier, TravelStyleOption, VideoCard,
};

/// Default catalog embedded in the binary at compile time.
const DEFAULT_CATALOG: &str = include_str!("../../config/catalog.toml");

/// Get the catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a build-time bug).
pub fn default_catalog() -> Catalog {
    toml::from_str(DEFAULT_CATALOG).expect("embedded catalog.toml must be valid TOML")
}

/// Load a catalog from a TOML file at the given path.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {:?}", path))?;
    let catalog: Catalog =
        toml::from_str(&content).with_context(|| format!("Invalid catalog file {:?}", path))?;
    Ok(catalog)
}
