//! Client-side logic for the recommendation pages: like-driven rail
//! ordering, layout-transition planning and the travel page sections.

pub mod controller;
pub mod flip;
pub mod likes;
pub mod sections;

pub use controller::{
    fallback_rail, load_destinations, load_top10, LayoutProbe, LikeToggle, RecommendationList,
};
pub use flip::{invert, plan_moves, InverseTransform, PlannedMove, Rect};
pub use likes::LikeOrder;
pub use sections::{restaurant_sections, RestaurantSections};

/// Google Maps search link for a place. Returns None when there is
/// nothing to search for.
pub fn maps_search_url(name: &str, address: &str) -> Option<String> {
    let query = format!("{} {}", name.trim(), address.trim());
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(query)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_url_encodes_name_and_address() {
        let url = maps_search_url("소금집 다이닝", "서울 강남구 도산대로 217").unwrap();
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(!url.contains(' '), "Query must be percent-encoded: {}", url);
    }

    #[test]
    fn test_maps_url_with_only_a_name_still_works() {
        let url = maps_search_url("광장 빈대떡", "").unwrap();
        assert!(url.ends_with(&urlencoding::encode("광장 빈대떡").to_string()));
    }

    #[test]
    fn test_maps_url_requires_some_query() {
        assert!(maps_search_url("", "").is_none());
        assert!(maps_search_url("  ", "  ").is_none());
    }
}
