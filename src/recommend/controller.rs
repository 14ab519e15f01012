//! Controller for the recommendation rail.

use std::collections::HashMap;

use tracing::warn;

use crate::api::{ApiClient, Destination, MediaItem};
use crate::catalog::Catalog;

use super::flip::{plan_moves, PlannedMove, Rect};
use super::likes::LikeOrder;

/// Supplies on-screen rectangles for a given display order.
///
/// The host measures the real layout; tests compute synthetic geometry.
/// `measure` must answer for the order it is given, since it is called
/// once before and once after a reorder.
pub trait LayoutProbe {
    fn measure(&self, ordered_ids: &[String]) -> HashMap<String, Rect>;
}

/// Result of one like toggle: the new like state plus the transition plan
/// for every card that changed position.
#[derive(Debug, Clone)]
pub struct LikeToggle {
    pub id: String,
    pub liked: bool,
    pub moves: Vec<PlannedMove>,
}

/// Client-side state for the recommendation rail: a fixed backing list and
/// the like order deriving its display order.
///
/// The backing list never changes; liking only affects presentation.
pub struct RecommendationList {
    items: Vec<MediaItem>,
    likes: LikeOrder,
}

impl RecommendationList {
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            likes: LikeOrder::new(),
        }
    }

    /// The backing list, in its original order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn is_liked(&self, media_id: i64) -> bool {
        self.likes.is_liked(&media_id.to_string())
    }

    /// Current display order: liked cards first, the rest as delivered.
    pub fn display_order(&self) -> Vec<&MediaItem> {
        self.likes.display_order(&self.items, |item| item.id.to_string())
    }

    /// Toggle a like and plan the resulting layout transition.
    ///
    /// The whole sequence is synchronous: the first snapshot is captured
    /// before the mutation, the last one right after, so the move plan
    /// reflects the exact pre/post layout and can be played before the
    /// next paint.
    pub fn toggle_like<P: LayoutProbe>(&mut self, media_id: i64, probe: &P) -> LikeToggle {
        let id = media_id.to_string();

        let first = probe.measure(&self.ordered_ids());
        let liked = self.likes.toggle(&id);
        let last = probe.measure(&self.ordered_ids());

        LikeToggle {
            id,
            liked,
            moves: plan_moves(&first, &last),
        }
    }

    fn ordered_ids(&self) -> Vec<String> {
        self.display_order()
            .into_iter()
            .map(|item| item.id.to_string())
            .collect()
    }
}

/// Fetch the top destinations for the selected media. Failure is logged
/// and yields an empty list; the page renders without the section.
pub async fn load_destinations(client: &ApiClient, media_id: i64) -> Vec<Destination> {
    match client.top3_destinations(media_id).await {
        Ok(destinations) => destinations,
        Err(e) => {
            warn!("Failed to load destinations for media {}: {}", media_id, e);
            Vec::new()
        }
    }
}

/// Fetch the TOP-10 media rail. An unreachable backend or an empty answer
/// falls back to the catalog's popular rail so the section still renders.
pub async fn load_top10(client: &ApiClient, catalog: &Catalog) -> Vec<MediaItem> {
    match client.top10_media().await {
        Ok(items) if !items.is_empty() => items,
        Ok(_) => {
            warn!("Top 10 media came back empty, falling back to the catalog rail");
            fallback_rail(catalog)
        }
        Err(e) => {
            warn!("Failed to load top 10 media, falling back to the catalog rail: {}", e);
            fallback_rail(catalog)
        }
    }
}

/// The catalog's popular rail reshaped as media items.
pub fn fallback_rail(catalog: &Catalog) -> Vec<MediaItem> {
    catalog
        .popular_videos
        .iter()
        .map(|video| MediaItem {
            id: video.id,
            title: video.title.clone(),
            media_type: "popular".to_string(),
            poster_url: video.image.clone(),
        })
        .collect()
}
