//! Wire types for the recommendation backend.
//!
//! The backend has shipped both snake_case and camelCase field names for
//! image URLs; inbound data accepts either and everything downstream sees
//! the camelCase form.

use serde::{Deserialize, Serialize};

/// Poster shown when a media item arrives without a usable image URL.
pub const DEFAULT_POSTER: &str = "/images/placeholder.png";

/// One entry of the TOP-10 media list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: i64,
    pub title: String,
    /// Free-form media kind from the backend (e.g., "drama", "variety")
    #[serde(rename = "type")]
    pub media_type: String,
    #[serde(rename = "posterUrl", alias = "poster_url", default)]
    pub poster_url: String,
}

impl MediaItem {
    /// Poster URL with the fixed fallback for missing images.
    pub fn poster_or_default(&self) -> &str {
        if self.poster_url.trim().is_empty() {
            DEFAULT_POSTER
        } else {
            &self.poster_url
        }
    }
}

/// One recommended destination for a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "imageUrl", alias = "image_url", default)]
    pub image_url: String,
}

impl Destination {
    /// Image URL with the fixed fallback for missing images.
    pub fn image_or_default(&self) -> &str {
        if self.image_url.trim().is_empty() {
            DEFAULT_POSTER
        } else {
            &self.image_url
        }
    }
}

/// Flattened preference tags submitted after the survey.
///
/// Key names are part of the backend contract; the multi-select fields are
/// comma-joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagPayload {
    pub gender: String,
    pub age_group: String,
    pub genre: String,
    pub travel_style: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_item_accepts_snake_case_poster() {
        let json = r#"{"id": 1, "title": "Black & White Chef", "type": "variety", "poster_url": "/images/top1.png"}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.poster_url, "/images/top1.png");
    }

    #[test]
    fn test_media_item_accepts_camel_case_poster() {
        let json = r#"{"id": 1, "title": "Black & White Chef", "type": "variety", "posterUrl": "/images/top1.png"}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.poster_url, "/images/top1.png");
    }

    #[test]
    fn test_media_item_missing_poster_falls_back() {
        let json = r#"{"id": 2, "title": "Pro Bono", "type": "drama"}"#;
        let item: MediaItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.poster_or_default(), DEFAULT_POSTER);
    }

    #[test]
    fn test_destination_accepts_either_image_field() {
        let snake = r#"{"name": "북촌 한옥마을", "address": "서울 종로구", "description": null, "image_url": "/images/dest.png"}"#;
        let camel = r#"{"name": "북촌 한옥마을", "address": "서울 종로구", "imageUrl": "/images/dest.png"}"#;
        let a: Destination = serde_json::from_str(snake).unwrap();
        let b: Destination = serde_json::from_str(camel).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.image_or_default(), "/images/dest.png");
    }

    #[test]
    fn test_tag_payload_uses_contract_key_names() {
        let payload = TagPayload {
            gender: "female".to_string(),
            age_group: "20s".to_string(),
            genre: "drama,food".to_string(),
            travel_style: "healing".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["gender", "ageGroup", "genre", "travelStyle"]);
    }
}
