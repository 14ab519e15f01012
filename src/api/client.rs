//! HTTP client for the recommendation backend.

use std::time::Duration;

use tracing::info;
use url::Url;

use crate::config::AppConfig;
use crate::error::SeoulMateError;

use super::types::{Destination, MediaItem, TagPayload};

/// Client for the backend REST contract.
///
/// Built once per page session. Session identity is cookie-based:
/// `create_user` establishes an anonymous session cookie, and the cookie
/// store replays it on every later call.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the app configuration.
    pub fn new(config: &AppConfig) -> Result<Self, SeoulMateError> {
        Url::parse(&config.api_base_url).map_err(|e| {
            SeoulMateError::Config(format!(
                "Invalid API base URL '{}': {}",
                config.api_base_url, e
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| SeoulMateError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create an anonymous user. The backend answers with a session cookie.
    pub async fn create_user(&self) -> Result<(), SeoulMateError> {
        info!("Creating anonymous user session");
        let response = self
            .http
            .post(self.url("/users"))
            .send()
            .await
            .map_err(|e| SeoulMateError::Api(format!("Failed to create user: {}", e)))?;
        check_status("Create user", &response)?;
        Ok(())
    }

    /// Submit the flattened preference tags for the current session.
    pub async fn submit_tags(&self, tags: &TagPayload) -> Result<(), SeoulMateError> {
        info!("Submitting preference tags");
        let response = self
            .http
            .post(self.url("/users/me/tags"))
            .json(tags)
            .send()
            .await
            .map_err(|e| SeoulMateError::Api(format!("Failed to submit tags: {}", e)))?;
        check_status("Submit tags", &response)?;
        Ok(())
    }

    /// Fetch the TOP-10 media list.
    pub async fn top10_media(&self) -> Result<Vec<MediaItem>, SeoulMateError> {
        info!("Fetching top 10 media");
        let response = self
            .http
            .get(self.url("/media/top10"))
            .send()
            .await
            .map_err(|e| SeoulMateError::Api(format!("Failed to fetch top 10 media: {}", e)))?;
        check_status("Top 10 media", &response)?;
        response
            .json::<Vec<MediaItem>>()
            .await
            .map_err(|e| SeoulMateError::Api(format!("Invalid top 10 media response: {}", e)))
    }

    /// Fetch the top three destinations for a media item.
    pub async fn top3_destinations(&self, media_id: i64) -> Result<Vec<Destination>, SeoulMateError> {
        info!("Fetching top 3 destinations for media {}", media_id);
        let response = self
            .http
            .get(self.url(&format!("/media/{}/destinations/top3", media_id)))
            .send()
            .await
            .map_err(|e| {
                SeoulMateError::Api(format!(
                    "Failed to fetch destinations for media {}: {}",
                    media_id, e
                ))
            })?;
        check_status("Top 3 destinations", &response)?;
        response
            .json::<Vec<Destination>>()
            .await
            .map_err(|e| SeoulMateError::Api(format!("Invalid destinations response: {}", e)))
    }
}

/// Treat any non-2xx status as an error at the call site.
fn check_status(what: &str, response: &reqwest::Response) -> Result<(), SeoulMateError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SeoulMateError::Api(format!(
            "{} returned {} {}",
            what,
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )))
    }
}
