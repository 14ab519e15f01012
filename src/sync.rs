//! Best-effort upload of collected preferences.
//!
//! The survey's value to the visitor does not depend on the backend: the
//! two calls run in sequence, each at most once, and any failure is logged
//! and swallowed so completion is never blocked on backend availability.

use tracing::{info, warn};

use crate::api::{ApiClient, TagPayload};
use crate::error::SeoulMateError;
use crate::survey::PreferenceRecord;

/// Backend operations the sync step depends on. `ApiClient` is the real
/// implementation; tests substitute a stub.
#[allow(async_fn_in_trait)]
pub trait PreferenceBackend {
    async fn create_user(&self) -> Result<(), SeoulMateError>;
    async fn submit_tags(&self, tags: &TagPayload) -> Result<(), SeoulMateError>;
}

impl PreferenceBackend for ApiClient {
    async fn create_user(&self) -> Result<(), SeoulMateError> {
        ApiClient::create_user(self).await
    }

    async fn submit_tags(&self, tags: &TagPayload) -> Result<(), SeoulMateError> {
        ApiClient::submit_tags(self, tags).await
    }
}

/// Result of the sync attempt. Informational only: callers proceed the
/// same way either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Synced,
    Failed,
}

/// Flatten a finalized record into the fixed tag keys. Multi-select
/// fields are comma-joined.
pub fn tag_payload(record: &PreferenceRecord) -> TagPayload {
    TagPayload {
        gender: record.gender.map(|g| g.as_str().to_string()).unwrap_or_default(),
        age_group: record
            .age_range
            .map(|a| a.as_str().to_string())
            .unwrap_or_default(),
        genre: comma_joined(&record.genres),
        travel_style: comma_joined(&record.travel_styles),
    }
}

fn comma_joined(set: &std::collections::BTreeSet<String>) -> String {
    set.iter().cloned().collect::<Vec<_>>().join(",")
}

/// Submit the record to the backend: create the anonymous session, then
/// post the tags. One attempt per call, no retry. A failed session
/// creation also skips the tag post, since the tags would land without a
/// session to attach to.
pub async fn sync_preferences<B: PreferenceBackend>(
    backend: &B,
    record: &PreferenceRecord,
) -> SyncStatus {
    if let Err(e) = backend.create_user().await {
        warn!("User session creation failed, continuing without sync: {}", e);
        return SyncStatus::Failed;
    }

    let tags = tag_payload(record);
    if let Err(e) = backend.submit_tags(&tags).await {
        warn!("Tag submission failed, continuing: {}", e);
        return SyncStatus::Failed;
    }

    info!("Preference tags submitted");
    SyncStatus::Synced
}
