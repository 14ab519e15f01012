//! # SeoulMate engine
//!
//! Client-side logic for the SeoulMate K-content travel page:
//! - the taste survey (preference record, store and step wizard)
//! - best-effort preference sync to the recommendation backend
//! - the recommendation rail with like-reordering and transition planning
//! - the static content catalog and the decorative card layout

pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod decor;
mod error;
pub mod recommend;
pub mod survey;
pub mod sync;

pub use api::ApiClient;
pub use app::{AppFlow, CarouselRoute};
pub use config::AppConfig;
pub use error::SeoulMateError;
pub use survey::{PreferenceRecord, SurveyCompletion, SurveyWizard};
pub use sync::{sync_preferences, PreferenceBackend, SyncStatus};

/// Initialize tracing from the environment, defaulting to `info`.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}
