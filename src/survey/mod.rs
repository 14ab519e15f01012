//! Taste survey: preference record, store and step wizard.

pub mod store;
pub mod types;
pub mod wizard;

pub use store::PreferenceStore;
pub use types::{AgeRange, Gender, PreferenceRecord, Step, SurveyCompletion, SurveyOutcome};
pub use wizard::SurveyWizard;
