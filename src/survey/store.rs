//! In-memory store for the answers collected by the survey wizard.

use super::types::{AgeRange, Gender, PreferenceRecord};

/// Holds the preference record while the survey is running.
///
/// Pure data container: setters for single-valued fields, toggles for the
/// multi-select sets, and `snapshot()` for an immutable copy. The wizard
/// owns the store; nothing else mutates it during a session.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    record: PreferenceRecord,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    /// Immutable copy of the current answers.
    pub fn snapshot(&self) -> PreferenceRecord {
        self.record.clone()
    }

    pub fn set_participated(&mut self, participated: bool) {
        self.record.participated = Some(participated);
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.record.gender = Some(gender);
    }

    pub fn set_age_range(&mut self, age_range: AgeRange) {
        self.record.age_range = Some(age_range);
    }

    /// Flip a genre in or out of the selection. Returns true if the genre
    /// is selected afterwards.
    pub fn toggle_genre(&mut self, id: &str) -> bool {
        if self.record.genres.remove(id) {
            false
        } else {
            self.record.genres.insert(id.to_string());
            true
        }
    }

    /// Flip a travel style in or out of the selection. Returns true if the
    /// style is selected afterwards.
    pub fn toggle_travel_style(&mut self, id: &str) -> bool {
        if self.record.travel_styles.remove(id) {
            false
        } else {
            self.record.travel_styles.insert(id.to_string());
            true
        }
    }
}
