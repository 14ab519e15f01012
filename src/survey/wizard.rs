//! The survey step wizard.
//!
//! A linear four-step flow with two exits: the visitor either answers every
//! step and finishes from the last one, or opts out at the welcome step and
//! finishes immediately. Forward navigation is gated per step; backward
//! navigation never validates and never clears answers.

use chrono::Utc;
use tracing::info;

use super::store::PreferenceStore;
use super::types::{AgeRange, Gender, PreferenceRecord, Step, SurveyCompletion, SurveyOutcome};

/// Drives one survey session from welcome to completion.
///
/// Owns the preference store for the whole session. Finishes at most once:
/// after a completion has been produced, every further transition and
/// mutation is a no-op.
#[derive(Debug, Default)]
pub struct SurveyWizard {
    step: Step,
    store: PreferenceStore,
    finished: bool,
}

impl SurveyWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn record(&self) -> &PreferenceRecord {
        self.store.record()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Welcome choice: take the survey. Marks participation and moves to
    /// the demographics step. A no-op anywhere else.
    pub fn participate(&mut self) {
        if self.finished || self.step != Step::Welcome {
            return;
        }
        self.store.set_participated(true);
        self.step = Step::Demographics;
        info!("Survey started");
    }

    /// Welcome choice: opt out. Finalizes right away with the record
    /// otherwise untouched. Returns None anywhere but the welcome step.
    pub fn skip(&mut self) -> Option<SurveyCompletion> {
        if self.finished || self.step != Step::Welcome {
            return None;
        }
        self.store.set_participated(false);
        info!("Survey skipped");
        Some(self.finalize(SurveyOutcome::Skipped))
    }

    pub fn set_gender(&mut self, gender: Gender) {
        if !self.finished {
            self.store.set_gender(gender);
        }
    }

    pub fn set_age_range(&mut self, age_range: AgeRange) {
        if !self.finished {
            self.store.set_age_range(age_range);
        }
    }

    pub fn toggle_genre(&mut self, id: &str) -> bool {
        if self.finished {
            return false;
        }
        self.store.toggle_genre(id)
    }

    pub fn toggle_travel_style(&mut self, id: &str) -> bool {
        if self.finished {
            return false;
        }
        self.store.toggle_travel_style(id)
    }

    /// Whether forward navigation is currently allowed. The UI mirrors
    /// this as the disabled state of the Next button.
    pub fn can_proceed(&self) -> bool {
        let record = self.store.record();
        match self.step {
            Step::Welcome => true,
            Step::Demographics => record.gender.is_some() && record.age_range.is_some(),
            Step::GenrePick => !record.genres.is_empty(),
            Step::StylePick => !record.travel_styles.is_empty(),
        }
    }

    /// Advance one step. A no-op while the current step's answers are
    /// incomplete. From the last step, finalizes and returns the
    /// completion; at the welcome step the choice methods advance instead.
    pub fn next(&mut self) -> Option<SurveyCompletion> {
        if self.finished || !self.can_proceed() {
            return None;
        }
        match self.step {
            Step::Welcome => None,
            Step::Demographics => {
                self.step = Step::GenrePick;
                None
            }
            Step::GenrePick => {
                self.step = Step::StylePick;
                None
            }
            Step::StylePick => {
                info!("Survey completed");
                Some(self.finalize(SurveyOutcome::Participating))
            }
        }
    }

    /// Go back one step. Never validates, never clears answers, and is a
    /// no-op on the welcome and demographics steps.
    pub fn back(&mut self) {
        if self.finished {
            return;
        }
        self.step = match self.step {
            Step::StylePick => Step::GenrePick,
            Step::GenrePick => Step::Demographics,
            other => other,
        };
    }

    fn finalize(&mut self, outcome: SurveyOutcome) -> SurveyCompletion {
        self.finished = true;
        SurveyCompletion {
            outcome,
            record: self.store.snapshot(),
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered_wizard() -> SurveyWizard {
        let mut wizard = SurveyWizard::new();
        wizard.participate();
        wizard.set_gender(Gender::Female);
        wizard.set_age_range(AgeRange::Twenties);
        wizard.next();
        wizard.toggle_genre("drama");
        wizard.next();
        wizard.toggle_travel_style("healing");
        wizard
    }

    #[test]
    fn test_participate_advances_and_marks_record() {
        let mut wizard = SurveyWizard::new();
        wizard.participate();
        assert_eq!(wizard.step(), Step::Demographics);
        assert_eq!(wizard.record().participated, Some(true));
    }

    #[test]
    fn test_skip_finishes_immediately_with_empty_record() {
        let mut wizard = SurveyWizard::new();
        let completion = wizard.skip().expect("skip at welcome must finish");

        assert_eq!(completion.outcome, SurveyOutcome::Skipped);
        assert_eq!(completion.record.participated, Some(false));
        assert_eq!(completion.record.gender, None);
        assert_eq!(completion.record.age_range, None);
        assert!(completion.record.genres.is_empty());
        assert!(completion.record.travel_styles.is_empty());
        assert!(wizard.is_finished());
    }

    #[test]
    fn test_skip_only_available_at_welcome() {
        let mut wizard = SurveyWizard::new();
        wizard.participate();
        assert!(wizard.skip().is_none());
        assert_eq!(wizard.record().participated, Some(true));
    }

    #[test]
    fn test_next_is_noop_while_step_incomplete() {
        let mut wizard = SurveyWizard::new();
        wizard.participate();

        assert!(!wizard.can_proceed());
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::Demographics, "Gated next must not move");

        wizard.set_gender(Gender::Male);
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::Demographics, "Both fields are required");

        wizard.set_age_range(AgeRange::Thirties);
        assert!(wizard.can_proceed());
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::GenrePick);
    }

    #[test]
    fn test_genre_step_requires_nonempty_selection() {
        let mut wizard = SurveyWizard::new();
        wizard.participate();
        wizard.set_gender(Gender::Female);
        wizard.set_age_range(AgeRange::Forties);
        wizard.next();

        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::GenrePick);

        wizard.toggle_genre("variety");
        wizard.toggle_genre("variety");
        assert!(!wizard.can_proceed(), "Toggled off again leaves the step gated");

        wizard.toggle_genre("variety");
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::StylePick);
    }

    #[test]
    fn test_full_run_finishes_from_last_step() {
        let mut wizard = answered_wizard();
        let completion = wizard.next().expect("last step with answers must finish");

        assert_eq!(completion.outcome, SurveyOutcome::Participating);
        assert_eq!(completion.record.participated, Some(true));
        assert_eq!(completion.record.gender, Some(Gender::Female));
        assert_eq!(completion.record.age_range, Some(AgeRange::Twenties));
        assert!(completion.record.genres.contains("drama"));
        assert!(completion.record.travel_styles.contains("healing"));
    }

    #[test]
    fn test_finishes_at_most_once() {
        let mut wizard = answered_wizard();
        assert!(wizard.next().is_some());
        assert!(wizard.next().is_none(), "A finished wizard must not finish again");
        assert!(wizard.skip().is_none());
    }

    #[test]
    fn test_back_preserves_entered_data() {
        let mut wizard = answered_wizard();
        assert_eq!(wizard.step(), Step::StylePick);

        wizard.back();
        assert_eq!(wizard.step(), Step::GenrePick);
        wizard.next();
        assert_eq!(wizard.step(), Step::StylePick);
        assert!(
            wizard.record().travel_styles.contains("healing"),
            "Leaving and revisiting a step must not reset its answers"
        );
    }

    #[test]
    fn test_back_stops_at_demographics() {
        let mut wizard = SurveyWizard::new();
        wizard.participate();
        wizard.back();
        assert_eq!(wizard.step(), Step::Demographics);
        assert_eq!(wizard.record().participated, Some(true));
    }
}
