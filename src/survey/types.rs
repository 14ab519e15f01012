//! Type definitions for the taste survey.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Gender captured at the demographics step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Stable identifier used in the tag payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorical age bucket captured at the demographics step.
///
/// The survey asks for a bucket rather than a birth year, so the stored
/// value never drifts as calendar years pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "10s")]
    Teens,
    #[serde(rename = "20s")]
    Twenties,
    #[serde(rename = "30s")]
    Thirties,
    #[serde(rename = "40s")]
    Forties,
    #[serde(rename = "50s")]
    Fifties,
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeRange {
    /// All buckets in presentation order, for rendering the selector.
    pub const ALL: [AgeRange; 6] = [
        AgeRange::Teens,
        AgeRange::Twenties,
        AgeRange::Thirties,
        AgeRange::Forties,
        AgeRange::Fifties,
        AgeRange::SixtyPlus,
    ];

    /// Stable identifier used in the tag payload and display copy.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeRange::Teens => "10s",
            AgeRange::Twenties => "20s",
            AgeRange::Thirties => "30s",
            AgeRange::Forties => "40s",
            AgeRange::Fifties => "50s",
            AgeRange::SixtyPlus => "60+",
        }
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the survey collects about one visitor.
///
/// Created empty when the wizard opens, mutated step by step, and handed to
/// the host as a frozen snapshot when the wizard finishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// None until the welcome choice is made; false ends the session there.
    pub participated: Option<bool>,
    pub gender: Option<Gender>,
    pub age_range: Option<AgeRange>,
    /// Selected genre ids. Duplicate-free; membership is all that matters.
    pub genres: BTreeSet<String>,
    /// Selected travel style ids. Same semantics as `genres`.
    pub travel_styles: BTreeSet<String>,
}

/// Survey steps in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    Welcome,
    Demographics,
    GenrePick,
    StylePick,
}

impl Step {
    /// Zero-based position, matching the progress dots in the UI.
    pub fn index(self) -> u8 {
        match self {
            Step::Welcome => 0,
            Step::Demographics => 1,
            Step::GenrePick => 2,
            Step::StylePick => 3,
        }
    }
}

/// How the survey session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SurveyOutcome {
    /// The visitor answered every step.
    Participating,
    /// The visitor opted out at the welcome step.
    Skipped,
}

/// Frozen result handed to the host when the wizard finishes.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyCompletion {
    pub outcome: SurveyOutcome,
    pub record: PreferenceRecord,
    pub completed_at: DateTime<Utc>,
}
