//! Page-level flow: the survey runs first, then the page routes to the
//! personalized or popular home experience.

use tracing::{info, warn};

use crate::catalog::{Catalog, VideoCard};
use crate::survey::{Gender, PreferenceRecord, SurveyCompletion, SurveyOutcome, SurveyWizard};
use crate::sync::{sync_preferences, PreferenceBackend, SyncStatus};

/// Which video rail the home page shows after the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselRoute {
    /// Route A: tailored rail for survey participants
    Personalized,
    /// Route B: the popular TOP-10 rail
    Popular,
}

/// Header copy above the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselHeader {
    pub title: String,
    pub subtitle: String,
}

/// Three-line hero headline at the top of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroHeadline {
    pub main: String,
    pub sub: String,
    pub desc: String,
}

/// Top-level page flow. Owns the wizard while the survey is up, then the
/// finalized preferences for the rest of the page session.
#[derive(Debug)]
pub struct AppFlow {
    wizard: Option<SurveyWizard>,
    completion: Option<SurveyCompletion>,
}

impl Default for AppFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AppFlow {
    /// Fresh page session with the survey open.
    pub fn new() -> Self {
        Self {
            wizard: Some(SurveyWizard::new()),
            completion: None,
        }
    }

    /// The running wizard, while the survey is still up.
    pub fn survey(&mut self) -> Option<&mut SurveyWizard> {
        self.wizard.as_mut()
    }

    pub fn survey_done(&self) -> bool {
        self.completion.is_some()
    }

    /// Accept the wizard's completion and move the page past the survey.
    ///
    /// Participating completions are synced to the backend best-effort;
    /// skipped ones never touch it. Either way the locally-held record is
    /// what the page runs on from here. Duplicate completions are ignored.
    pub async fn finish_survey<B: PreferenceBackend>(
        &mut self,
        completion: SurveyCompletion,
        backend: &B,
    ) {
        if self.completion.is_some() {
            warn!("Survey already completed, ignoring duplicate completion");
            return;
        }

        match completion.outcome {
            SurveyOutcome::Participating => {
                if sync_preferences(backend, &completion.record).await == SyncStatus::Failed {
                    info!("Continuing with local preferences only");
                }
            }
            SurveyOutcome::Skipped => {
                info!("Survey skipped, nothing to sync");
            }
        }

        self.wizard = None;
        self.completion = Some(completion);
    }

    /// The finalized preferences, once the survey is over.
    pub fn preferences(&self) -> Option<&PreferenceRecord> {
        self.completion.as_ref().map(|c| &c.record)
    }

    pub fn carousel_route(&self) -> CarouselRoute {
        match self.preferences() {
            Some(record) if record.participated == Some(true) => CarouselRoute::Personalized,
            _ => CarouselRoute::Popular,
        }
    }

    /// The video rail for the current route.
    pub fn videos<'a>(&self, catalog: &'a Catalog) -> &'a [VideoCard] {
        match self.carousel_route() {
            CarouselRoute::Personalized => &catalog.personalized_videos,
            CarouselRoute::Popular => &catalog.popular_videos,
        }
    }

    /// Header copy for the carousel section. Personalized copy needs the
    /// demographics; without them the popular copy is used.
    pub fn carousel_header(&self) -> CarouselHeader {
        if self.carousel_route() == CarouselRoute::Personalized {
            if let Some(record) = self.preferences() {
                if let (Some(gender), Some(age)) = (record.gender, record.age_range) {
                    return CarouselHeader {
                        title: format!(
                            "Customized Travel Destinations for {} in {}",
                            gender_label(gender),
                            age
                        ),
                        subtitle: "We recommend Korean travel destinations that perfectly match your preferences.".to_string(),
                    };
                }
            }
        }
        CarouselHeader {
            title: "Popular K-Content TOP 10".to_string(),
            subtitle: "We've gathered the most popular Korean dramas, variety shows, movies, and vlogs all in one place.".to_string(),
        }
    }

    /// Hero headline for the current route. Personalized copy needs the
    /// demographics, like the carousel header.
    pub fn hero_headline(&self) -> HeroHeadline {
        if self.carousel_route() == CarouselRoute::Personalized {
            if let Some(record) = self.preferences() {
                if let (Some(gender), Some(age)) = (record.gender, record.age_range) {
                    return HeroHeadline {
                        main: format!("For {} in {}", gender_label(gender), age),
                        sub: "Tailored K-Content Travel".to_string(),
                        desc: "We recommend Korean travel destinations that perfectly match your taste".to_string(),
                    };
                }
            }
        }
        HeroHeadline {
            main: "Discover Korea Through Content".to_string(),
            sub: "AI-Powered Travel Recommendations".to_string(),
            desc: "Based on K-Content You Love.".to_string(),
        }
    }

    /// Up to three genre chips shown under the personalized header.
    pub fn genre_chips(&self) -> Vec<String> {
        match self.preferences() {
            Some(record) => record
                .genres
                .iter()
                .take(3)
                .map(|genre| format!("#{}", genre))
                .collect(),
            None => Vec::new(),
        }
    }
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "Female",
        Gender::Male => "Male",
    }
}
