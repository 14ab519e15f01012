//! End-to-end flow tests: survey to home page, with the backend stubbed.

use std::cell::Cell;
use std::collections::HashMap;

use seoulmate::api::TagPayload;
use seoulmate::catalog::default_catalog;
use seoulmate::recommend::{LayoutProbe, Rect, RecommendationList};
use seoulmate::survey::{AgeRange, Gender, Step, SurveyOutcome};
use seoulmate::{AppFlow, CarouselRoute, PreferenceBackend, SeoulMateError};

/// Counting stub backend; optionally fails every call.
#[derive(Default)]
struct RecordingBackend {
    fail: bool,
    create_calls: Cell<u32>,
    tag_calls: Cell<u32>,
}

impl PreferenceBackend for RecordingBackend {
    async fn create_user(&self) -> Result<(), SeoulMateError> {
        self.create_calls.set(self.create_calls.get() + 1);
        if self.fail {
            Err(SeoulMateError::Api("backend unreachable".to_string()))
        } else {
            Ok(())
        }
    }

    async fn submit_tags(&self, _tags: &TagPayload) -> Result<(), SeoulMateError> {
        self.tag_calls.set(self.tag_calls.get() + 1);
        if self.fail {
            Err(SeoulMateError::Api("backend unreachable".to_string()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_full_participation_flow() {
    seoulmate::init_tracing();

    let mut flow = AppFlow::new();
    let completion = {
        let wizard = flow.survey().expect("survey is open on a fresh session");
        wizard.participate();
        assert_eq!(wizard.step(), Step::Demographics);

        // Forward navigation stays gated until each step is answered.
        assert!(wizard.next().is_none());
        wizard.set_gender(Gender::Male);
        wizard.set_age_range(AgeRange::Thirties);
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::GenrePick);

        wizard.toggle_genre("variety");
        wizard.toggle_genre("music");
        assert!(wizard.next().is_none());
        assert_eq!(wizard.step(), Step::StylePick);

        wizard.toggle_travel_style("activity");
        wizard.next().expect("fully answered survey must finish")
    };

    assert_eq!(completion.outcome, SurveyOutcome::Participating);

    let backend = RecordingBackend::default();
    flow.finish_survey(completion, &backend).await;

    assert_eq!(backend.create_calls.get(), 1);
    assert_eq!(backend.tag_calls.get(), 1);
    assert_eq!(flow.carousel_route(), CarouselRoute::Personalized);

    let record = flow.preferences().expect("preferences survive completion");
    assert_eq!(record.participated, Some(true));
    assert!(record.genres.contains("variety"));
    assert!(record.travel_styles.contains("activity"));
}

#[tokio::test]
async fn test_skip_never_touches_the_backend() {
    let mut flow = AppFlow::new();
    let completion = flow
        .survey()
        .unwrap()
        .skip()
        .expect("skip at the welcome step finishes immediately");

    let backend = RecordingBackend::default();
    flow.finish_survey(completion, &backend).await;

    assert_eq!(backend.create_calls.get(), 0, "Skip must bypass the backend");
    assert_eq!(backend.tag_calls.get(), 0);

    let record = flow.preferences().unwrap();
    assert_eq!(record.participated, Some(false));
    assert_eq!(record.gender, None);
    assert!(record.genres.is_empty());
    assert_eq!(flow.carousel_route(), CarouselRoute::Popular);
}

#[tokio::test]
async fn test_backend_outage_never_blocks_completion() {
    let mut flow = AppFlow::new();
    let completion = {
        let wizard = flow.survey().unwrap();
        wizard.participate();
        wizard.set_gender(Gender::Female);
        wizard.set_age_range(AgeRange::Fifties);
        wizard.next();
        wizard.toggle_genre("drama");
        wizard.next();
        wizard.toggle_travel_style("culture");
        wizard.next().unwrap()
    };
    let expected_record = completion.record.clone();

    let backend = RecordingBackend {
        fail: true,
        ..RecordingBackend::default()
    };
    flow.finish_survey(completion, &backend).await;

    assert_eq!(backend.create_calls.get(), 1, "Exactly one attempt, no retry");
    assert_eq!(
        flow.preferences(),
        Some(&expected_record),
        "The locally-held record must be unchanged by the failed sync"
    );
    assert_eq!(flow.carousel_route(), CarouselRoute::Personalized);
}

#[tokio::test]
async fn test_back_navigation_keeps_answers_across_the_flow() {
    let mut flow = AppFlow::new();
    let wizard = flow.survey().unwrap();
    wizard.participate();
    wizard.set_gender(Gender::Female);
    wizard.set_age_range(AgeRange::Twenties);
    wizard.next();
    wizard.toggle_genre("food");
    wizard.next();
    wizard.toggle_travel_style("healing");

    wizard.back();
    wizard.back();
    assert_eq!(wizard.step(), Step::Demographics);

    wizard.next();
    wizard.next();
    assert_eq!(wizard.step(), Step::StylePick);
    assert!(wizard.record().travel_styles.contains("healing"));
    assert!(wizard.can_proceed(), "Revisited step is still answered");
}

/// Grid layout probe: four cards per row.
struct GridLayout;

impl LayoutProbe for GridLayout {
    fn measure(&self, ordered_ids: &[String]) -> HashMap<String, Rect> {
        ordered_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let col = (i % 4) as f64;
                let row = (i / 4) as f64;
                (id.clone(), Rect::new(col * 220.0, row * 200.0, 200.0, 180.0))
            })
            .collect()
    }
}

#[test]
fn test_like_reorder_plans_a_transition_before_paint() {
    let catalog = default_catalog();
    let items = catalog
        .popular_videos
        .iter()
        .map(|v| seoulmate::api::MediaItem {
            id: v.id,
            title: v.title.clone(),
            media_type: "show".to_string(),
            poster_url: v.image.clone(),
        })
        .collect();

    let mut rail = RecommendationList::new(items);
    let toggle = rail.toggle_like(6, &GridLayout);

    assert!(toggle.liked);
    let order: Vec<i64> = rail.display_order().iter().map(|m| m.id).collect();
    assert_eq!(order, vec![6, 1, 2, 3, 4, 5, 7, 8, 9, 10]);

    // Every card between the liked one's old and new slot moved.
    let moved: Vec<&str> = toggle.moves.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(moved, vec!["1", "2", "3", "4", "5", "6"]);

    // Un-liking restores the delivered order.
    rail.toggle_like(6, &GridLayout);
    let order: Vec<i64> = rail.display_order().iter().map(|m| m.id).collect();
    assert_eq!(order, (1..=10).collect::<Vec<i64>>());
}
