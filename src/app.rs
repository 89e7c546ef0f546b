use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::{
    api::CatalogApi,
    controller::{ChartsPane, ResultsPane, SearchBox},
    error::{AppError, AppResult},
    models::{DatasetStats, RecommendResponse},
};

/// Completion events sent back to the interaction loop by fetch tasks
#[derive(Debug)]
pub enum AppEvent {
    Recommendations {
        title: String,
        result: AppResult<RecommendResponse>,
    },
    Suggestions {
        seq: u64,
        result: AppResult<Vec<String>>,
    },
    Visualizations(AppResult<DatasetStats>),
}

/// Headless interaction core
///
/// Owns the three region controllers and dispatches fetches as tasks whose
/// completions come back as [`AppEvent`]s, applied one at a time on the
/// interaction loop. The recommendation and suggestion cycles are
/// independent; they share only the query buffer. The terminal frontend
/// feeds this the same way the tests do.
pub struct AppCore {
    api: Arc<dyn CatalogApi>,
    events: mpsc::UnboundedSender<AppEvent>,
    pub search: SearchBox,
    pub results: ResultsPane,
    pub charts: ChartsPane,
}

impl AppCore {
    pub fn new(api: Arc<dyn CatalogApi>, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            api,
            events,
            search: SearchBox::new(),
            results: ResultsPane::new(),
            charts: ChartsPane::new(),
        }
    }

    /// Kick off the one-time startup visualization fetch
    pub fn load_visualizations(&mut self) {
        self.charts.begin();

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.visualizations().await;
            let _ = events.send(AppEvent::Visualizations(result));
        });
    }

    /// Submit the current query for recommendations
    pub fn submit(&mut self) {
        // A pending debounce must not pop suggestions over fresh results
        self.search.settle();

        let raw = self.search.query().to_string();
        let Some(title) = self.results.submit(&raw) else {
            return; // validation failed locally, no request
        };

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.recommend(&title).await;
            let _ = events.send(AppEvent::Recommendations { title, result });
        });
    }

    /// Take the highlighted suggestion and immediately fetch for it.
    /// Returns false when no suggestion was highlighted.
    pub fn choose_suggestion(&mut self) -> bool {
        if self.search.choose().is_none() {
            return false;
        }
        self.submit();
        true
    }

    /// Poll the autocomplete quiet period, dispatching the suggestion fetch
    /// once it elapses
    pub fn tick(&mut self, now: Instant) {
        let Some(fetch) = self.search.poll(now) else {
            return;
        };

        let api = Arc::clone(&self.api);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.search(&fetch.query).await;
            let _ = events.send(AppEvent::Suggestions {
                seq: fetch.seq,
                result,
            });
        });
    }

    /// Apply a fetch completion
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Recommendations { title, result } => match result {
                Ok(response) => self.results.resolve(&title, response),
                Err(AppError::Api { status, message }) => {
                    tracing::warn!(status, title = %title, "Recommendation request rejected");
                    self.results.fail(message);
                }
                Err(e) => {
                    tracing::error!(error = %e, title = %title, "Recommendation fetch failed");
                    self.results.fail_generic();
                }
            },
            AppEvent::Suggestions { seq, result } => match result {
                Ok(titles) => self.search.accept(seq, titles),
                // Autocomplete degrades silently to "no suggestions"
                Err(e) => tracing::warn!(error = %e, "Suggestion fetch failed"),
            },
            AppEvent::Visualizations(result) => match result {
                Ok(stats) => self.charts.resolve(&stats),
                Err(AppError::Api { status, message }) => {
                    tracing::warn!(status, "Visualization request rejected");
                    self.charts.fail(message);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Visualization fetch failed");
                    self.charts.fail_generic();
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockCatalogApi;
    use crate::controller::{ResultsState, EMPTY_QUERY_MESSAGE, FETCH_ERROR_MESSAGE};
    use crate::models::Recommendation;
    use std::time::Duration;

    fn core_with(api: MockCatalogApi) -> (AppCore, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppCore::new(Arc::new(api), tx), rx)
    }

    fn envelope(titles: &[(&str, f64)]) -> RecommendResponse {
        RecommendResponse {
            message: "Success".to_string(),
            recommendations: titles
                .iter()
                .map(|(title, similarity)| Recommendation {
                    title: title.to_string(),
                    similarity: *similarity,
                    description: None,
                    genre: None,
                    director: None,
                })
                .collect(),
        }
    }

    fn type_str(core: &mut AppCore, text: &str, now: Instant) {
        for c in text.chars() {
            core.search.insert(c, now);
        }
    }

    #[tokio::test]
    async fn test_empty_submission_issues_no_request() {
        let mut api = MockCatalogApi::new();
        api.expect_recommend().times(0);

        let (mut core, mut rx) = core_with(api);
        type_str(&mut core, "   ", Instant::now());
        core.submit();

        assert_eq!(
            *core.results.state(),
            ResultsState::Failed {
                message: EMPTY_QUERY_MESSAGE.to_string()
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_submission_fetches_and_renders_once() {
        let mut api = MockCatalogApi::new();
        api.expect_recommend()
            .withf(|title| title == "heat")
            .times(1)
            .returning(|_| Ok(envelope(&[("Ronin", 0.8734), ("Collateral", 0.7612)])));

        let (mut core, mut rx) = core_with(api);
        type_str(&mut core, "  Heat ", Instant::now());
        core.submit();
        assert!(core.results.is_loading());

        let event = rx.recv().await.expect("fetch task reports back");
        core.apply(event);

        match core.results.state() {
            ResultsState::Loaded { message, items } => {
                assert_eq!(message, "Success");
                assert_eq!(items.len(), 2);
            }
            other => panic!("unexpected state: {other:?}"),
        }

        // Exactly one completion per submission
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_api_error_message_surfaces_verbatim() {
        let mut api = MockCatalogApi::new();
        api.expect_recommend().times(1).returning(|_| {
            Err(AppError::Api {
                status: 404,
                message: "Title not found".to_string(),
            })
        });

        let (mut core, mut rx) = core_with(api);
        type_str(&mut core, "zzz", Instant::now());
        core.submit();

        let event = rx.recv().await.unwrap();
        core.apply(event);

        assert_eq!(
            *core.results.state(),
            ResultsState::Failed {
                message: "Title not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_failure_renders_generic_message() {
        let mut api = MockCatalogApi::new();
        api.expect_recommend()
            .times(1)
            .returning(|_| Err(AppError::InvalidInput("boom".to_string())));

        let (mut core, mut rx) = core_with(api);
        type_str(&mut core, "heat", Instant::now());
        core.submit();

        let event = rx.recv().await.unwrap();
        core.apply(event);

        assert_eq!(
            *core.results.state(),
            ResultsState::Failed {
                message: FETCH_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_debounced_suggestions_fetch_once_and_land() {
        let mut api = MockCatalogApi::new();
        api.expect_search()
            .withf(|query| query == "he")
            .times(1)
            .returning(|_| Ok(vec!["Heat".to_string(), "Hercules".to_string()]));

        let (mut core, mut rx) = core_with(api);
        let t0 = Instant::now();
        type_str(&mut core, "he", t0);

        core.tick(t0 + Duration::from_millis(200)); // quiet period not over
        core.tick(t0 + Duration::from_millis(300)); // fires
        core.tick(t0 + Duration::from_millis(400)); // nothing left to fire

        let event = rx.recv().await.unwrap();
        core.apply(event);

        assert_eq!(core.search.suggestions(), ["Heat", "Hercules"]);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_suggestion_failure_is_silent() {
        let mut api = MockCatalogApi::new();
        api.expect_search()
            .times(1)
            .returning(|_| Err(AppError::InvalidInput("boom".to_string())));

        let (mut core, mut rx) = core_with(api);
        let t0 = Instant::now();
        type_str(&mut core, "he", t0);
        core.tick(t0 + Duration::from_millis(300));

        let event = rx.recv().await.unwrap();
        core.apply(event);

        // No user-visible error; the dropdown just stays empty
        assert!(core.search.suggestions().is_empty());
        assert_eq!(*core.results.state(), ResultsState::Idle);
    }

    #[tokio::test]
    async fn test_choosing_a_suggestion_triggers_a_fetch() {
        let mut api = MockCatalogApi::new();
        api.expect_search()
            .times(1)
            .returning(|_| Ok(vec!["Heat".to_string()]));
        api.expect_recommend()
            .withf(|title| title == "heat")
            .times(1)
            .returning(|_| Ok(envelope(&[("Ronin", 0.8734)])));

        let (mut core, mut rx) = core_with(api);
        let t0 = Instant::now();
        type_str(&mut core, "he", t0);
        core.tick(t0 + Duration::from_millis(300));
        let event = rx.recv().await.unwrap();
        core.apply(event);

        core.search.select_next();
        assert!(core.choose_suggestion());
        assert_eq!(core.search.query(), "Heat");
        assert!(core.search.suggestions().is_empty());

        let event = rx.recv().await.unwrap();
        core.apply(event);
        assert!(matches!(core.results.state(), ResultsState::Loaded { .. }));
    }

    #[tokio::test]
    async fn test_visualizations_load_once_into_charts() {
        use crate::controller::ChartsState;
        use std::collections::HashMap;

        let mut api = MockCatalogApi::new();
        api.expect_visualizations().times(1).returning(|| {
            Ok(DatasetStats {
                genre_distribution: HashMap::from([("Dramas".to_string(), 120)]),
                type_distribution: HashMap::from([("Movie".to_string(), 150)]),
                top_countries: HashMap::from([("India".to_string(), 40)]),
            })
        });

        let (mut core, mut rx) = core_with(api);
        core.load_visualizations();
        assert_eq!(*core.charts.state(), ChartsState::Loading);

        let event = rx.recv().await.unwrap();
        core.apply(event);

        assert!(matches!(core.charts.state(), ChartsState::Ready(specs) if specs.len() == 3));
    }
}
