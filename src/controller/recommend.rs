use crate::models::{Recommendation, RecommendResponse};
use crate::normalize::normalize_title;

/// Shown when the query is empty after normalization; no request is issued
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a title.";

/// Generic message for transport or decode failures
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching recommendations.";

/// State of the results region
///
/// `Idle → Loading → {Loaded | NoMatches | Failed}`; back to `Loading` only
/// via a new submission. Every terminal transition replaces `Loading`, so
/// the loading indicator is gone on every exit path.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Idle,
    Loading {
        title: String,
    },
    Loaded {
        message: String,
        items: Vec<Recommendation>,
    },
    NoMatches {
        title: String,
    },
    Failed {
        message: String,
    },
}

/// Results region controller: validates submissions and applies exactly one
/// terminal transition per fetch
#[derive(Debug)]
pub struct ResultsPane {
    state: ResultsState,
}

impl Default for ResultsPane {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsPane {
    pub fn new() -> Self {
        Self {
            state: ResultsState::Idle,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResultsState::Loading { .. })
    }

    /// Begin a submission. Returns the normalized title to fetch, or `None`
    /// when validation failed locally and no request must be issued.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let title = normalize_title(raw);

        if title.is_empty() {
            self.state = ResultsState::Failed {
                message: EMPTY_QUERY_MESSAGE.to_string(),
            };
            return None;
        }

        self.state = ResultsState::Loading {
            title: title.clone(),
        };
        Some(title)
    }

    /// Apply a successful response for `title`
    pub fn resolve(&mut self, title: &str, response: RecommendResponse) {
        if response.recommendations.is_empty() {
            self.state = ResultsState::NoMatches {
                title: title.to_string(),
            };
        } else {
            self.state = ResultsState::Loaded {
                message: response.message,
                items: response.recommendations,
            };
        }
    }

    /// Apply a backend-reported failure; `message` is surfaced verbatim
    pub fn fail(&mut self, message: String) {
        self.state = ResultsState::Failed { message };
    }

    /// Apply a transport or decode failure with the generic message
    pub fn fail_generic(&mut self) {
        self.state = ResultsState::Failed {
            message: FETCH_ERROR_MESSAGE.to_string(),
        };
    }
}

/// Render a similarity score in `[0, 1]` as a percentage with two decimals
pub fn similarity_percent(similarity: f64) -> String {
    format!("{:.2}%", similarity * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, similarity: f64) -> Recommendation {
        Recommendation {
            title: title.to_string(),
            similarity,
            description: None,
            genre: None,
            director: None,
        }
    }

    #[test]
    fn test_empty_submission_fails_locally() {
        let mut results = ResultsPane::new();

        assert_eq!(results.submit("   \t "), None);
        assert_eq!(
            *results.state(),
            ResultsState::Failed {
                message: EMPTY_QUERY_MESSAGE.to_string()
            }
        );
        assert!(!results.is_loading());
    }

    #[test]
    fn test_submission_normalizes_and_enters_loading() {
        let mut results = ResultsPane::new();

        let title = results.submit("  Fast & Furious  ").unwrap();
        assert_eq!(title, "fast and furious");
        assert!(results.is_loading());
    }

    #[test]
    fn test_resolve_with_items() {
        let mut results = ResultsPane::new();
        results.submit("heat").unwrap();

        results.resolve(
            "heat",
            RecommendResponse {
                message: "Success".to_string(),
                recommendations: vec![item("Ronin", 0.8734)],
            },
        );

        match results.state() {
            ResultsState::Loaded { message, items } => {
                assert_eq!(message, "Success");
                assert_eq!(items[0].title, "Ronin");
            }
            other => panic!("unexpected state: {other:?}"),
        }
        assert!(!results.is_loading());
    }

    #[test]
    fn test_resolve_with_zero_items() {
        let mut results = ResultsPane::new();
        results.submit("heat").unwrap();

        results.resolve(
            "heat",
            RecommendResponse {
                message: "Success".to_string(),
                recommendations: vec![],
            },
        );

        assert_eq!(
            *results.state(),
            ResultsState::NoMatches {
                title: "heat".to_string()
            }
        );
    }

    #[test]
    fn test_server_message_surfaces_verbatim() {
        let mut results = ResultsPane::new();
        results.submit("zzz").unwrap();

        results.fail("Title not found".to_string());

        assert_eq!(
            *results.state(),
            ResultsState::Failed {
                message: "Title not found".to_string()
            }
        );
        assert!(!results.is_loading());
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let mut results = ResultsPane::new();
        results.submit("heat").unwrap();

        results.fail_generic();

        assert_eq!(
            *results.state(),
            ResultsState::Failed {
                message: FETCH_ERROR_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_similarity_percent_formatting() {
        assert_eq!(similarity_percent(0.8734), "87.34%");
        assert_eq!(similarity_percent(0.5), "50.00%");
        assert_eq!(similarity_percent(1.0), "100.00%");
        assert_eq!(similarity_percent(0.0), "0.00%");
    }
}
