use serde::Deserialize;

/// A single recommended title, as served by the backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    /// Similarity to the queried title, in `[0, 1]`
    pub similarity: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
}

/// Envelope returned by `GET /recommend`: a human-readable message plus the
/// recommendation payload
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecommendResponse {
    pub message: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// Bare message envelope carried by non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
