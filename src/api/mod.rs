/// Catalog backend abstraction
///
/// A single trait seam over the recommendation backend so the interaction
/// core can be exercised against a mock. The shipped implementation is
/// [`HttpCatalogApi`]; each method maps to one GET endpoint.
use crate::{
    error::AppResult,
    models::{DatasetStats, RecommendResponse},
};

mod http;

pub use http::HttpCatalogApi;

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch recommendations for a normalized, non-empty title.
    ///
    /// Returns the full message-plus-items envelope; an empty item list is a
    /// successful response, not an error.
    async fn recommend(&self, title: &str) -> AppResult<RecommendResponse>;

    /// Fetch type-ahead title suggestions for a raw query prefix.
    async fn search(&self, query: &str) -> AppResult<Vec<String>>;

    /// Fetch aggregate dataset statistics for the visualization charts.
    async fn visualizations(&self) -> AppResult<DatasetStats>;
}
