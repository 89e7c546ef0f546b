use std::time::Duration;

use reqwest::Client as HttpClient;

use super::CatalogApi;
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{ApiMessage, DatasetStats, RecommendResponse},
};

/// HTTP implementation of [`CatalogApi`]
///
/// One GET per operation, no retries: a failed request is terminal for that
/// interaction and the user re-triggers it. Query parameters are URL-encoded
/// by the client, so titles with spaces or punctuation round-trip intact.
#[derive(Clone)]
pub struct HttpCatalogApi {
    http_client: HttpClient,
    base_url: String,
}

impl HttpCatalogApi {
    /// Creates a client against `base_url` with a per-request timeout
    pub fn new(base_url: &str, request_timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(request_timeout).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Turn a non-2xx response into [`AppError::Api`], preserving the
    /// server-supplied message when the body carries one.
    async fn api_error(response: reqwest::Response) -> AppError {
        let status = response.status().as_u16();
        match response.json::<ApiMessage>().await {
            Ok(payload) => AppError::Api {
                status,
                message: payload.message,
            },
            Err(e) => AppError::HttpClient(e),
        }
    }
}

#[async_trait::async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn recommend(&self, title: &str) -> AppResult<RecommendResponse> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Title cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/recommend", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let envelope: RecommendResponse = response.json().await?;

        tracing::info!(
            title = %title,
            results = envelope.recommendations.len(),
            "Recommendation fetch completed"
        );

        Ok(envelope)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<String>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        // Bare JSON array of title strings, no envelope
        let titles: Vec<String> = response.json().await?;

        tracing::debug!(query = %query, results = titles.len(), "Title search completed");

        Ok(titles)
    }

    async fn visualizations(&self) -> AppResult<DatasetStats> {
        let url = format!("{}/visualizations", self.base_url);

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let stats: DatasetStats = response.json().await?;

        tracing::info!(
            genres = stats.genre_distribution.len(),
            countries = stats.top_countries.len(),
            "Visualization stats fetched"
        );

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let api = HttpCatalogApi::new("http://localhost:5020/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.base_url, "http://localhost:5020");
    }

    #[tokio::test]
    async fn test_empty_title_is_rejected_locally() {
        // Unroutable base: if a request were issued this would time out
        let api = HttpCatalogApi::new("http://127.0.0.1:9", Duration::from_millis(100)).unwrap();

        let err = api.recommend("   ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = api.search("").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
