use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Volume, VolumesResponse},
};

/// Book catalog provider abstraction
///
/// Puts the external catalog behind a trait so the aggregator and the web
/// front can be exercised against a fake in tests.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the volumes filed under a subject category.
    ///
    /// A non-success response is reported as `SubjectQuery::Failed` rather
    /// than an error; the caller decides what a failed category means.
    /// Transport failures and malformed payloads are errors.
    async fn volumes_by_subject(&self, subject: &str) -> AppResult<SubjectQuery>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Result of a single subject query against the catalog
#[derive(Debug)]
pub enum SubjectQuery {
    /// Decoded volume list (possibly empty)
    Volumes(Vec<Volume>),
    /// Non-success HTTP status from the catalog
    Failed(u16),
}

/// Google Books volumes API client
#[derive(Clone)]
pub struct GoogleBooksProvider {
    http_client: HttpClient,
    api_url: String,
}

impl GoogleBooksProvider {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for GoogleBooksProvider {
    async fn volumes_by_subject(&self, subject: &str) -> AppResult<SubjectQuery> {
        let url = format!("{}/v1/volumes", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", format!("subject:{}", subject))])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(
                subject = %subject,
                status = %status,
                provider = self.name(),
                "Catalog returned non-success status"
            );
            return Ok(SubjectQuery::Failed(status.as_u16()));
        }

        let volumes: VolumesResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Malformed catalog response: {}", e)))?;

        tracing::debug!(
            subject = %subject,
            results = volumes.items.len(),
            provider = self.name(),
            "Subject query completed"
        );

        Ok(SubjectQuery::Volumes(volumes.items))
    }

    fn name(&self) -> &'static str {
        "google_books"
    }
}
