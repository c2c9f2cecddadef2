use async_trait::async_trait;

use jobdigest_core::Posting;

/// Trait for job-search backends — each API implements this.
///
/// The provider owns pagination, result freshness, and rate limiting;
/// callers see one query string in, a list of postings out.
#[async_trait]
pub trait JobSearchProvider: Send + Sync {
    /// Run a single query and return the raw postings it yielded.
    async fn search(&self, query: &str) -> Result<Vec<Posting>, SearchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} — {body}")]
    ApiError { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("search provider not configured: {0}")]
    NotConfigured(String),
}
