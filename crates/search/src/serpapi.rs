//! SerpApi `google_jobs` search client.
//!
//! One GET per query against `/search.json`. The API returns a
//! `jobs_results` array; everything else in the payload is ignored.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use jobdigest_core::config::SearchConfig;
use jobdigest_core::Posting;

use crate::provider::{JobSearchProvider, SearchError};

pub struct SerpApiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    location: String,
    hl: String,
    gl: String,
}

impl SerpApiClient {
    pub fn new(
        api_key: String,
        base_url: String,
        location: String,
        hl: String,
        gl: String,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
            location,
            hl,
            gl,
        }
    }

    /// Build a client from config; errors when no API key is set.
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| SearchError::NotConfigured("SERPAPI_KEY is not set".to_string()))?;
        Ok(Self::new(
            api_key,
            config.base_url.clone(),
            config.location.clone(),
            config.hl.clone(),
            config.gl.clone(),
        ))
    }
}

#[async_trait]
impl JobSearchProvider for SerpApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Posting>, SearchError> {
        let url = format!("{}/search.json", self.base_url);

        debug!(query, "SerpApi request to {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", "google_jobs"),
                ("q", query),
                ("location", self.location.as_str()),
                ("hl", self.hl.as_str()),
                ("gl", self.gl.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::ApiError { status, body });
        }

        let resp: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        Ok(resp.jobs_results.into_iter().map(Posting::from).collect())
    }
}

// ── Wire types ──────────────────────────────────────────────────────

/// The slice of the SerpApi payload we care about.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub jobs_results: Vec<RawJob>,
}

/// One raw job result as the API returns it.
#[derive(Debug, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub share_link: Option<String>,
    #[serde(default)]
    pub detected_extensions: Option<DetectedExtensions>,
}

#[derive(Debug, Deserialize)]
pub struct DetectedExtensions {
    #[serde(default)]
    pub posted_at: Option<String>,
    #[serde(default)]
    pub posted_at_days_ago: Option<u32>,
}

impl DetectedExtensions {
    /// Posted age in days: the numeric field when present, otherwise the
    /// leading integer of a "3 days ago"-style string.
    fn age_days(&self) -> Option<u32> {
        if let Some(days) = self.posted_at_days_ago {
            return Some(days);
        }
        let posted_at = self.posted_at.as_deref()?;
        if !posted_at.contains("day") {
            return None;
        }
        posted_at.split_whitespace().next()?.parse().ok()
    }
}

impl From<RawJob> for Posting {
    fn from(raw: RawJob) -> Self {
        let link = raw.link.or(raw.share_link).unwrap_or_default();
        // Stable identity: API job id, else the link, else a composite
        // for the rare posting that carries neither.
        let id = match raw.job_id {
            Some(id) if !id.is_empty() => id,
            _ if !link.is_empty() => link.clone(),
            _ => format!("{}::{}", raw.title, raw.company_name),
        };
        let posted_days_ago = raw.detected_extensions.as_ref().and_then(|e| e.age_days());

        Posting {
            id,
            title: raw.title,
            company: raw.company_name,
            location: raw.location,
            description: raw.description,
            link,
            posted_days_ago,
        }
    }
}
