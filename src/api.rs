use std::time::Duration;

use serde::Deserialize;

use crate::core::validate::validate_lookup;
use crate::core::video_id::extract_video_id;
use crate::error::{LookupError, LookupResult, Result};
use crate::models::video::VideoId;

/// YouTube Data API v3 base URL
const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

const USER_AGENT: &str = concat!("metatube-core/", env!("CARGO_PKG_VERSION"));

// Error envelope the API wraps non-2xx responses in.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn upstream_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .unwrap_or_else(|| status.to_string())
}

/// Client for single-video metadata lookups against the YouTube Data API v3.
///
/// One lookup is one request; the client adds no retry or caching layer.
/// The response body goes through [`validate_lookup`] before it reaches
/// the caller.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LookupError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_key,
            api_base: YOUTUBE_API_BASE.to_string(),
        })
    }

    /// Builds a client from the `YOUTUBE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var("YOUTUBE_API_KEY") {
            Ok(key) => Self::new(key),
            Err(_) => Err(LookupError::MissingApiKey),
        }
    }

    /// Points the client at a different API base, e.g. a local mock server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Fetches and validates the metadata record for a single video.
    pub async fn get_video(&self, id: &VideoId) -> LookupResult {
        tracing::debug!("fetching snippet for video {}", id);

        // Query builder keeps the API key out of the URL literal and logs.
        let response = self
            .client
            .get(format!("{}/videos", self.api_base))
            .query(&[
                ("part", "snippet"),
                ("id", id.as_str()),
                ("key", &self.api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = upstream_message(status, &body);
            tracing::warn!("videos.list for {} failed: {} ({})", id, message, status);
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let raw: serde_json::Value = response.json().await?;
        let record = validate_lookup(raw)?;
        tracing::info!("validated metadata for video {}", record.id);
        Ok(record)
    }

    /// Extracts the identifier from `input` and looks the video up.
    pub async fn lookup_url(&self, input: &str) -> LookupResult {
        let id = extract_video_id(input)
            .ok_or_else(|| LookupError::InvalidUrl(input.to_string()))?;
        self.get_video(&id).await
    }
}
