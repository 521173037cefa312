use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An 11-character YouTube video identifier.
///
/// Construction always validates the `[A-Za-z0-9_-]{11}` shape, so a held
/// value is known to be well-formed. Case is preserved exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct VideoId(String);

#[derive(Error, Debug)]
#[error("video id must be 11 characters of [A-Za-z0-9_-], got {0:?}")]
pub struct InvalidVideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(s: &str) -> bool {
        s.len() == 11
            && s.bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    }
}

impl TryFrom<String> for VideoId {
    type Error = InvalidVideoId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if VideoId::is_valid(&value) {
            Ok(VideoId(value))
        } else {
            Err(InvalidVideoId(value))
        }
    }
}

impl FromStr for VideoId {
    type Err = InvalidVideoId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoId::try_from(s.to_string())
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One resolution tier of a video's preview image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

impl Thumbnail {
    pub fn resolution(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// The named thumbnail variants of a video. `default`, `medium` and `high`
/// are always present; `standard` and `maxres` only for some videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailSet {
    pub default: Thumbnail,
    pub medium: Thumbnail,
    pub high: Thumbnail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<Thumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxres: Option<Thumbnail>,
}

impl ThumbnailSet {
    /// Highest-resolution variant available.
    pub fn best(&self) -> &Thumbnail {
        self.maxres
            .as_ref()
            .or(self.standard.as_ref())
            .unwrap_or(&self.high)
    }

    /// Present variants in ascending declared resolution order.
    pub fn variants(&self) -> Vec<(&'static str, &Thumbnail)> {
        let mut variants = vec![
            ("default", &self.default),
            ("medium", &self.medium),
            ("high", &self.high),
        ];
        if let Some(standard) = &self.standard {
            variants.push(("standard", standard));
        }
        if let Some(maxres) = &self.maxres {
            variants.push(("maxres", maxres));
        }
        variants
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub title: String,
    pub description: String,
}

/// The metadata block of a single video as returned by a `videos.list` call
/// with `part=snippet`. Wire field names are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub published_at: String,
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnails: ThumbnailSet,
    pub channel_title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category_id: String,
    pub live_broadcast_content: String,
    pub localized: LocalizedText,
}

impl VideoSnippet {
    /// `publishedAt` as a typed UTC timestamp. The raw string is kept
    /// verbatim on the record; this parses it on demand.
    pub fn published_at_utc(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.published_at).map(|dt| dt.with_timezone(&Utc))
    }
}

/// A validated single-video metadata record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub kind: String,
    pub etag: String,
    pub id: VideoId,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_results: u32,
    pub results_per_page: u32,
}

/// Wire envelope of a `videos.list` response. Only `items` is required;
/// the other fields are type-checked when present.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub kind: Option<String>,
    pub etag: Option<String>,
    pub items: Vec<VideoRecord>,
    pub page_info: Option<PageInfo>,
}
