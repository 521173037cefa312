use serde::{Deserialize, Serialize};

use crate::models::video::VideoRecord;

/// Flattened, presentation-ready view of a validated record: the fields a
/// caller typically renders, with the best available thumbnail pre-selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSummary {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub channel_title: String,
    pub published_at: String,
    pub thumbnail: String,
}

impl From<&VideoRecord> for VideoSummary {
    fn from(record: &VideoRecord) -> Self {
        let snippet = &record.snippet;
        Self {
            title: snippet.title.clone(),
            description: snippet.description.clone(),
            tags: snippet.tags.clone(),
            channel_title: snippet.channel_title.clone(),
            published_at: snippet.published_at.clone(),
            thumbnail: snippet.thumbnails.best().url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> VideoRecord {
        serde_json::from_value(json!({
            "kind": "youtube#video",
            "etag": "etag",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "publishedAt": "2009-10-25T06:57:33Z",
                "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                "title": "Never Gonna Give You Up",
                "description": "Official video",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/d.jpg", "width": 120, "height": 90 },
                    "medium": { "url": "https://i.ytimg.com/m.jpg", "width": 320, "height": 180 },
                    "high": { "url": "https://i.ytimg.com/h.jpg", "width": 480, "height": 360 },
                    "maxres": { "url": "https://i.ytimg.com/x.jpg", "width": 1280, "height": 720 }
                },
                "channelTitle": "Rick Astley",
                "tags": ["rick astley", "80s"],
                "categoryId": "10",
                "liveBroadcastContent": "none",
                "localized": { "title": "t", "description": "d" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn summary_takes_best_thumbnail() {
        let summary = VideoSummary::from(&record());
        assert_eq!(summary.thumbnail, "https://i.ytimg.com/x.jpg");
        assert_eq!(summary.title, "Never Gonna Give You Up");
        assert_eq!(summary.channel_title, "Rick Astley");
        assert_eq!(summary.tags, vec!["rick astley", "80s"]);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let value = serde_json::to_value(VideoSummary::from(&record())).unwrap();
        assert!(value.get("channelTitle").is_some());
        assert!(value.get("publishedAt").is_some());
        assert_eq!(value["thumbnail"], "https://i.ytimg.com/x.jpg");
    }
}
