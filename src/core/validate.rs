use serde_json::Value;
use url::Url;

use crate::error::{LookupError, LookupResult, Result};
use crate::models::video::{Thumbnail, VideoListResponse, VideoRecord};

/// Validates the JSON body of a single-video `videos.list` response and
/// returns the first item as a normalized record.
///
/// Shape violations anywhere in the payload fail the whole call with
/// `SchemaMismatch`; a well-formed response with no items is `NotFound`.
/// Absent `tags` come back as an empty vector, every other field verbatim.
pub fn validate_lookup(raw: Value) -> LookupResult {
    let response: VideoListResponse =
        serde_json::from_value(raw).map_err(|e| LookupError::SchemaMismatch(e.to_string()))?;

    for record in &response.items {
        check_record(record)?;
    }

    response.items.into_iter().next().ok_or(LookupError::NotFound)
}

// Semantic rules the typed decode cannot enforce.
fn check_record(record: &VideoRecord) -> Result<()> {
    let snippet = &record.snippet;

    if snippet.published_at_utc().is_err() {
        return Err(LookupError::SchemaMismatch(format!(
            "publishedAt is not a valid timestamp: {:?}",
            snippet.published_at
        )));
    }

    let variants = snippet.thumbnails.variants();

    for (name, thumbnail) in &variants {
        check_thumbnail(name, thumbnail)?;
    }

    for pair in variants.windows(2) {
        let (previous_name, previous) = pair[0];
        let (name, thumbnail) = pair[1];
        if thumbnail.resolution() < previous.resolution() {
            return Err(LookupError::SchemaMismatch(format!(
                "thumbnails.{} ({}x{}) is smaller than thumbnails.{}",
                name, thumbnail.width, thumbnail.height, previous_name
            )));
        }
    }

    Ok(())
}

fn check_thumbnail(name: &str, thumbnail: &Thumbnail) -> Result<()> {
    if thumbnail.width == 0 || thumbnail.height == 0 {
        return Err(LookupError::SchemaMismatch(format!(
            "thumbnails.{} dimensions must be positive, got {}x{}",
            name, thumbnail.width, thumbnail.height
        )));
    }

    if Url::parse(&thumbnail.url).is_err() {
        return Err(LookupError::SchemaMismatch(format!(
            "thumbnails.{} url is not an absolute URL: {}",
            name, thumbnail.url
        )));
    }

    Ok(())
}
