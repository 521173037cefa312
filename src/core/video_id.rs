use std::sync::LazyLock;

use regex::Regex;

use crate::models::video::VideoId;

// The id must be followed by a delimiter or the end of input. The regex
// crate has no lookahead, so the delimiter is consumed by a trailing group
// and only the capture is kept.
static FALLBACK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|live|shorts)/|.*[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})(?:$|["&?/\s])"#,
    )
    .unwrap()
});

/// Extracts the 11-character video identifier from a YouTube URL.
///
/// Structured parsing handles the common hosts first: `watch` URLs take the
/// `v` query parameter, `embed`/`live`/`shorts` paths take the segment after
/// the prefix, and `youtu.be` links take the first path segment. A match
/// there is final, even when its candidate turns out malformed. Inputs the
/// structured stage does not recognize (including strings that are not
/// well-formed URLs at all) go through a single fallback regex.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    if input.is_empty() {
        return None;
    }

    if let Ok(parsed) = url::Url::parse(input) {
        if let Some(host) = parsed.host_str() {
            let host = host.to_lowercase();

            if host.contains("youtube.com") {
                let path = parsed.path();

                if path.starts_with("/watch") {
                    return parsed
                        .query_pairs()
                        .find(|(k, _)| k == "v")
                        .and_then(|(_, v)| v.parse().ok());
                }

                for prefix in ["/embed/", "/live/", "/shorts/"] {
                    if path.starts_with(prefix) {
                        let segments: Vec<&str> =
                            path.split('/').filter(|s| !s.is_empty()).collect();
                        return segments.get(1).and_then(|s| s.parse().ok());
                    }
                }
                // other youtube.com paths fall through to the regex
            } else if host.contains("youtu.be") {
                let segments: Vec<&str> =
                    parsed.path().split('/').filter(|s| !s.is_empty()).collect();
                return segments.first().and_then(|s| s.parse().ok());
            }
        }
    }

    FALLBACK_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}
