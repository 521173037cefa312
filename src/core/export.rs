use crate::models::video::VideoRecord;

/// Renders validated records as CSV, one row per record. Free-text fields
/// are double-quoted with embedded quotes doubled.
pub fn to_csv(records: &[VideoRecord]) -> String {
    let mut lines = vec!["Title,VideoId,ChannelTitle,PublishedAt,TagsCount".to_string()];

    for record in records {
        let snippet = &record.snippet;
        lines.push(format!(
            "{},{},{},{},{}",
            quote(&snippet.title),
            record.id.as_str(),
            quote(&snippet.channel_title),
            snippet.published_at,
            snippet.tags.len()
        ));
    }

    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Pretty-printed JSON rendition of a record, for copy/export surfaces.
pub fn to_pretty_json(record: &VideoRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validate::validate_lookup;
    use serde_json::json;

    fn record_with_title(title: &str) -> VideoRecord {
        serde_json::from_value(json!({
            "kind": "youtube#video",
            "etag": "etag",
            "id": "dQw4w9WgXcQ",
            "snippet": {
                "publishedAt": "2009-10-25T06:57:33Z",
                "channelId": "UCuAXFkgsw1L7xaCfnd5JJOw",
                "title": title,
                "description": "d",
                "thumbnails": {
                    "default": { "url": "https://i.ytimg.com/d.jpg", "width": 120, "height": 90 },
                    "medium": { "url": "https://i.ytimg.com/m.jpg", "width": 320, "height": 180 },
                    "high": { "url": "https://i.ytimg.com/h.jpg", "width": 480, "height": 360 }
                },
                "channelTitle": "Rick Astley",
                "tags": ["a", "b", "c"],
                "categoryId": "10",
                "liveBroadcastContent": "none",
                "localized": { "title": "t", "description": "d" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_record() {
        let records = vec![record_with_title("one"), record_with_title("two")];
        let csv = to_csv(&records);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Title,VideoId,ChannelTitle,PublishedAt,TagsCount");
        assert_eq!(
            lines[1],
            "\"one\",dQw4w9WgXcQ,\"Rick Astley\",2009-10-25T06:57:33Z,3"
        );
    }

    #[test]
    fn csv_doubles_embedded_quotes() {
        let csv = to_csv(&[record_with_title(r#"He said "hi", twice"#)]);
        assert!(csv.contains(r#""He said ""hi"", twice""#));
    }

    #[test]
    fn csv_of_no_records_is_just_the_header() {
        assert_eq!(to_csv(&[]), "Title,VideoId,ChannelTitle,PublishedAt,TagsCount");
    }

    #[test]
    fn pretty_json_round_trips_through_validation() {
        let rendered = to_pretty_json(&record_with_title("round trip")).unwrap();
        let item: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        let record = validate_lookup(json!({ "items": [item] })).unwrap();
        assert_eq!(record.snippet.title, "round trip");
        assert_eq!(record.id.as_str(), "dQw4w9WgXcQ");
    }
}
