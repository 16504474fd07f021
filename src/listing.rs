use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{ExtractorError, Result};
use crate::models::VideoSummary;
use crate::utils::{extract_digits, parse_relative_date};

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Walk a channel page's embedded dataset into at most `max_videos` listing
/// entries, preserving source order.
///
/// Structural misses (no videos tab, unrecognized layout) fail the whole
/// listing; a single entry that cannot be summarized is logged and skipped
/// without affecting its siblings.
pub fn extract_listing(
    data: &Value,
    max_videos: usize,
    now: DateTime<Utc>,
) -> Result<Vec<VideoSummary>> {
    let tab = find_videos_tab(data)?;
    let items = find_video_items(tab)?;

    let mut videos = Vec::new();
    for item in items.into_iter().take(max_videos) {
        match summarize_item(item, now) {
            Ok(summary) => videos.push(summary),
            Err(e) => tracing::warn!("Skipping listing entry: {}", e),
        }
    }

    Ok(videos)
}

/// Select the navigation tab titled "videos" (case-insensitive).
fn find_videos_tab(data: &Value) -> Result<&Value> {
    let tabs = data["contents"]["twoColumnBrowseResultsRenderer"]["tabs"]
        .as_array()
        .ok_or(ExtractorError::TabNotFound)?;

    tabs.iter()
        .find(|tab| {
            tab["tabRenderer"]["title"]
                .as_str()
                .map(|title| title.eq_ignore_ascii_case("videos"))
                .unwrap_or(false)
        })
        .ok_or(ExtractorError::TabNotFound)
}

/// Try the two known listing layouts in order: the plain grid nested under a
/// section list, then the continuous rich grid whose entries wrap video
/// items. Rich-grid entries without a video item (promotions and the like)
/// are skipped, not errors.
fn find_video_items(tab: &Value) -> Result<Vec<&Value>> {
    let grid = &tab["tabRenderer"]["content"]["sectionListRenderer"]["contents"][0]
        ["itemSectionRenderer"]["contents"][0]["gridRenderer"]["items"];
    if let Some(items) = grid.as_array() {
        return Ok(items.iter().collect());
    }

    let feed = &tab["tabRenderer"]["content"]["richGridRenderer"]["contents"];
    if let Some(entries) = feed.as_array() {
        let items = entries
            .iter()
            .filter_map(|entry| {
                let video = &entry["richItemRenderer"]["content"]["videoRenderer"];
                video.is_object().then_some(video)
            })
            .collect();
        return Ok(items);
    }

    Err(ExtractorError::LayoutNotRecognized)
}

/// Derive one summary from a video item.
///
/// Title and id are required; view count and published time degrade to
/// "0 views" / "Unknown" when the listing omits them.
fn summarize_item(item: &Value, now: DateTime<Utc>) -> Result<VideoSummary> {
    let title = item["title"]["runs"][0]["text"]
        .as_str()
        .ok_or_else(|| ExtractorError::FieldMissing("title".to_string()))?
        .to_string();

    let video_id = item["videoId"]
        .as_str()
        .ok_or_else(|| ExtractorError::FieldMissing("videoId".to_string()))?
        .to_string();

    let views_text = item["viewCountText"]["simpleText"].as_str().unwrap_or("0 views");
    let upload_text = item["publishedTimeText"]["simpleText"]
        .as_str()
        .unwrap_or("Unknown")
        .to_string();

    Ok(VideoSummary {
        title,
        url: format!("{}{}", WATCH_URL_PREFIX, video_id),
        video_id,
        views: extract_digits(views_text),
        upload_date: parse_relative_date(&upload_text, now),
        upload_text,
    })
}
