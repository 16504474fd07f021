use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry from a channel's videos listing, in source order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoSummary {
    pub title: String,

    /// Opaque platform identifier for the video.
    pub video_id: String,

    /// Canonical watch URL built from `video_id`.
    pub url: String,

    pub views: u64,

    /// Human-readable published-time string as shown on the listing
    /// (e.g. "3 weeks ago"), "Unknown" when the listing omits it.
    pub upload_text: String,

    /// `upload_text` resolved against the time of extraction.
    pub upload_date: DateTime<Utc>,
}

/// Supplementary fields scraped from a single watch page.
///
/// Every field is best-effort; `Default` is the placeholder used when the
/// whole page could not be fetched or parsed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VideoDetail {
    pub likes: u64,

    /// Comma-joined keywords, empty when the page carries none.
    pub tags: String,

    pub location: String,

    /// Channel subscriber count at fetch time, not at upload time.
    pub subscriber_count: u64,

    pub duration_secs: u64,
}

/// One output row: a listing entry merged with its watch-page detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub title: String,
    pub video_id: String,
    pub url: String,
    pub views: u64,
    pub upload_text: String,
    pub upload_date: DateTime<Utc>,
    pub duration_secs: u64,
    pub likes: u64,
    pub tags: String,
    pub location: String,
    pub subscriber_count: u64,
}

/// Per-channel arithmetic means over the extracted records.
///
/// `None` means the record set was empty; zero would read as a real average.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelAnalysis {
    pub average_views: Option<f64>,
    pub average_likes: Option<f64>,
    pub average_duration: Option<f64>,
    pub average_subscriber_count: Option<f64>,
}
