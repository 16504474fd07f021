use crate::models::{ChannelAnalysis, VideoDetail, VideoRecord, VideoSummary};

/// Merge one listing entry with its watch-page detail into an output row.
pub fn assemble_record(summary: VideoSummary, detail: VideoDetail) -> VideoRecord {
    VideoRecord {
        title: summary.title,
        video_id: summary.video_id,
        url: summary.url,
        views: summary.views,
        upload_text: summary.upload_text,
        upload_date: summary.upload_date,
        duration_secs: detail.duration_secs,
        likes: detail.likes,
        tags: detail.tags,
        location: detail.location,
        subscriber_count: detail.subscriber_count,
    }
}

/// Arithmetic means over the record set.
///
/// An empty set leaves every average undefined.
pub fn analyze(records: &[VideoRecord]) -> ChannelAnalysis {
    if records.is_empty() {
        return ChannelAnalysis::default();
    }

    let count = records.len() as f64;
    let mean =
        |field: fn(&VideoRecord) -> u64| records.iter().map(field).sum::<u64>() as f64 / count;

    ChannelAnalysis {
        average_views: Some(mean(|r| r.views)),
        average_likes: Some(mean(|r| r.likes)),
        average_duration: Some(mean(|r| r.duration_secs)),
        average_subscriber_count: Some(mean(|r| r.subscriber_count)),
    }
}
