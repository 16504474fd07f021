use chrono::Utc;
use futures::{stream, StreamExt};

use crate::analysis::assemble_record;
use crate::config::AppConfig;
use crate::detail::extract_detail;
use crate::embedded::extract_initial_data;
use crate::error::Result;
use crate::fetch::{normalize_channel_url, PageFetcher};
use crate::listing::extract_listing;
use crate::models::{VideoDetail, VideoRecord};

/// Drives one channel run: listing extraction first, then bounded concurrent
/// watch-page fetches reassembled in listing order.
pub struct ChannelExtractor {
    fetcher: PageFetcher,
    max_videos: usize,
    concurrency: usize,
}

impl ChannelExtractor {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config.request_timeout_secs)?,
            max_videos: config.max_videos,
            concurrency: config.fetch_concurrency.max(1),
        })
    }

    /// Extract one record per listed video.
    ///
    /// Failures fetching or parsing the listing page are terminal; failures
    /// on individual watch pages degrade that record's detail fields to
    /// their defaults.
    pub async fn extract_channel(&self, channel_url: &str) -> Result<Vec<VideoRecord>> {
        let listing_url = normalize_channel_url(channel_url)?;
        tracing::info!("Fetching channel listing from {}", listing_url);

        let page = self.fetcher.fetch(&listing_url).await?;
        let data = extract_initial_data(&page)?;
        let summaries = extract_listing(&data, self.max_videos, Utc::now())?;
        tracing::info!("Listing yielded {} videos", summaries.len());

        // `buffered` keeps the output in listing order regardless of which
        // fetch completes first.
        let details: Vec<VideoDetail> = stream::iter(summaries.iter())
            .map(|summary| self.fetch_detail(&summary.url))
            .buffered(self.concurrency)
            .collect()
            .await;

        Ok(summaries
            .into_iter()
            .zip(details)
            .map(|(summary, detail)| assemble_record(summary, detail))
            .collect())
    }

    async fn fetch_detail(&self, url: &str) -> VideoDetail {
        match self.fetcher.fetch(url).await {
            Ok(page) => extract_detail(&page),
            Err(e) => {
                tracing::warn!("Fetching video details for {} failed: {}", url, e);
                VideoDetail::default()
            }
        }
    }
}
