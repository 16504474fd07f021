use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{ExtractorError, Result};

const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Shared HTTP client for channel and watch pages.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, USER_AGENT.parse().unwrap());
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            "en-US,en;q=0.9".parse().unwrap(),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Fetch one page as text, treating HTTP error statuses as failures.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Clean a user-supplied channel URL and point handle-style URLs at their
/// videos listing.
///
/// A missing scheme is assumed to be https. URLs that already target the
/// listing, or that identify the channel some other way, pass through
/// untouched.
pub fn normalize_channel_url(url: &str) -> Result<String> {
    let mut cleaned = url.trim().to_string();

    if !cleaned.starts_with("http://") && !cleaned.starts_with("https://") {
        cleaned = format!("https://{}", cleaned);
    }

    Url::parse(&cleaned)
        .map_err(|e| ExtractorError::InvalidUrl(format!("{}: {}", cleaned, e)))?;

    if cleaned.contains("/@") && !cleaned.ends_with("/videos") {
        cleaned = format!("{}/videos", cleaned.trim_end_matches('/'));
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_url_gets_videos_suffix() {
        assert_eq!(
            normalize_channel_url("https://www.youtube.com/@somechannel").unwrap(),
            "https://www.youtube.com/@somechannel/videos"
        );
        assert_eq!(
            normalize_channel_url("https://www.youtube.com/@somechannel/").unwrap(),
            "https://www.youtube.com/@somechannel/videos"
        );
    }

    #[test]
    fn test_already_normalized_url_unchanged() {
        assert_eq!(
            normalize_channel_url("https://www.youtube.com/@somechannel/videos").unwrap(),
            "https://www.youtube.com/@somechannel/videos"
        );
    }

    #[test]
    fn test_non_handle_url_unchanged() {
        assert_eq!(
            normalize_channel_url("https://www.youtube.com/channel/UCabc123").unwrap(),
            "https://www.youtube.com/channel/UCabc123"
        );
    }

    #[test]
    fn test_missing_scheme_assumed_https() {
        assert_eq!(
            normalize_channel_url("www.youtube.com/@somechannel").unwrap(),
            "https://www.youtube.com/@somechannel/videos"
        );
    }

    #[test]
    fn test_unparsable_url_is_rejected() {
        assert!(matches!(
            normalize_channel_url("https://"),
            Err(ExtractorError::InvalidUrl(_))
        ));
    }
}
