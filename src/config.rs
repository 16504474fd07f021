use std::env;

/// Runtime knobs, each overridable from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upper bound on listing entries taken from a channel page.
    pub max_videos: usize,

    /// Concurrent watch-page fetches in flight at once.
    pub fetch_concurrency: usize,

    pub request_timeout_secs: u64,

    pub output_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_videos: 20,
            fetch_concurrency: 4,
            request_timeout_secs: 10,
            output_path: "youtube_data_analysis.csv".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_videos: env::var("CHANNEL_MAX_VIDEOS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_videos),
            fetch_concurrency: env::var("FETCH_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_concurrency),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            output_path: env::var("OUTPUT_PATH").unwrap_or(defaults.output_path),
        }
    }
}
