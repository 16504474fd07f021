/*!
# Channel Analytics

Extracts structured metadata from a YouTube channel's public videos listing
and the watch pages behind it, then reports per-channel averages as CSV.

## Pipeline

- Locate and deserialize the `ytInitialData` payload embedded in the page
- Walk the known listing layouts into bounded, ordered video summaries
- Fetch watch pages concurrently (listing order preserved) for detail fields
- Assemble one record per video, compute averages, write the report
*/

pub mod analysis;
pub mod config;
pub mod detail;
pub mod embedded;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod listing;
pub mod models;
pub mod output;
pub mod utils;

pub use config::AppConfig;
pub use error::{ExtractorError, Result};
pub use extractor::ChannelExtractor;
pub use models::{ChannelAnalysis, VideoDetail, VideoRecord, VideoSummary};
