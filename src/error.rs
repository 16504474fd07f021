use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("No embedded data payload found in page")]
    PayloadNotFound,

    #[error("Embedded payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Channel data has no videos tab")]
    TabNotFound,

    #[error("Videos tab content matches no known layout")]
    LayoutNotRecognized,

    #[error("Missing field: {0}")]
    FieldMissing(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
