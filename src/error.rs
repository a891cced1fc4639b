use thiserror::Error;

/// Error types for paper fetching and report writing
#[derive(Error, Debug)]
pub enum PaperFetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {message}")]
    XmlParseError { message: String },

    /// Invalid PMID format
    #[error("Invalid PMID format: {pmid}")]
    InvalidPmid { pmid: String },

    /// API returned a non-success status
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// API rate limit exceeded
    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    /// Writing the CSV report failed
    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaperFetchError {
    /// Whether a retry could plausibly succeed (server errors and throttling)
    pub fn is_retryable(&self) -> bool {
        match self {
            PaperFetchError::ApiError { status, .. } => *status >= 500 || *status == 429,
            PaperFetchError::RequestError(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PaperFetchError>;
