use thiserror::Error;

/// Application-wide error types for Postforge.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request was rejected before the pipeline ran (e.g. missing URL).
    #[error("{0}")]
    ValidationError(String),

    /// HTTP request failed (non-success status, bad URL, unreadable body).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Network/connection error.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The fetched page yielded no usable article text.
    #[error("Could not extract text from the URL.")]
    EmptyExtraction,

    /// Generic error.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns true if the failure happened while fetching the page.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            AppError::HttpError(_) | AppError::NetworkError(_) | AppError::Timeout(_)
        )
    }
}
