use std::future::Future;

use crate::error::AppError;

/// Fetches raw HTML content from a URL.
pub trait Fetcher: Send + Sync + Clone {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, AppError>> + Send;
}

/// Pulls readable article text out of raw HTML.
///
/// Implementations return newline-separated non-empty text chunks and fail
/// with [`AppError::EmptyExtraction`] when the page has no usable text.
pub trait Extractor: Send + Sync + Clone {
    fn extract(&self, html: &str) -> Result<String, AppError>;
}
