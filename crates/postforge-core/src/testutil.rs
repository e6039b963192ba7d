//! Test utilities: mock implementations of the pipeline traits.
//!
//! Handwritten mocks for dependency injection in unit and integration
//! tests. Mocks use `Arc<Mutex<_>>` for interior mutability so cloned
//! handles share their configured responses.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::traits::{Extractor, Fetcher};

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Mock fetcher that returns a configurable response.
#[derive(Clone)]
pub struct MockFetcher {
    /// Queue of responses. Each call pops the first element.
    /// If empty, returns a default HTML string.
    responses: Arc<Mutex<Vec<Result<String, AppError>>>>,
}

impl MockFetcher {
    pub fn new(html: &str) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Ok(html.to_string())])),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self {
            responses: Arc::new(Mutex::new(vec![Err(error)])),
        }
    }
}

impl Fetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, AppError> {
        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok("<html><body>default</body></html>".to_string())
        } else {
            responses.remove(0)
        }
    }
}

// ---------------------------------------------------------------------------
// MockExtractor
// ---------------------------------------------------------------------------

/// Mock extractor that returns fixed text, the input unchanged, or an error.
#[derive(Clone)]
pub struct MockExtractor {
    text: Arc<Mutex<Option<String>>>,
    error: Arc<Mutex<Option<AppError>>>,
}

impl MockExtractor {
    /// Extractor that returns the input HTML unchanged.
    pub fn passthrough() -> Self {
        Self {
            text: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Extractor that returns `text` regardless of input.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Arc::new(Mutex::new(Some(text.to_string()))),
            error: Arc::new(Mutex::new(None)),
        }
    }

    /// Extractor that returns an error.
    pub fn with_error(error: AppError) -> Self {
        Self {
            text: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(Some(error))),
        }
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, html: &str) -> Result<String, AppError> {
        let mut error = self.error.lock().unwrap();
        if let Some(e) = error.take() {
            return Err(e);
        }
        match self.text.lock().unwrap().as_ref() {
            Some(text) => Ok(text.clone()),
            None => Ok(html.to_string()),
        }
    }
}
