use crate::error::AppError;
use crate::format;
use crate::models::RepurposedContent;
use crate::traits::{Extractor, Fetcher};

/// Orchestrates the full repurposing pipeline: fetch → extract → format.
///
/// Generic over the fetcher and extractor via traits, enabling dependency
/// injection and testability without real HTTP calls.
pub struct RepurposeService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    fetcher: F,
    extractor: E,
}

impl<F, E> RepurposeService<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self { fetcher, extractor }
    }

    /// Run the full pipeline for a URL.
    ///
    /// 1. Fetch HTML from the URL
    /// 2. Extract readable article text
    /// 3. Derive the three post variants
    pub async fn repurpose(&self, url: &str) -> Result<RepurposedContent, AppError> {
        tracing::info!("Fetching {}", url);
        let html = self.fetcher.fetch(url).await?;
        tracing::info!("Fetched {} bytes of HTML", html.len());

        let text = self.extractor.extract(&html)?;
        tracing::info!(
            "Extracted {} bytes of article text from {} bytes of HTML",
            text.len(),
            html.len()
        );

        Ok(format::repurpose_text(&text, url))
    }
}
