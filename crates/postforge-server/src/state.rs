use postforge_core::repurpose::RepurposeService;
use postforge_core::traits::{Extractor, Fetcher};

/// Shared application state, available to all route handlers via
/// `State<Arc<AppState>>`.
///
/// Generic over the pipeline dependencies so integration tests can run the
/// real router against mock fetchers/extractors.
pub struct AppState<F, E>
where
    F: Fetcher,
    E: Extractor,
{
    pub service: RepurposeService<F, E>,
}
