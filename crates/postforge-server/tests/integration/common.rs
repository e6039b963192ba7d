use std::sync::Arc;

use axum::Router;

use postforge_client::ArticleExtractor;
use postforge_core::repurpose::RepurposeService;
use postforge_core::testutil::MockFetcher;
use postforge_server::routes;
use postforge_server::state::AppState;

/// A small article page with a digit-bearing opening sentence, boilerplate
/// to strip, and enough words for hashtag extraction.
pub const ARTICLE_HTML: &str = r#"
    <html><body>
        <nav>Home | About | Contact</nav>
        <article>
            <p>The 5 reasons startups fail in year 1.
            Founders underestimate runway and overestimate early traction signals.
            Hiring ahead of revenue burns capital that product work needed.
            Startups that survive keep burn low and talk to customers weekly.</p>
        </article>
        <footer>All rights reserved</footer>
    </body></html>
"#;

/// Build the real router over a mock fetcher and the real extractor, so
/// tests exercise the full extract → format path without the network.
pub fn setup_test_app(fetcher: MockFetcher) -> Router {
    let service = RepurposeService::new(fetcher, ArticleExtractor::new());
    routes::router(Arc::new(AppState { service }))
}
