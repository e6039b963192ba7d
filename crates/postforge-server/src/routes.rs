use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use postforge_core::error::AppError;
use postforge_core::traits::{Extractor, Fetcher};

use crate::dto::{HealthResponse, RepurposeRequest, RepurposeResponse};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Build the full router with all routes.
pub fn router<F, E>(state: Arc<AppState<F, E>>) -> Router
where
    F: Fetcher + 'static,
    E: Extractor + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/repurpose", post(repurpose))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Repurpose
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/repurpose",
    request_body = RepurposeRequest,
    responses(
        (status = 200, description = "All three post variants", body = RepurposeResponse),
        (status = 400, description = "Missing URL or no extractable text", body = crate::dto::ErrorResponse),
        (status = 500, description = "Fetch or internal failure", body = crate::dto::ErrorResponse),
    ),
    tag = "repurpose"
)]
pub async fn repurpose<F, E>(
    State(state): State<Arc<AppState<F, E>>>,
    axum::Json(body): axum::Json<RepurposeRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    F: Fetcher + 'static,
    E: Extractor + 'static,
{
    let url = match body.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::ValidationError("URL is required".to_string()).into()),
    };

    let content = state.service.repurpose(url).await?;

    Ok(axum::Json(RepurposeResponse::from(content)))
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health() -> impl IntoResponse {
    axum::Json(HealthResponse { status: "healthy" })
}
