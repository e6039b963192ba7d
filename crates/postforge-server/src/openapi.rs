use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Postforge API",
        version = "0.1.0",
        description = "Turns a web article into LinkedIn, Twitter, and Instagram post drafts."
    ),
    paths(crate::routes::repurpose, crate::routes::health),
    components(schemas(
        crate::dto::RepurposeRequest,
        crate::dto::RepurposeResponse,
        crate::dto::InstagramResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "repurpose", description = "Article repurposing"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
