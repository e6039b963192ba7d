use serde::{Deserialize, Serialize};

use postforge_core::models::{InstagramPost, RepurposedContent};

// ---------------------------------------------------------------------------
// Repurpose
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct RepurposeRequest {
    /// Article URL to repurpose. A missing or empty value is rejected with
    /// "URL is required" rather than a deserialization failure.
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct RepurposeResponse {
    /// Long-form professional post.
    pub linkedin: String,
    /// Ordered three-part thread.
    pub twitter: Vec<String>,
    /// Caption plus reel suggestion.
    pub instagram: InstagramResponse,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct InstagramResponse {
    pub caption: String,
    pub reel_idea: String,
}

impl From<RepurposedContent> for RepurposeResponse {
    fn from(content: RepurposedContent) -> Self {
        Self {
            linkedin: content.linkedin,
            twitter: content.twitter.to_vec(),
            instagram: InstagramResponse::from(content.instagram),
        }
    }
}

impl From<InstagramPost> for InstagramResponse {
    fn from(post: InstagramPost) -> Self {
        Self {
            caption: post.caption,
            reel_idea: post.reel_idea,
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
