/// The three post variants derived from one article.
///
/// Everything here is a pure function of the extracted article text (plus
/// the source URL for the thread's closing line); nothing outlives the
/// request that produced it.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RepurposedContent {
    pub linkedin: String,
    /// Ordered thread: hook, first takeaway, second takeaway + link.
    pub twitter: [String; 3],
    pub instagram: InstagramPost,
}

/// Instagram variant: a caption plus a reel suggestion.
#[derive(Debug, Clone, serde::Serialize)]
pub struct InstagramPost {
    pub caption: String,
    pub reel_idea: String,
}
