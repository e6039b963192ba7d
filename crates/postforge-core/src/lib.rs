//! Core types, traits, and the repurposing pipeline for Postforge.

pub mod error;
pub mod format;
pub mod keywords;
pub mod models;
pub mod repurpose;
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use models::{InstagramPost, RepurposedContent};
pub use repurpose::RepurposeService;
pub use traits::{Extractor, Fetcher};
