//! HTTP route handlers for the translation API.
//!
//! All routes speak JSON with the camelCase field names the browser front
//! end uses; the front end itself is served from the static directory.

mod extract;
mod model_info;
mod translate;

pub use extract::extract_text;
pub use model_info::model_info;
pub use translate::translate;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/translate`.
///
/// Fields default to empty so missing keys surface as a validation error
/// instead of a deserialization failure.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslateRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
}

/// Body of a successful `POST /api/translate`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Body of a successful `POST /api/extract-text`.
#[derive(Serialize)]
pub struct ExtractResponse {
    pub content: String,
}
