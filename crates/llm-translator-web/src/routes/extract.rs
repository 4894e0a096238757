//! Text-extraction route - uploaded document to translatable text.

use axum::Json;
use axum_extra::extract::Multipart;
use tracing::{info, warn};

use super::ExtractResponse;
use crate::helpers::{ApiError, ApiResult};

/// Extract translatable text from an uploaded file.
///
/// Plain-text and markdown pass through verbatim; RTF gets a tag-stripping
/// pass; binary document formats return an instructional placeholder with a
/// success status. Unrecognized extensions are a client error.
pub async fn extract_text(mut multipart: Multipart) -> ApiResult<Json<ExtractResponse>> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read upload: {e}")))?;

        let content = llm_translator_core::extract_text(&filename, &data).map_err(|e| {
            warn!("Extraction rejected {}: {}", filename, e);
            ApiError::from(e)
        })?;

        info!(
            "Extracted {} chars from {}",
            content.chars().count(),
            filename
        );
        return Ok(Json(ExtractResponse { content }));
    }

    Err(ApiError::bad_request("No file provided"))
}
