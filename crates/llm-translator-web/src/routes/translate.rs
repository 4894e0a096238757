//! Translation route - relays one request to the configured model server.

use axum::{Json, extract::State};
use llm_translator_core::Lang;
use std::sync::Arc;
use tracing::error;

use super::{TranslateRequest, TranslateResponse};
use crate::helpers::{ApiError, ApiResult};
use crate::state::AppState;

/// Relay a translation request to the model server.
///
/// Missing or empty fields (text counts as missing once trimmed) are
/// rejected here, before any outbound call is attempted. Downstream
/// failures come back classified; only the user message leaves the server.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TranslateRequest>,
) -> ApiResult<Json<TranslateResponse>> {
    if request.text.trim().is_empty()
        || request.source_language.is_empty()
        || request.target_language.is_empty()
    {
        return Err(ApiError::bad_request("Missing required fields"));
    }

    let source = Lang::new(request.source_language);
    let target = Lang::new(request.target_language);

    match state.service.translate(&request.text, &source, &target).await {
        Ok(translated_text) => Ok(Json(TranslateResponse { translated_text })),
        Err(e) => {
            error!("Translation failed ({} -> {}): {}", source, target, e);
            Err(e.into())
        }
    }
}
