//! Model-info route - read-only introspection of the active configuration.

use axum::{Json, extract::State};
use llm_translator_core::ModelInfo;
use std::sync::Arc;

use crate::state::AppState;

/// Report which provider, model, and endpoint are active.
///
/// The credential never appears in this view.
pub async fn model_info(State(state): State<Arc<AppState>>) -> Json<ModelInfo> {
    Json(state.service.model_info())
}
