//! LLM Translator Core Library
//!
//! This library provides the core functionality for translating text through
//! locally hosted, OpenAI-compatible model servers:
//! - Provider preset resolution (Ollama, LM Studio, vLLM, WebUI, custom)
//! - Prompt construction and the single-attempt translation relay
//! - Classified downstream errors
//! - Best-effort text extraction from uploaded documents

pub mod config;
pub mod error;
pub mod extract;
pub mod lang;
pub mod translator;

pub use config::{Lang, ModelConfig, PROVIDER_ENV, Provider};
pub use error::{Error, Result};
pub use extract::extract_text;
pub use lang::language_name;
pub use translator::{OpenAiTranslator, Translator, TranslatorInfo, create_translator};

use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Read-only view of the active configuration for UI display.
///
/// Deliberately omits the credential.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub provider: String,
    pub model: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
}

/// High-level translation relay combining the resolved configuration and a
/// translator backend.
///
/// Constructed once at process start; safe to share and call concurrently
/// since both parts are read-only.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    config: ModelConfig,
}

impl TranslationService {
    /// Create a service backed by the OpenAI-compatible translator.
    pub fn new(config: ModelConfig) -> Self {
        let translator = create_translator(config.clone());
        Self { translator, config }
    }

    /// Create with a custom translator (used by tests)
    pub fn with_translator(translator: Arc<dyn Translator>, config: ModelConfig) -> Self {
        Self { translator, config }
    }

    /// Relay one translation request to the backend.
    pub async fn translate(&self, text: &str, source: &Lang, target: &Lang) -> Result<String> {
        debug!(
            "Translating {} chars with {} ({} -> {})",
            text.chars().count(),
            self.translator.name(),
            source,
            target
        );
        self.translator.translate(text, source, target).await
    }

    /// The active configuration's public identity.
    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            provider: self.config.name.clone(),
            model: self.config.model.clone(),
            base_url: self.config.base_url.clone(),
        }
    }

    pub const fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn translator_info(&self) -> TranslatorInfo {
        self.translator.info()
    }
}
