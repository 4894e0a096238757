//! Integration tests for llm-translator-core
//!
//! These tests verify the relay end-to-end with a mock backend:
//! - Configuration resolution feeding the service
//! - Translation delegation and error propagation
//! - Model-info introspection

use async_trait::async_trait;
use llm_translator_core::{
    Error, Lang, ModelConfig, Result, TranslationService, Translator, TranslatorInfo,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// Mock Translator for Testing
// =============================================================================

/// A mock translator that returns predictable translations without network
/// calls and counts how often it is invoked.
struct MockTranslator {
    /// Prefix to add to translations for verification
    prefix: String,
    /// Error to return instead of translating, if set
    failure: Option<fn() -> Error>,
    calls: AtomicUsize,
}

impl MockTranslator {
    fn new() -> Self {
        Self {
            prefix: "[TRANSLATED]".to_string(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(failure: fn() -> Error) -> Self {
        Self {
            prefix: String::new(),
            failure: Some(failure),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "mock",
            requires_api_key: false,
        }
    }

    async fn translate(&self, text: &str, _source: &Lang, _target: &Lang) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        Ok(format!("{} {}", self.prefix, text))
    }
}

fn connectivity_error() -> Error {
    Error::Connectivity {
        url: "http://localhost:11434/v1/chat/completions".to_string(),
        detail: "connection refused".to_string(),
    }
}

// =============================================================================
// Relay Tests
// =============================================================================

#[tokio::test]
async fn translate_delegates_to_the_backend() {
    let mock = Arc::new(MockTranslator::new());
    let service = TranslationService::with_translator(mock.clone(), ModelConfig::default());

    let result = service
        .translate("你好", &Lang::new("zh"), &Lang::new("en"))
        .await
        .expect("translation should succeed");

    assert_eq!(result, "[TRANSLATED] 你好");
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn concurrent_calls_share_the_configuration() {
    let mock = Arc::new(MockTranslator::new());
    let service = Arc::new(TranslationService::with_translator(
        mock.clone(),
        ModelConfig::default(),
    ));

    let mut handles = Vec::new();
    for i in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .translate(&format!("text {i}"), &Lang::new("en"), &Lang::new("fr"))
                .await
        }));
    }

    for handle in handles {
        assert!(handle.await.expect("task should not panic").is_ok());
    }
    assert_eq!(mock.call_count(), 8);
}

#[tokio::test]
async fn connectivity_failures_keep_their_class() {
    let service = TranslationService::with_translator(
        Arc::new(MockTranslator::failing(connectivity_error)),
        ModelConfig::default(),
    );

    let err = service
        .translate("hello", &Lang::new("en"), &Lang::new("zh"))
        .await
        .expect_err("mock should fail");

    assert!(matches!(&err, Error::Connectivity { .. }));
    assert!(err.user_message().contains("Cannot reach"));
    assert!(!err.user_message().contains("connection refused"));
}

#[tokio::test]
async fn timeout_failures_keep_their_class() {
    let service = TranslationService::with_translator(
        Arc::new(MockTranslator::failing(|| Error::Timeout)),
        ModelConfig::default(),
    );

    let err = service
        .translate("hello", &Lang::new("en"), &Lang::new("zh"))
        .await
        .expect_err("mock should fail");

    assert!(err.user_message().contains("timed out"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn resolved_config_feeds_model_info() {
    let service = TranslationService::new(ModelConfig::resolve(Some("vllm")));
    let info = service.model_info();

    assert_eq!(info.provider, "vLLM");
    assert_eq!(info.model, "Qwen/Qwen2.5-7B-Instruct");
    assert_eq!(info.base_url, "http://localhost:8000/v1");
}

#[test]
fn unknown_provider_still_yields_a_working_service() {
    let service = TranslationService::new(ModelConfig::resolve(Some("definitely-not-real")));
    assert_eq!(service.model_info().provider, "Ollama");
    assert_eq!(service.config().max_tokens, 2000);
}
