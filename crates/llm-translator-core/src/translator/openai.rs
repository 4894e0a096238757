use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::traits::{Translator, TranslatorInfo};
use crate::config::{Lang, ModelConfig};
use crate::error::{Error, Result};
use crate::lang::language_name;
use async_trait::async_trait;

/// Request timeout for completion calls; local models can be slow
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Connect timeout for reaching the local server
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// OpenAI-compatible API translator
/// Works with: Ollama, LM Studio, vLLM, Text Generation WebUI, etc.
pub struct OpenAiTranslator {
    client: Client,
    config: ModelConfig,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenAiTranslator {
    /// Create a new translator for the given resolved configuration.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which should only happen
    /// in extreme circumstances (e.g., TLS backend unavailable on the system).
    #[allow(clippy::expect_used)]
    pub fn new(config: ModelConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Create translation prompt
    fn build_prompt(text: &str, source: &Lang, target: &Lang) -> String {
        format!(
            "You are a professional translator. Translate the following {} text into {}.\n\n\
             Requirements:\n\
             1. Preserve the meaning, tone, and style of the original text\n\
             2. Use natural, idiomatic phrasing in the target language\n\
             3. Use accurate terminology for specialized terms\n\
             4. Output only the translation, with no explanations or extra content\n\n\
             Text:\n{}",
            language_name(source.as_str()),
            language_name(target.as_str()),
            text
        )
    }

    /// Issue a single completion request. No retry: a failed attempt surfaces
    /// immediately as a classified error and the caller decides what to do.
    async fn request(&self, text: &str, source: &Lang, target: &Lang) -> Result<String> {
        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let prompt = Self::build_prompt(text, source, target);

        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        };

        debug!("Translation request to {} ({} -> {})", url, source, target);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_send_error(&url, &e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("API error: {} - {}", status, body);
            return Err(Error::Api { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::InvalidResponse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| Error::InvalidResponse("no choices in response".to_string()))?;

        Ok(content.trim().to_string())
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "OpenAI Compatible",
            requires_api_key: false, // Local servers accept any token
        }
    }

    async fn translate(&self, text: &str, source: &Lang, target: &Lang) -> Result<String> {
        // The boundary rejects empty text; this guard keeps the relay safe
        // for direct library callers without issuing a pointless request.
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        self.request(text, source, target).await
    }
}

/// Classify a transport failure into an explicit error kind.
fn classify_send_error(url: &str, e: &reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::Timeout
    } else if e.is_connect() {
        Error::Connectivity {
            url: url.to_string(),
            detail: e.to_string(),
        }
    } else {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_both_language_names() {
        let prompt = OpenAiTranslator::build_prompt("你好", &Lang::new("zh"), &Lang::new("en"));
        assert!(prompt.contains("Chinese"));
        assert!(prompt.contains("English"));
        assert!(prompt.contains("professional translator"));
    }

    #[test]
    fn prompt_ends_with_the_source_text() {
        let text = "The quick brown fox\njumps over the lazy dog.";
        let prompt = OpenAiTranslator::build_prompt(text, &Lang::new("en"), &Lang::new("de"));
        assert!(prompt.ends_with(text));
    }

    #[test]
    fn prompt_uses_unknown_codes_verbatim() {
        let prompt = OpenAiTranslator::build_prompt("hi", &Lang::new("x-made-up"), &Lang::new("en"));
        assert!(prompt.contains("x-made-up"));
    }
}
