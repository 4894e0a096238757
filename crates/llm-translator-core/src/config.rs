use serde::{Deserialize, Serialize};

/// Language codes following ISO 639-1
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(pub String);

impl Lang {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lang {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Lang {
    fn from(s: String) -> Self {
        Self(s)
    }
}

const DEFAULT_BASE_URL: &str = "http://localhost:11434/v1";
const DEFAULT_API_KEY: &str = "ollama";
const DEFAULT_MODEL: &str = "qwen2.5:7b";
const DEFAULT_MAX_TOKENS: u32 = 2000;
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Environment variable selecting the active provider preset.
pub const PROVIDER_ENV: &str = "LLM_PROVIDER";

/// Named presets for local OpenAI-compatible model servers.
///
/// Each variant maps to one serving backend; `Custom` is assembled from
/// individual environment variables with hardcoded fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Ollama,
    LmStudio,
    Vllm,
    TextGenWebui,
    Custom,
}

impl Provider {
    /// Fallback preset when no selector is given or the selector is unknown.
    pub const DEFAULT: Self = Self::Ollama;

    /// Look up a provider by its selector key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ollama" => Some(Self::Ollama),
            "lmstudio" => Some(Self::LmStudio),
            "vllm" => Some(Self::Vllm),
            "webui" => Some(Self::TextGenWebui),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }

    /// Selector key as accepted by [`Provider::from_key`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::LmStudio => "lmstudio",
            Self::Vllm => "vllm",
            Self::TextGenWebui => "webui",
            Self::Custom => "custom",
        }
    }

    /// Human-readable name shown in the UI and in logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ollama => "Ollama",
            Self::LmStudio => "LM Studio",
            Self::Vllm => "vLLM",
            Self::TextGenWebui => "Text Generation WebUI",
            Self::Custom => "Custom",
        }
    }
}

/// Resolved model-server configuration for OpenAI-compatible APIs.
///
/// Supports Ollama, LM Studio, vLLM, Text Generation WebUI, and any other
/// OpenAI-compatible server via the `custom` preset. Resolved once at process
/// start and immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Display name of the provider (e.g., "Ollama")
    pub name: String,
    /// Base URL of the API (e.g., "http://localhost:11434/v1")
    pub base_url: String,
    /// Credential sent as a bearer token; local servers usually ignore it
    pub api_key: String,
    /// Model identifier
    pub model: String,
    /// Maximum output tokens per completion
    pub max_tokens: u32,
    /// Sampling temperature (0.0-1.0 recommended)
    pub temperature: f32,
}

impl ModelConfig {
    /// Resolve a configuration from an optional provider selector.
    ///
    /// Total over its input: an absent or unrecognized key falls back to the
    /// default preset instead of failing, so this always returns a fully
    /// populated configuration.
    pub fn resolve(provider_key: Option<&str>) -> Self {
        let provider = match provider_key {
            None => Provider::DEFAULT,
            Some(key) => Provider::from_key(key).unwrap_or_else(|| {
                tracing::warn!(
                    "Unknown provider '{}', falling back to '{}'",
                    key,
                    Provider::DEFAULT.key()
                );
                Provider::DEFAULT
            }),
        };
        Self::preset(provider)
    }

    /// Resolve from the `LLM_PROVIDER` environment variable.
    ///
    /// Intended to be called once at startup; pass the resolved value around
    /// by reference afterwards.
    pub fn resolve_from_env() -> Self {
        let key = std::env::var(PROVIDER_ENV).ok();
        Self::resolve(key.as_deref())
    }

    /// Build the configuration for a specific preset.
    pub fn preset(provider: Provider) -> Self {
        match provider {
            Provider::Ollama => Self {
                name: provider.display_name().to_string(),
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: DEFAULT_API_KEY.to_string(),
                model: DEFAULT_MODEL.to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            },
            Provider::LmStudio => Self {
                name: provider.display_name().to_string(),
                base_url: "http://localhost:1234/v1".to_string(),
                api_key: "lm-studio".to_string(),
                model: "llama-3.2-1b".to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            },
            Provider::Vllm => Self {
                name: provider.display_name().to_string(),
                base_url: "http://localhost:8000/v1".to_string(),
                api_key: "vllm".to_string(),
                model: "Qwen/Qwen2.5-7B-Instruct".to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            },
            Provider::TextGenWebui => Self {
                name: provider.display_name().to_string(),
                base_url: "http://localhost:5000/v1".to_string(),
                api_key: "webui".to_string(),
                model: "custom-model".to_string(),
                max_tokens: DEFAULT_MAX_TOKENS,
                temperature: DEFAULT_TEMPERATURE,
            },
            Provider::Custom => Self::custom_with(|key| std::env::var(key).ok()),
        }
    }

    /// Assemble the `custom` preset from individual overrides.
    ///
    /// Each field falls back to the default preset's value when the override
    /// is absent or unparseable, keeping resolution total.
    fn custom_with(get: impl Fn(&str) -> Option<String>) -> Self {
        let max_tokens = get("LLM_MAX_TOKENS")
            .and_then(|v| match v.parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    tracing::warn!("Invalid LLM_MAX_TOKENS '{}', using default", v);
                    None
                }
            })
            .unwrap_or(DEFAULT_MAX_TOKENS);

        let temperature = get("LLM_TEMPERATURE")
            .and_then(|v| match v.parse() {
                Ok(t) => Some(t),
                Err(_) => {
                    tracing::warn!("Invalid LLM_TEMPERATURE '{}', using default", v);
                    None
                }
            })
            .unwrap_or(DEFAULT_TEMPERATURE);

        Self {
            name: Provider::Custom.display_name().to_string(),
            base_url: get("LLM_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: get("LLM_API_KEY").unwrap_or_else(|| DEFAULT_API_KEY.to_string()),
            model: get("LLM_MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            temperature,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::preset(Provider::DEFAULT)
    }
}
