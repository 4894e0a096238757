use llm_translator_core::{ModelConfig, TranslationService};

/// Global application state
///
/// Holds the one translation service built from the configuration resolved at
/// startup. Everything in here is read-only, so handlers share it without
/// locking.
pub struct AppState {
    pub service: TranslationService,
}

impl AppState {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            service: TranslationService::new(config),
        }
    }

    /// Build state around a preassembled service (used by tests)
    pub fn with_service(service: TranslationService) -> Self {
        Self { service }
    }
}
