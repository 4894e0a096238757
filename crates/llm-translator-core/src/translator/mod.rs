mod openai;
mod traits;

pub use openai::OpenAiTranslator;
pub use traits::{Translator, TranslatorInfo};

use crate::config::ModelConfig;
use std::sync::Arc;

/// Create a translator from a resolved configuration
pub fn create_translator(config: ModelConfig) -> Arc<dyn Translator> {
    Arc::new(OpenAiTranslator::new(config))
}
