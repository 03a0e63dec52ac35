use std::sync::Arc;

use crate::application::ports::GenerationProvider;
use crate::infrastructure::llm::{GeminiClient, MockGenerationProvider};
use crate::presentation::config::{LlmProvider, LlmSettings};

pub struct ProviderFactory;

#[derive(Debug, thiserror::Error)]
pub enum ProviderFactoryError {
    #[error("invalid base_url: {0}")]
    InvalidBaseUrl(String),
    #[error("model must not be empty")]
    MissingModel,
}

impl ProviderFactory {
    /// A missing Gemini key is not fatal here: requests report it as `api_key_missing`.
    pub fn create(
        settings: &LlmSettings,
    ) -> Result<Arc<dyn GenerationProvider>, ProviderFactoryError> {
        match settings.provider {
            LlmProvider::Gemini => {
                if !settings.base_url.starts_with("http://")
                    && !settings.base_url.starts_with("https://")
                {
                    return Err(ProviderFactoryError::InvalidBaseUrl(
                        settings.base_url.clone(),
                    ));
                }
                if settings.model.trim().is_empty() {
                    return Err(ProviderFactoryError::MissingModel);
                }
                if settings.api_key.trim().is_empty() {
                    tracing::warn!("GEMINI_API_KEY is not set; generation requests will fail");
                }
                tracing::info!(model = %settings.model, "Using Gemini generation provider");
                Ok(Arc::new(GeminiClient::with_base_url(
                    settings.api_key.clone(),
                    settings.model.clone(),
                    &settings.base_url,
                )))
            }
            LlmProvider::Mock => {
                tracing::info!("Using mock generation provider");
                Ok(Arc::new(MockGenerationProvider))
            }
        }
    }
}
