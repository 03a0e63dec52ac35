mod gemini_client;
mod mock_generation_provider;
mod provider_factory;

pub use gemini_client::{DEFAULT_GEMINI_BASE_URL, GeminiClient};
pub use mock_generation_provider::MockGenerationProvider;
pub use provider_factory::{ProviderFactory, ProviderFactoryError};
