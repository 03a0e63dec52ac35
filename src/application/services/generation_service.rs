use std::sync::Arc;
use std::time::Duration;

use futures::stream::StreamExt;

use crate::application::ports::{GenerationProvider, ProviderError, ProviderRequest};
use crate::domain::{GenerationRequest, GenerationResult, InvalidModeError};

use super::prompt_selector::instruction_for;
use super::response_assembler::ResponseAssembler;

pub struct GenerationService {
    provider: Arc<dyn GenerationProvider>,
    enable_search: bool,
    timeout: Duration,
}

impl GenerationService {
    pub fn new(
        provider: Arc<dyn GenerationProvider>,
        enable_search: bool,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            enable_search,
            timeout,
        }
    }

    /// Validates the raw mode tag and generates a response for `content`.
    pub async fn process(
        &self,
        content: &str,
        ai_mode: &str,
    ) -> Result<GenerationResult, GenerationError> {
        let request = GenerationRequest::parse(content, ai_mode)?;
        self.generate(&request).await
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        self.generate_with_timeout(request, self.timeout).await
    }

    /// Dropping the returned future abandons the in-flight provider call.
    #[tracing::instrument(
        skip(self, request),
        fields(mode = %request.mode, content_chars = request.content.chars().count())
    )]
    pub async fn generate_with_timeout(
        &self,
        request: &GenerationRequest,
        timeout: Duration,
    ) -> Result<GenerationResult, GenerationError> {
        match tokio::time::timeout(timeout, self.run(request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(timeout_secs = timeout.as_secs(), "Generation timed out");
                Err(GenerationError::Timeout(timeout))
            }
        }
    }

    async fn run(&self, request: &GenerationRequest) -> Result<GenerationResult, GenerationError> {
        let provider_request = ProviderRequest {
            system_instruction: instruction_for(request.mode),
            user_content: request.content.clone(),
            enable_search: self.enable_search,
        };

        match self.provider.generate(&provider_request).await {
            Ok(output) if !output.text.is_empty() => {
                let mut assembler = ResponseAssembler::new();
                assembler.push(output);
                return finish(assembler, "one-shot");
            }
            Ok(_) => {
                tracing::warn!("One-shot response was empty, falling back to streaming");
            }
            Err(ProviderError::MissingCredential) => {
                return Err(GenerationError::ConfigurationMissing);
            }
            Err(e) => {
                tracing::warn!(error = %e, "One-shot request failed, falling back to streaming");
            }
        }

        let mut stream = self.provider.generate_stream(&provider_request).await?;
        let mut assembler = ResponseAssembler::new();
        while let Some(fragment) = stream.next().await {
            assembler.push(fragment?);
        }

        finish(assembler, "streaming")
    }
}

fn finish(
    assembler: ResponseAssembler,
    path: &'static str,
) -> Result<GenerationResult, GenerationError> {
    let grounding_count = assembler.grounding_count();
    for source in assembler.sources() {
        tracing::debug!(uri = ?source.uri, title = ?source.title, "Grounding source");
    }

    let result = assembler.finish().ok_or(GenerationError::EmptyResponse)?;

    if result.search_used {
        tracing::info!(path, grounding_count, "Response generated with web search grounding");
        if !result.has_attributable_links {
            tracing::warn!(path, "No links found in response despite grounding");
        }
    } else {
        tracing::info!(path, "Response generated without web search");
    }

    Ok(result)
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),
    #[error("provider credential is not configured")]
    ConfigurationMissing,
    #[error("empty response from provider")]
    EmptyResponse,
    #[error("provider: {0}")]
    Provider(ProviderError),
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<ProviderError> for GenerationError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::MissingCredential => GenerationError::ConfigurationMissing,
            other => GenerationError::Provider(other),
        }
    }
}
