use crate::application::ports::{
    GenerationProvider, ProviderError, ProviderOutput, ProviderOutputStream, ProviderRequest,
};

/// Offline provider for local runs without a credential.
pub struct MockGenerationProvider;

impl MockGenerationProvider {
    fn answer(request: &ProviderRequest) -> String {
        format!(
            "Mock response. Received {} characters of content.",
            request.user_content.chars().count()
        )
    }
}

#[async_trait::async_trait]
impl GenerationProvider for MockGenerationProvider {
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderOutput, ProviderError> {
        Ok(ProviderOutput::text(Self::answer(request)))
    }

    async fn generate_stream(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderOutputStream, ProviderError> {
        let answer = Self::answer(request);
        Ok(Box::pin(futures::stream::once(async move {
            Ok(ProviderOutput::text(answer))
        })))
    }
}
