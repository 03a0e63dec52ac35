use std::pin::Pin;

use async_trait::async_trait;
use futures::stream::Stream;

use super::{ProviderError, ProviderOutput, ProviderRequest};

pub type ProviderOutputStream =
    Pin<Box<dyn Stream<Item = Result<ProviderOutput, ProviderError>> + Send + 'static>>;

/// A remote generative model that can answer either in one piece or as a stream of fragments.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderOutput, ProviderError>;

    async fn generate_stream(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderOutputStream, ProviderError>;
}
