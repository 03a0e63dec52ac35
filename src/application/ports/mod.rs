mod generation_provider;
mod provider_error;
mod provider_output;
mod provider_request;

pub use generation_provider::{GenerationProvider, ProviderOutputStream};
pub use provider_error::ProviderError;
pub use provider_output::{GroundingMetadata, GroundingSource, ProviderOutput};
pub use provider_request::ProviderRequest;
