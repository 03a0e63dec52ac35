#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider credential is not configured")]
    MissingCredential,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
