use super::{InvalidModeError, ProcessingMode};

/// A single document submitted for processing.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub content: String,
    pub mode: ProcessingMode,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>, mode: ProcessingMode) -> Self {
        Self {
            content: content.into(),
            mode,
        }
    }

    /// Builds a request from the raw `ai_mode` tag received over the wire.
    pub fn parse(content: impl Into<String>, ai_mode: &str) -> Result<Self, InvalidModeError> {
        Ok(Self::new(content, ai_mode.parse()?))
    }
}
