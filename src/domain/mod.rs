mod generation_request;
mod generation_result;
mod processing_mode;

pub use generation_request::GenerationRequest;
pub use generation_result::GenerationResult;
pub use processing_mode::{InvalidModeError, ProcessingMode};
