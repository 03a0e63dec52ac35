mod generation_service;
mod prompt_selector;
mod response_assembler;
mod response_segmenter;

pub use generation_service::{GenerationError, GenerationService};
pub use prompt_selector::{instruction_for, select_prompt};
pub use response_assembler::{ResponseAssembler, contains_attributable_links};
pub use response_segmenter::{DEFAULT_SEGMENT_LENGTH, segment_response};
