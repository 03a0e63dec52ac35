use crate::application::ports::{GroundingSource, ProviderOutput};
use crate::domain::GenerationResult;

const LINK_INDICATORS: [&str; 6] = ["http://", "https://", ".com", ".org", ".net", ".jp"];

/// Heuristic check for links or domain names in generated text.
///
/// Substring matching only, so "example.com" and "dot.net" both count.
pub fn contains_attributable_links(text: &str) -> bool {
    LINK_INDICATORS
        .iter()
        .any(|indicator| text.contains(indicator))
}

/// Collects provider output, one-shot or streamed, into a single result.
#[derive(Debug, Default)]
pub struct ResponseAssembler {
    text: String,
    grounding_count: usize,
    sources: Vec<GroundingSource>,
}

impl ResponseAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, output: ProviderOutput) {
        self.text.push_str(&output.text);
        if let Some(grounding) = output.grounding {
            self.grounding_count += 1;
            self.sources.extend(grounding.sources);
        }
    }

    pub fn grounding_count(&self) -> usize {
        self.grounding_count
    }

    pub fn sources(&self) -> &[GroundingSource] {
        &self.sources
    }

    /// Returns `None` when no text was produced.
    pub fn finish(self) -> Option<GenerationResult> {
        if self.text.is_empty() {
            return None;
        }

        let has_attributable_links = contains_attributable_links(&self.text);
        Some(GenerationResult {
            search_used: self.grounding_count > 0,
            has_attributable_links,
            text: self.text,
        })
    }
}
