/// One-shot result or a single streamed fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOutput {
    pub text: String,
    pub grounding: Option<GroundingMetadata>,
}

impl ProviderOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grounding: None,
        }
    }

    pub fn with_grounding(mut self, grounding: GroundingMetadata) -> Self {
        self.grounding = Some(grounding);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingMetadata {
    pub web_search_queries: Vec<String>,
    pub sources: Vec<GroundingSource>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingSource {
    pub uri: Option<String>,
    pub title: Option<String>,
}
