/// Final text produced for a request, plus what could be observed about how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub text: String,
    /// The provider reported grounding metadata, i.e. live web search informed the answer.
    pub search_used: bool,
    /// The text looks like it cites at least one link.
    pub has_attributable_links: bool,
}
