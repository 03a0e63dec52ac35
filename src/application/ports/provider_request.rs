#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRequest {
    pub system_instruction: String,
    pub user_content: String,
    pub enable_search: bool,
}
