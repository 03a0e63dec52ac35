use config::{Config, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub segmentation: SegmentationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub enable_search: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SegmentationSettings {
    pub max_segment_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    /// Layers defaults, `appsettings.{environment}`, `APP__*` variables and the
    /// `GEMINI_API_KEY` / `GEMINI_MODEL` variables, in increasing priority.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.cors_allowed_origins", vec!["http://localhost:5173"])?
            .set_default("llm.provider", "gemini")?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gemini-2.5-flash")?
            .set_default(
                "llm.base_url",
                crate::infrastructure::llm::DEFAULT_GEMINI_BASE_URL,
            )?
            .set_default("llm.request_timeout_seconds", 120)?
            .set_default("llm.enable_search", true)?
            .set_default(
                "segmentation.max_segment_length",
                crate::application::services::DEFAULT_SEGMENT_LENGTH as u64,
            )?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins")
                    .try_parsing(true),
            )
            .set_override_option("llm.api_key", std::env::var("GEMINI_API_KEY").ok())?
            .set_override_option("llm.model", std::env::var("GEMINI_MODEL").ok())?
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
