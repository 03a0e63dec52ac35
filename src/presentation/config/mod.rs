mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LlmProvider, LlmSettings, LoggingSettings, SegmentationSettings, ServerSettings, Settings,
    SettingsError,
};
