use std::sync::Arc;

use crate::application::services::GenerationService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(generation_service: Arc<GenerationService>, settings: Settings) -> Self {
        Self {
            generation_service,
            settings: Arc::new(settings),
        }
    }

    pub fn max_segment_length(&self) -> usize {
        self.settings.segmentation.max_segment_length
    }
}
