#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use docsreview::application::ports::{
    GenerationProvider, GroundingMetadata, GroundingSource, ProviderError, ProviderOutput,
    ProviderOutputStream, ProviderRequest,
};

pub enum OneShot {
    Text(&'static str),
    Grounded(&'static str),
    Empty,
    Fail,
    MissingCredential,
    Hang,
}

pub struct FakeProvider {
    one_shot: OneShot,
    fragments: Vec<&'static str>,
    grounded_stream: bool,
    failing_stream: bool,
    one_shot_calls: AtomicUsize,
    stream_calls: AtomicUsize,
    last_request: Mutex<Option<ProviderRequest>>,
}

impl FakeProvider {
    pub fn new(one_shot: OneShot) -> Self {
        Self {
            one_shot,
            fragments: Vec::new(),
            grounded_stream: false,
            failing_stream: false,
            one_shot_calls: AtomicUsize::new(0),
            stream_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_fragments(mut self, fragments: &[&'static str]) -> Self {
        self.fragments = fragments.to_vec();
        self
    }

    pub fn with_grounded_stream(mut self) -> Self {
        self.grounded_stream = true;
        self
    }

    pub fn with_failing_stream(mut self) -> Self {
        self.failing_stream = true;
        self
    }

    pub fn one_shot_calls(&self) -> usize {
        self.one_shot_calls.load(Ordering::SeqCst)
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ProviderRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

pub fn sample_grounding() -> GroundingMetadata {
    GroundingMetadata {
        web_search_queries: vec!["rust async".to_string()],
        sources: vec![GroundingSource {
            uri: Some("https://www.rust-lang.org".to_string()),
            title: Some("rust-lang.org".to_string()),
        }],
    }
}

#[async_trait::async_trait]
impl GenerationProvider for FakeProvider {
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderOutput, ProviderError> {
        self.one_shot_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match self.one_shot {
            OneShot::Text(text) => Ok(ProviderOutput::text(text)),
            OneShot::Grounded(text) => {
                Ok(ProviderOutput::text(text).with_grounding(sample_grounding()))
            }
            OneShot::Empty => Ok(ProviderOutput::default()),
            OneShot::Fail => Err(ProviderError::ApiRequestFailed(
                "HTTP 500 Internal Server Error".to_string(),
            )),
            OneShot::MissingCredential => Err(ProviderError::MissingCredential),
            OneShot::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(ProviderOutput::text("too late"))
            }
        }
    }

    async fn generate_stream(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderOutputStream, ProviderError> {
        self.stream_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        let mut items: Vec<Result<ProviderOutput, ProviderError>> = self
            .fragments
            .iter()
            .enumerate()
            .map(|(i, fragment)| {
                let output = ProviderOutput::text(*fragment);
                if self.grounded_stream && i == 0 {
                    Ok(output.with_grounding(sample_grounding()))
                } else {
                    Ok(output)
                }
            })
            .collect();

        if self.failing_stream {
            items.push(Err(ProviderError::ApiRequestFailed(
                "connection reset".to_string(),
            )));
        }

        Ok(Box::pin(futures::stream::iter(items)))
    }
}
