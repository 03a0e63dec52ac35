use async_trait::async_trait;
use futures::stream::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    GenerationProvider, GroundingMetadata, GroundingSource, ProviderError, ProviderOutput,
    ProviderOutputStream, ProviderRequest,
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST adapter (`generateContent` and `streamGenerateContent` over SSE).
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    /// -1 lets the model pick its own budget.
    thinking_budget: i32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<WireGroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGroundingMetadata {
    #[serde(default)]
    web_search_queries: Vec<String>,
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    #[serde(default)]
    web: Option<WebSource>,
}

#[derive(Deserialize)]
struct WebSource {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl GenerateContentResponse {
    fn into_output(self) -> ProviderOutput {
        let mut candidates = self.candidates.into_iter();
        let Some(first) = candidates.next() else {
            return ProviderOutput::default();
        };

        let text = first
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter(|part| !part.thought)
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let grounding = first
            .grounding_metadata
            .or_else(|| candidates.find_map(|candidate| candidate.grounding_metadata))
            .map(|metadata| GroundingMetadata {
                web_search_queries: metadata.web_search_queries,
                sources: metadata
                    .grounding_chunks
                    .into_iter()
                    .filter_map(|chunk| chunk.web)
                    .map(|web| GroundingSource {
                        uri: web.uri,
                        title: web.title,
                    })
                    .collect(),
            });

        ProviderOutput { text, grounding }
    }
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(api_key: String, model: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
        }
    }

    fn build_request(&self, request: &ProviderRequest) -> GenerateContentRequest {
        let tools = if request.enable_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: request.user_content.clone(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: request.system_instruction.clone(),
                }],
            },
            tools,
            generation_config: GenerationConfig {
                response_mime_type: "text/plain".to_string(),
                thinking_config: ThinkingConfig {
                    thinking_budget: -1,
                },
            },
        }
    }

    async fn post(
        &self,
        url: String,
        request: &ProviderRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::MissingCredential);
        }

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.build_request(request))
            .send()
            .await
            .map_err(|e| ProviderError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl GenerationProvider for GeminiClient {
    async fn generate(&self, request: &ProviderRequest) -> Result<ProviderOutput, ProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let response = self.post(url, request).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Ok(body.into_output())
    }

    async fn generate_stream(
        &self,
        request: &ProviderRequest,
    ) -> Result<ProviderOutputStream, ProviderError> {
        let url = format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, self.model
        );
        let response = self.post(url, request).await?;

        let stream = async_stream::stream! {
            let mut bytes = response.bytes_stream();
            let mut buffer: Vec<u8> = Vec::new();

            while let Some(chunk) = bytes.next().await {
                match chunk {
                    Ok(chunk) => buffer.extend_from_slice(&chunk),
                    Err(e) => {
                        yield Err(ProviderError::ApiRequestFailed(e.to_string()));
                        return;
                    }
                }

                // Events can straddle network chunks, so only complete lines are parsed.
                while let Some(newline) = buffer.iter().position(|b| *b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=newline).collect();
                    if let Some(item) = parse_sse_line(&line) {
                        yield item;
                    }
                }
            }

            if let Some(item) = parse_sse_line(&buffer) {
                yield item;
            }
        };

        Ok(Box::pin(stream))
    }
}

fn parse_sse_line(line: &[u8]) -> Option<Result<ProviderOutput, ProviderError>> {
    let line = String::from_utf8_lossy(line);
    let data = line.trim().strip_prefix("data:")?.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }

    Some(
        serde_json::from_str::<GenerateContentResponse>(data)
            .map(GenerateContentResponse::into_output)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string())),
    )
}
