use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use futures::stream::StreamExt;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use docsreview::application::ports::{GenerationProvider, ProviderError, ProviderRequest};
use docsreview::infrastructure::llm::GeminiClient;

const TEST_MODEL: &str = "gemini-test";
const TEST_API_KEY: &str = "test-key";

#[derive(Clone)]
struct MockGemini {
    status: StatusCode,
    one_shot_body: Value,
    sse_chunks: Vec<&'static str>,
    captured: Arc<Mutex<Vec<Captured>>>,
}

#[derive(Debug, Clone)]
struct Captured {
    action: String,
    api_key: Option<String>,
    body: Value,
}

impl MockGemini {
    fn new(one_shot_body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            one_shot_body,
            sse_chunks: Vec::new(),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    fn with_sse_chunks(mut self, chunks: &[&'static str]) -> Self {
        self.sse_chunks = chunks.to_vec();
        self
    }
}

async fn handle(
    State(mock): State<MockGemini>,
    Path(action): Path<String>,
    headers: HeaderMap,
    body: axum::Json<Value>,
) -> Response {
    mock.captured.lock().unwrap().push(Captured {
        action: action.clone(),
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: body.0,
    });

    if mock.status != StatusCode::OK {
        return (mock.status, "upstream failure").into_response();
    }

    if action.ends_with(":streamGenerateContent") {
        let chunks = mock
            .sse_chunks
            .iter()
            .map(|chunk| Ok::<_, Infallible>(chunk.to_string()))
            .collect::<Vec<_>>();
        return (
            [(axum::http::header::CONTENT_TYPE, "text/event-stream")],
            Body::from_stream(futures::stream::iter(chunks)),
        )
            .into_response();
    }

    axum::Json(mock.one_shot_body.clone()).into_response()
}

async fn start_mock_gemini_server(mock: MockGemini) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new()
        .route("/v1beta/models/{action}", post(handle))
        .with_state(mock);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/v1beta", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn provider_request(enable_search: bool) -> ProviderRequest {
    ProviderRequest {
        system_instruction: "You are a reviewer.".to_string(),
        user_content: "Please review this.".to_string(),
        enable_search,
    }
}

fn client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url(
        TEST_API_KEY.to_string(),
        TEST_MODEL.to_string(),
        base_url,
    )
}

#[tokio::test]
async fn given_grounded_response_when_generating_then_returns_text_and_sources() {
    let mock = MockGemini::new(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": "Rust is " }, { "text": "fast." }] },
            "groundingMetadata": {
                "webSearchQueries": ["rust language"],
                "groundingChunks": [{ "web": { "uri": "https://www.rust-lang.org", "title": "Rust" } }]
            }
        }]
    }));
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let output = client(&base_url)
        .generate(&provider_request(true))
        .await
        .unwrap();

    assert_eq!(output.text, "Rust is fast.");
    let grounding = output.grounding.unwrap();
    assert_eq!(grounding.web_search_queries, vec!["rust language"]);
    assert_eq!(
        grounding.sources[0].uri.as_deref(),
        Some("https://www.rust-lang.org")
    );
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_response_without_grounding_when_generating_then_grounding_is_none() {
    let mock = MockGemini::new(json!({
        "candidates": [{ "content": { "parts": [{ "text": "Plain." }] } }]
    }));
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let output = client(&base_url)
        .generate(&provider_request(true))
        .await
        .unwrap();

    assert_eq!(output.text, "Plain.");
    assert!(output.grounding.is_none());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_thought_parts_when_generating_then_skips_them() {
    let mock = MockGemini::new(json!({
        "candidates": [{ "content": { "parts": [
            { "text": "thinking...", "thought": true },
            { "text": "Answer." }
        ] } }]
    }));
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let output = client(&base_url)
        .generate(&provider_request(true))
        .await
        .unwrap();

    assert_eq!(output.text, "Answer.");
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_no_candidates_when_generating_then_returns_empty_text() {
    let mock = MockGemini::new(json!({ "candidates": [] }));
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let output = client(&base_url)
        .generate(&provider_request(true))
        .await
        .unwrap();

    assert!(output.text.is_empty());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_request_when_generating_then_sends_instruction_search_tool_and_key() {
    let mock = MockGemini::new(json!({
        "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
    }));
    let captured = Arc::clone(&mock.captured);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    client(&base_url)
        .generate(&provider_request(true))
        .await
        .unwrap();

    let captured = captured.lock().unwrap().clone();
    assert_eq!(captured.len(), 1);
    let request = &captured[0];
    assert_eq!(request.action, "gemini-test:generateContent");
    assert_eq!(request.api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(
        request.body["systemInstruction"]["parts"][0]["text"],
        "You are a reviewer."
    );
    assert_eq!(request.body["contents"][0]["role"], "user");
    assert_eq!(
        request.body["contents"][0]["parts"][0]["text"],
        "Please review this."
    );
    assert!(request.body["tools"][0]["google_search"].is_object());
    assert_eq!(
        request.body["generationConfig"]["responseMimeType"],
        "text/plain"
    );
    assert_eq!(
        request.body["generationConfig"]["thinkingConfig"]["thinkingBudget"],
        -1
    );
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_search_disabled_when_generating_then_omits_tools() {
    let mock = MockGemini::new(json!({
        "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
    }));
    let captured = Arc::clone(&mock.captured);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    client(&base_url)
        .generate(&provider_request(false))
        .await
        .unwrap();

    let captured = captured.lock().unwrap().clone();
    assert!(captured[0].body.get("tools").is_none());
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_generating_then_returns_rate_limited() {
    let mock = MockGemini::new(json!({})).with_status(StatusCode::TOO_MANY_REQUESTS);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let result = client(&base_url).generate(&provider_request(true)).await;

    assert!(matches!(result, Err(ProviderError::RateLimited)));
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_generating_then_returns_api_request_failed() {
    let mock = MockGemini::new(json!({})).with_status(StatusCode::INTERNAL_SERVER_ERROR);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let result = client(&base_url).generate(&provider_request(true)).await;

    match result {
        Err(ProviderError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream failure"));
        }
        other => panic!("expected ApiRequestFailed, got {:?}", other.map(|o| o.text)),
    }
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_empty_api_key_when_generating_then_returns_missing_credential() {
    let client = GeminiClient::with_base_url(
        String::new(),
        TEST_MODEL.to_string(),
        "http://127.0.0.1:9/v1beta",
    );

    let result = client.generate(&provider_request(true)).await;

    assert!(matches!(result, Err(ProviderError::MissingCredential)));
}

#[tokio::test]
async fn given_empty_api_key_when_streaming_then_returns_missing_credential() {
    let client = GeminiClient::new("  ".to_string(), TEST_MODEL.to_string());

    let result = client.generate_stream(&provider_request(true)).await;

    assert!(matches!(result, Err(ProviderError::MissingCredential)));
}

#[tokio::test]
async fn given_sse_stream_when_streaming_then_yields_fragments_in_order() {
    let mock = MockGemini::new(json!({})).with_sse_chunks(&[
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"Hel\"}]}}]}\r\n\r\n",
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"lo\"}]},",
        "\"groundingMetadata\":{\"webSearchQueries\":[\"greeting\"]}}]}\r\n\r\n",
    ]);
    let captured = Arc::clone(&mock.captured);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let stream = client(&base_url)
        .generate_stream(&provider_request(true))
        .await
        .unwrap();
    let outputs: Vec<_> = stream.collect().await;

    assert_eq!(outputs.len(), 2);
    let first = outputs[0].as_ref().unwrap();
    let second = outputs[1].as_ref().unwrap();
    assert_eq!(first.text, "Hel");
    assert!(first.grounding.is_none());
    assert_eq!(second.text, "lo");
    assert!(second.grounding.is_some());
    assert_eq!(
        captured.lock().unwrap()[0].action,
        "gemini-test:streamGenerateContent"
    );
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_multibyte_text_split_across_chunks_when_streaming_then_decodes_it() {
    let mock = MockGemini::new(json!({})).with_sse_chunks(&[
        "data: {\"candidates\":[{\"content\":{\"parts\":[{\"text\":\"文章",
        "を確認しました。\"}]}}]}\n\n",
    ]);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let stream = client(&base_url)
        .generate_stream(&provider_request(true))
        .await
        .unwrap();
    let outputs: Vec<_> = stream.collect().await;

    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].as_ref().unwrap().text, "文章を確認しました。");
    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_malformed_event_when_streaming_then_yields_invalid_response() {
    let mock = MockGemini::new(json!({})).with_sse_chunks(&["data: {not json}\n\n"]);
    let (base_url, shutdown) = start_mock_gemini_server(mock).await;

    let stream = client(&base_url)
        .generate_stream(&provider_request(true))
        .await
        .unwrap();
    let outputs: Vec<_> = stream.collect().await;

    assert!(matches!(
        outputs.as_slice(),
        [Err(ProviderError::InvalidResponse(_))]
    ));
    shutdown.send(()).ok();
}
