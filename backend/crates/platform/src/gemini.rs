//! Gemini REST Client
//!
//! Minimal `generateContent` client: one text instruction in, optional
//! text out. No streaming, no history, no structured output.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::secret::ApiKey;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Failures talking to the text-generation service
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Connection, TLS or timeout failure before a response arrived
    #[error("Request to text-generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status (bad key, quota, outage)
    #[error("Text-generation service returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Response body did not match the expected shape
    #[error("Malformed response from text-generation service: {0}")]
    Malformed(String),
}

impl GenerationError {
    /// True when the credential itself was refused
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            GenerationError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED
                    || *status == StatusCode::FORBIDDEN
                    || *status == StatusCode::BAD_REQUEST
        )
    }
}

/// Client for `POST {base_url}/{model}:generateContent`
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), base_url, model)
    }

    /// Reuse a preconfigured `reqwest::Client` (timeouts, proxies)
    pub fn with_http_client(
        http: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Send a single instruction and return the first text part, if any.
    ///
    /// ## Returns
    /// * `Ok(Some(text))` - the service produced text (untrimmed)
    /// * `Ok(None)` - the service answered but with no text part
    /// * `Err(_)` - transport, status or decoding failure
    pub async fn generate_content(
        &self,
        api_key: &ApiKey,
        instruction: &str,
    ) -> Result<Option<String>, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: instruction }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            tracing::debug!(status = %status, model = %self.model, "Text-generation call rejected");
            return Err(GenerationError::Status {
                status,
                message: error_message(&body_text),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GenerateContentResponse = serde_json::from_slice(&bytes)
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        Ok(parsed.first_text())
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Pull a readable message out of Google's `{"error": {...}}` envelope.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope.error.message.unwrap_or_default();
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        }
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::post;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn spawn_fake(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/v1beta/models")
    }

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn test_first_text_skips_textless_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"inlineData": {}}, {"text": "READY"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(parsed.first_text().as_deref(), Some("READY"));
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.first_text().is_none());
    }

    #[test]
    fn test_error_message_from_envelope() {
        let body =
            r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(error_message(body), "INVALID_ARGUMENT: API key not valid.");
        assert_eq!(error_message("plain text"), "plain text");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("http://localhost:1/models/", "m1");
        assert_eq!(client.endpoint(), "http://localhost:1/models/m1:generateContent");
    }

    #[tokio::test]
    async fn test_generate_content_sends_key_and_prompt() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers.get("x-goog-api-key").unwrap(), "test-key");
                let prompt = body["contents"][0]["parts"][0]["text"]
                    .as_str()
                    .unwrap()
                    .to_string();
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("echo: {prompt}")}]}}]
                }))
            }),
        );
        let base = spawn_fake(router).await;
        let client = GeminiClient::new(base, "gemini-test");

        let text = client.generate_content(&key(), "Say READY").await.unwrap();
        assert_eq!(text.as_deref(), Some("echo: Say READY"));
    }

    #[tokio::test]
    async fn test_generate_content_maps_status_errors() {
        let router = Router::new().route(
            "/v1beta/models/{call}",
            post(|| async {
                (
                    AxumStatus::BAD_REQUEST,
                    Json(json!({
                        "error": {"message": "API key not valid.", "status": "INVALID_ARGUMENT"}
                    })),
                )
            }),
        );
        let base = spawn_fake(router).await;
        let client = GeminiClient::new(base, "gemini-test");

        let err = client.generate_content(&key(), "x").await.unwrap_err();
        assert!(err.is_auth_failure());
        assert!(err.to_string().contains("API key not valid."));
    }

    #[tokio::test]
    async fn test_generate_content_malformed_body() {
        let router = Router::new().route("/v1beta/models/{call}", post(|| async { "not json" }));
        let base = spawn_fake(router).await;
        let client = GeminiClient::new(base, "gemini-test");

        let err = client.generate_content(&key(), "x").await.unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
