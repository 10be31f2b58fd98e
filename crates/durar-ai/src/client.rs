//! OpenAI-compatible chat-completions client.
//!
//! Works against any endpoint speaking the `/chat/completions` protocol
//! (OpenAI, vLLM, Ollama, LM Studio). The flows in this crate always request
//! a JSON object response and hand the parsed value back to their typed
//! output schema.

use std::time::Duration;

use reqwest::{Client, header};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AiError;

/// Connection settings for the prompt service.
#[derive(Debug, Clone)]
pub struct AiConfig {
  /// Base URL, e.g. `https://api.openai.com/v1` or a local server.
  pub base_url: String,
  pub model: String,
  pub api_key: Option<String>,
}

impl Default for AiConfig {
  fn default() -> Self {
    Self {
      base_url: "http://localhost:1234/v1".to_owned(),
      model: "qwen/qwen3-8b".to_owned(),
      api_key: None,
    }
  }
}

/// Prompt-service client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct AiClient {
  client: Client,
  config: AiConfig,
}

// ─── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage<'a>>,
  temperature: f32,
  response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
  #[serde(rename = "type")]
  format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
  content: Option<String>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

impl AiClient {
  pub fn new(config: AiConfig) -> Result<Self, AiError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(120))
      .build()?;
    Ok(Self { client, config })
  }

  /// Resolve the chat-completions endpoint from the configured base URL.
  fn endpoint(&self) -> String {
    let base = self.config.base_url.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
      base.to_owned()
    } else {
      format!("{base}/chat/completions")
    }
  }

  /// Run one non-streaming completion and parse the model's reply as a JSON
  /// object. An empty or unparseable reply is [`AiError::EmptyModelOutput`].
  pub async fn complete_json(
    &self,
    system: &str,
    user: &str,
  ) -> Result<serde_json::Value, AiError> {
    let body = ChatRequest {
      model: &self.config.model,
      messages: vec![
        ChatMessage { role: "system", content: system },
        ChatMessage { role: "user", content: user },
      ],
      temperature: 0.2,
      response_format: ResponseFormat { format_type: "json_object" },
    };

    let mut request = self.client.post(self.endpoint()).json(&body);
    if let Some(key) = &self.config.api_key {
      request = request.header(header::AUTHORIZATION, format!("Bearer {key}"));
    }

    debug!(model = %self.config.model, "prompt service request");
    let resp = request.send().await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(AiError::RequestFailed { status: status.as_u16(), body });
    }

    let chat: ChatResponse = resp
      .json()
      .await
      .map_err(|e| AiError::InvalidResponse(e.to_string()))?;

    let content = chat
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .unwrap_or_default();
    if content.trim().is_empty() {
      return Err(AiError::EmptyModelOutput);
    }

    serde_json::from_str(&content).map_err(|_| AiError::EmptyModelOutput)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
  };

  use super::*;

  fn config_for(server: &MockServer) -> AiConfig {
    AiConfig {
      base_url: server.uri(),
      model: "test-model".into(),
      api_key: None,
    }
  }

  #[tokio::test]
  async fn parses_json_object_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "content": "{\"translatedText\": \"Amal itu tergantung niatnya\"}" } }]
      })))
      .mount(&server)
      .await;

    let client = AiClient::new(config_for(&server)).unwrap();
    let value = client.complete_json("sys", "user").await.unwrap();
    assert_eq!(value["translatedText"], "Amal itu tergantung niatnya");
  }

  #[tokio::test]
  async fn empty_content_is_empty_model_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "content": null } }]
      })))
      .mount(&server)
      .await;

    let client = AiClient::new(config_for(&server)).unwrap();
    let err = client.complete_json("sys", "user").await.unwrap_err();
    assert!(matches!(err, AiError::EmptyModelOutput));
  }

  #[tokio::test]
  async fn non_json_content_is_empty_model_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "content": "sorry, I cannot help with that" } }]
      })))
      .mount(&server)
      .await;

    let client = AiClient::new(config_for(&server)).unwrap();
    let err = client.complete_json("sys", "user").await.unwrap_err();
    assert!(matches!(err, AiError::EmptyModelOutput));
  }

  #[tokio::test]
  async fn error_status_carries_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/chat/completions"))
      .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
      .mount(&server)
      .await;

    let client = AiClient::new(config_for(&server)).unwrap();
    let err = client.complete_json("sys", "user").await.unwrap_err();
    match err {
      AiError::RequestFailed { status, body } => {
        assert_eq!(status, 429);
        assert_eq!(body, "slow down");
      }
      other => panic!("expected RequestFailed, got {other:?}"),
    }
  }
}
