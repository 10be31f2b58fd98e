//! Error type for the prompt-service client and flows.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
  /// Network-level failure talking to the prompt service.
  #[error("AI request failed: {0}")]
  Network(#[from] reqwest::Error),

  /// The service answered with a non-success status.
  #[error("AI service returned HTTP {status}: {body}")]
  RequestFailed { status: u16, body: String },

  /// The chat-completion envelope itself could not be decoded.
  #[error("AI response could not be decoded: {0}")]
  InvalidResponse(String),

  /// The model produced no usable payload — no choices, empty content, or
  /// content that does not parse as the requested output object.
  #[error("AI service returned no usable output")]
  EmptyModelOutput,
}
