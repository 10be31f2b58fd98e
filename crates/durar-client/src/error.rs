//! The gateway-client error taxonomy.

use thiserror::Error;

/// An error from the Dorar API gateway client.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The configured base URL could not be used as a request base.
  #[error("invalid API base URL: {0}")]
  InvalidBaseUrl(String),

  /// Network-level failure: DNS, timeout, connection reset, TLS.
  #[error("network error: {0}")]
  Network(#[from] reqwest::Error),

  /// The upstream answered with a non-success status.
  #[error("HTTP {status} from upstream: {body}")]
  HttpStatus { status: u16, body: String },

  /// The body was not the JSON shape we expect (including non-JSON error
  /// pages served with a success status).
  #[error("invalid response from {url}: {detail}")]
  InvalidResponse { url: String, detail: String },
}
