//! [`DorarClient`] — the reqwest implementation of [`HadithSource`].

use std::time::Duration;

use reqwest::{Client, Url, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use durar_core::{
  model::{Book, DataItem, Envelope, Hadith, Mohdith},
  source::{DataCategory, HadithSource},
};

use crate::error::ApiError;

/// The fixed upstream origin.
pub const DEFAULT_BASE_URL: &str = "https://dorar-api.ardev.my.id";

/// Query string appended to all hadith/sharh site endpoints so the upstream
/// strips embedded HTML markup.
const REMOVE_HTML: &[(&str, &str)] = &[("removehtml", "true")];

/// Connection settings for the Dorar API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self { base_url: DEFAULT_BASE_URL.to_owned() }
  }
}

/// Typed HTTP client for the Dorar JSON API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. Responses
/// are always fetched fresh; the request headers opt out of any intermediary
/// caching so grades and flags reflect current upstream state.
#[derive(Debug, Clone)]
pub struct DorarClient {
  client: Client,
  base: Url,
}

impl DorarClient {
  pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
    let base = Url::parse(&config.base_url)
      .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
    if base.cannot_be_a_base() {
      return Err(ApiError::InvalidBaseUrl(config.base_url));
    }

    let mut headers = header::HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-store"));
    headers.insert(header::PRAGMA, header::HeaderValue::from_static("no-cache"));

    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .default_headers(headers)
      .build()?;

    Ok(Self { client, base })
  }

  /// Join path segments and query pairs onto the base URL. Segments are
  /// percent-encoded, which matters for the free-text sharh lookup.
  fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
    let mut url = self.base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query);
    }
    url
  }

  /// `GET` the URL and decode a JSON body of type `T`.
  async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
    debug!(%url, "GET");
    let resp = self.client.get(url.clone()).send().await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(ApiError::HttpStatus { status: status.as_u16(), body });
    }

    // The upstream occasionally serves HTML error pages with a success
    // status; those surface below as a decode failure.
    let json_content_type = resp
      .headers()
      .get(header::CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .is_some_and(|v| v.contains("application/json"));
    if !json_content_type {
      warn!(%url, "response content type is not JSON");
    }

    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::InvalidResponse {
      url: url.to_string(),
      detail: format!("{e}; body began with: {}", snippet(&body)),
    })
  }
}

fn snippet(body: &str) -> String {
  body.chars().take(120).collect()
}

// ─── HadithSource ────────────────────────────────────────────────────────────

impl HadithSource for DorarClient {
  type Error = ApiError;

  /// `GET /v1/site/hadith/search?value={q}&page={n}&removehtml=true`
  async fn search_hadiths(&self, query: &str, page: u32) -> Result<Envelope<Vec<Hadith>>, ApiError> {
    let page = page.to_string();
    let url = self.endpoint(
      &["v1", "site", "hadith", "search"],
      &[("value", query), ("page", &page), ("removehtml", "true")],
    );
    self.fetch(url).await
  }

  /// `GET /v1/site/hadith/{id}?removehtml=true`
  async fn get_hadith(&self, id: &str) -> Result<Envelope<Hadith>, ApiError> {
    self.fetch(self.endpoint(&["v1", "site", "hadith", id], REMOVE_HTML)).await
  }

  /// `GET /v1/site/hadith/similar/{id}?removehtml=true`
  async fn get_similar(&self, id: &str) -> Result<Envelope<Vec<Hadith>>, ApiError> {
    self
      .fetch(self.endpoint(&["v1", "site", "hadith", "similar", id], REMOVE_HTML))
      .await
  }

  /// `GET /v1/site/hadith/alternate/{id}?removehtml=true`
  async fn get_alternate(&self, id: &str) -> Result<Envelope<Hadith>, ApiError> {
    self
      .fetch(self.endpoint(&["v1", "site", "hadith", "alternate", id], REMOVE_HTML))
      .await
  }

  /// `GET /v1/site/sharh/{id}?removehtml=true`
  async fn get_sharh(&self, id: &str) -> Result<Envelope<Hadith>, ApiError> {
    self.fetch(self.endpoint(&["v1", "site", "sharh", id], REMOVE_HTML)).await
  }

  /// `GET /v1/site/sharh/text/{text}?removehtml=true`
  async fn get_sharh_by_text(&self, text: &str) -> Result<Envelope<Hadith>, ApiError> {
    self
      .fetch(self.endpoint(&["v1", "site", "sharh", "text", text], REMOVE_HTML))
      .await
  }

  /// `GET /v1/site/sharh/search?value={text}&page={n}&removehtml=true`
  async fn search_sharh(&self, text: &str, page: u32) -> Result<Envelope<Vec<Hadith>>, ApiError> {
    let page = page.to_string();
    let url = self.endpoint(
      &["v1", "site", "sharh", "search"],
      &[("value", text), ("page", &page), ("removehtml", "true")],
    );
    self.fetch(url).await
  }

  /// `GET /v1/site/mohdith/{id}`
  async fn get_mohdith(&self, id: &str) -> Result<Envelope<Mohdith>, ApiError> {
    self.fetch(self.endpoint(&["v1", "site", "mohdith", id], &[])).await
  }

  /// `GET /v1/site/book/{id}`
  async fn get_book(&self, id: &str) -> Result<Envelope<Book>, ApiError> {
    self.fetch(self.endpoint(&["v1", "site", "book", id], &[])).await
  }

  /// `GET /v1/data/{category}` — a bare array, no envelope.
  async fn get_data_list(&self, category: DataCategory) -> Result<Vec<DataItem>, ApiError> {
    self.fetch(self.endpoint(&["v1", "data", category.key()], &[])).await
  }
}
