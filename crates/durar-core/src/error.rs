//! Error types for `durar-core`.

use thiserror::Error;

/// Failure of detail-view materialisation. The primary fetch is the only
/// load-bearing call; everything else degrades in place (see [`crate::view`]).
#[derive(Debug, Error)]
pub enum ViewError {
  #[error("hadith not found: {0}")]
  NotFound(String),
}

/// Failure of a search-pager operation.
#[derive(Debug, Error)]
pub enum SearchError {
  /// The query was empty or whitespace-only; rejected before any fetch.
  #[error("search query is empty")]
  EmptyQuery,

  /// Requested page is outside the estimated range; rejected locally.
  #[error("page {page} is outside the estimated range 1..={total}")]
  PageOutOfRange { page: u32, total: u32 },

  /// The underlying source failed.
  #[error("search request failed: {0}")]
  Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}
