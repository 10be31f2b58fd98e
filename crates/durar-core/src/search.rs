//! Search paging over the hadith repository.
//!
//! The upstream's `metadata.length` field is ambiguous by contract — it may
//! mean total results or results on the current page. The pager treats it as
//! a best-effort total-result count and derives an explicitly unreliable page
//! estimate from it. The estimate may overcount or undercount; callers should
//! present it as approximate.

use crate::{
  error::SearchError,
  model::Hadith,
  source::HadithSource,
};

/// Assumed results per page when the current page is empty, to avoid a
/// division by zero in the estimate.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ─── Estimation ──────────────────────────────────────────────────────────────

/// Best-effort page-count estimate: `ceil(total / per_page)`, clamped to a
/// minimum of one page. `results_on_page` doubles as the per-page divisor,
/// falling back to [`DEFAULT_PAGE_SIZE`] when zero.
pub fn estimate_total_pages(total_results: usize, results_on_page: usize) -> u32 {
  let per_page = if results_on_page > 0 { results_on_page } else { DEFAULT_PAGE_SIZE };
  total_results.div_ceil(per_page).max(1) as u32
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of search results plus the derived pagination state.
#[derive(Debug, Clone)]
pub struct SearchPage {
  /// The trimmed query that produced this page.
  pub query: String,
  /// Requested page number (1-based).
  pub page: u32,
  /// Best-effort total-result count; see module docs.
  pub total_results: usize,
  /// Estimated page count; zero when the page came back empty.
  pub total_pages: u32,
  pub hadiths: Vec<Hadith>,
}

impl SearchPage {
  /// An empty page is a valid outcome of a non-empty query, distinct from a
  /// transport failure.
  pub fn is_empty(&self) -> bool {
    self.hadiths.is_empty()
  }
}

/// Run a paged hadith search.
///
/// A blank or whitespace-only query is rejected locally with
/// [`SearchError::EmptyQuery`]; no fetch is issued. Zero results for a valid
/// query succeed with an empty page reporting zero total pages.
pub async fn search_hadiths<S: HadithSource>(
  source: &S,
  query: &str,
  page: u32,
) -> Result<SearchPage, SearchError> {
  let query = query.trim();
  if query.is_empty() {
    return Err(SearchError::EmptyQuery);
  }

  let envelope = source
    .search_hadiths(query, page)
    .await
    .map_err(|e| SearchError::Source(Box::new(e)))?;
  let hadiths = envelope.data;

  // `length` parsed as a total-result count; an absent or unparseable value
  // falls back to the visible page's own item count.
  let total_results = envelope
    .metadata
    .length
    .as_deref()
    .and_then(|s| s.parse::<usize>().ok())
    .unwrap_or(hadiths.len());

  let total_pages = if hadiths.is_empty() {
    0
  } else {
    estimate_total_pages(total_results, hadiths.len())
  };

  Ok(SearchPage {
    query: query.to_owned(),
    page,
    total_results,
    total_pages,
    hadiths,
  })
}

// ─── Session ─────────────────────────────────────────────────────────────────

/// Navigation state over a live search: the current page plus guarded page
/// transitions. Requests outside the estimated range are rejected locally,
/// without a fetch.
#[derive(Debug)]
pub struct SearchSession {
  page: SearchPage,
}

impl SearchSession {
  /// Start a session by running the search for page 1.
  pub async fn start<S: HadithSource>(
    source: &S,
    query: &str,
  ) -> Result<Self, SearchError> {
    let page = search_hadiths(source, query, 1).await?;
    Ok(Self { page })
  }

  pub fn current(&self) -> &SearchPage {
    &self.page
  }

  /// Navigate to `page`, re-running the query. Out-of-range pages fail with
  /// [`SearchError::PageOutOfRange`] before any fetch.
  pub async fn goto<S: HadithSource>(
    &mut self,
    source: &S,
    page: u32,
  ) -> Result<&SearchPage, SearchError> {
    let total = self.page.total_pages;
    if page < 1 || page > total {
      return Err(SearchError::PageOutOfRange { page, total });
    }
    let query = self.page.query.clone();
    self.page = search_hadiths(source, &query, page).await?;
    Ok(&self.page)
  }

  pub async fn next<S: HadithSource>(
    &mut self,
    source: &S,
  ) -> Result<&SearchPage, SearchError> {
    let next = self.page.page + 1;
    self.goto(source, next).await
  }

  pub async fn prev<S: HadithSource>(
    &mut self,
    source: &S,
  ) -> Result<&SearchPage, SearchError> {
    let prev = self.page.page.saturating_sub(1);
    self.goto(source, prev).await
  }
}
