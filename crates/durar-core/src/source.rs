//! The `HadithSource` trait — the seam between algorithms and transport.
//!
//! The trait is implemented by the HTTP gateway client (`durar-client`).
//! Higher layers ([`crate::view`], [`crate::search`], the CLI) depend on this
//! abstraction, not on any concrete transport, which also makes the
//! aggregation and paging logic testable against in-memory fakes.

use std::future::Future;

use crate::model::{Book, DataItem, Envelope, Hadith, Mohdith};

// ─── Reference-list categories ───────────────────────────────────────────────

/// The enumerated reference lists served under `/v1/data/{key}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataCategory {
  Book,
  Degree,
  MethodSearch,
  Mohdith,
  Rawi,
  ZoneSearch,
}

impl DataCategory {
  /// The upstream path segment for this category.
  pub fn key(self) -> &'static str {
    match self {
      Self::Book => "book",
      Self::Degree => "degree",
      Self::MethodSearch => "methodSearch",
      Self::Mohdith => "mohdith",
      Self::Rawi => "rawi",
      Self::ZoneSearch => "zoneSearch",
    }
  }

  /// Parse a user-supplied key back into a category.
  pub fn from_key(key: &str) -> Option<Self> {
    match key {
      "book" => Some(Self::Book),
      "degree" => Some(Self::Degree),
      "methodSearch" => Some(Self::MethodSearch),
      "mohdith" => Some(Self::Mohdith),
      "rawi" => Some(Self::Rawi),
      "zoneSearch" => Some(Self::ZoneSearch),
      _ => None,
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the remote hadith repository.
///
/// All methods are read-only GETs upstream. No retry policy lives here;
/// callers decide how a failure degrades (the view aggregator isolates
/// per-branch failures, the pager surfaces them).
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait HadithSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Free-text hadith search, paged.
  fn search_hadiths<'a>(
    &'a self,
    query: &'a str,
    page: u32,
  ) -> impl Future<Output = Result<Envelope<Vec<Hadith>>, Self::Error>> + Send + 'a;

  /// Fetch one hadith by id.
  fn get_hadith<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Hadith>, Self::Error>> + Send + 'a;

  /// Hadiths similar to the one identified by `id`.
  fn get_similar<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Vec<Hadith>>, Self::Error>> + Send + 'a;

  /// The alternate, separately graded sahih hadith for `id`.
  fn get_alternate<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Hadith>, Self::Error>> + Send + 'a;

  /// Commentary record by sharh id. The payload is hadith-shaped with the
  /// resolved text under `sharh_metadata.sharh`.
  fn get_sharh<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Hadith>, Self::Error>> + Send + 'a;

  /// Commentary record matched by hadith text.
  fn get_sharh_by_text<'a>(
    &'a self,
    text: &'a str,
  ) -> impl Future<Output = Result<Envelope<Hadith>, Self::Error>> + Send + 'a;

  /// Free-text commentary search, paged.
  fn search_sharh<'a>(
    &'a self,
    text: &'a str,
    page: u32,
  ) -> impl Future<Output = Result<Envelope<Vec<Hadith>>, Self::Error>> + Send + 'a;

  /// A reporting scholar's profile.
  fn get_mohdith<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Mohdith>, Self::Error>> + Send + 'a;

  /// A source book's profile.
  fn get_book<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Envelope<Book>, Self::Error>> + Send + 'a;

  /// One of the enumerated reference lists. Served as a bare array, not an
  /// [`Envelope`].
  fn get_data_list(
    &self,
    category: DataCategory,
  ) -> impl Future<Output = Result<Vec<DataItem>, Self::Error>> + Send + '_;
}
