//! Upstream data model — the JSON shapes the Dorar API serves.
//!
//! Field names on the wire are camelCase and nearly everything is optional;
//! the upstream's relational fields are sparse and its "booleans" are the
//! strings `"true"` / `"false"`. Records are immutable once fetched.

use serde::{Deserialize, Serialize};

// ─── Envelope ────────────────────────────────────────────────────────────────

/// Pagination / caching metadata attached to every site-endpoint response.
///
/// `length` is ambiguous by upstream contract: it may be the total result
/// count or the per-page count. See [`crate::search`] for how it is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
  pub length: Option<String>,
  pub page: Option<String>,
  #[serde(rename = "removeHTML")]
  pub remove_html: Option<String>,
  pub specialist: Option<String>,
  pub number_of_non_specialist: Option<String>,
  pub number_of_specialist: Option<String>,
  pub is_cached: Option<String>,
}

/// The `{ metadata, data }` wrapper around all site-endpoint payloads.
/// The reference-list endpoints return a bare array instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
  #[serde(default)]
  pub metadata: Metadata,
  pub data: T,
}

// ─── Hadith ──────────────────────────────────────────────────────────────────

/// A single narrated text unit with its provenance metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hadith {
  /// The hadith text itself.
  pub hadith: String,
  /// Narrator (rawi) credited with transmitting the hadith.
  pub rawi: String,
  /// Reporting scholar (mohdith) who compiled or graded it.
  pub mohdith: String,
  pub mohdith_id: Option<String>,
  /// Source book the hadith is published in.
  pub book: String,
  pub book_id: Option<String>,
  /// Hadith number or page, depending on the book's convention.
  pub number_or_page: String,
  /// Free-text authenticity grade; classified by [`crate::grade`].
  pub grade: String,
  pub explain_grade: Option<String>,
  /// Cross-references to the hadith in other collections (takhrij).
  pub takhrij: Option<String>,
  /// Upstream identifier, used for the similar/alternate lookups.
  pub hadith_id: Option<String>,
  /// String flag: `"true"` when similar hadiths exist upstream.
  pub has_similar_hadith: Option<String>,
  /// String flag: `"true"` when a separately graded sahih substitute exists.
  pub has_alternate_hadith_sahih: Option<String>,
  /// Outbound link to the similar hadiths on dorar.net.
  pub similar_hadith_dorar: Option<String>,
  /// Outbound link to the alternate sahih hadith on dorar.net.
  pub alternate_hadith_sahih_dorar: Option<String>,
  pub url_to_get_similar_hadith: Option<String>,
  pub url_to_get_alternate_hadith_sahih: Option<String>,
  pub has_sharh_metadata: Option<String>,
  pub sharh_metadata: Option<SharhMetadata>,
}

impl Hadith {
  /// Whether the upstream flags similar hadiths as available.
  /// Anything other than exactly `"true"` counts as absent.
  pub fn has_similar(&self) -> bool {
    self.has_similar_hadith.as_deref() == Some("true")
  }

  /// Whether the upstream flags an alternate sahih hadith as available.
  pub fn has_alternate(&self) -> bool {
    self.has_alternate_hadith_sahih.as_deref() == Some("true")
  }
}

/// Commentary (sharh) reference nested inside a [`Hadith`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SharhMetadata {
  pub id: String,
  /// String flag: `"true"` when the referenced record carries commentary.
  pub is_contain_sharh: String,
  pub url_to_get_sharh: String,
  /// The resolved commentary text, present only on a sharh-endpoint response.
  pub sharh: Option<String>,
}

impl SharhMetadata {
  /// Whether this reference is complete enough to fetch: a truthy presence
  /// flag, a non-empty id, and a non-empty fetch URL.
  pub fn is_fetchable(&self) -> bool {
    self.is_contain_sharh == "true"
      && !self.id.is_empty()
      && !self.url_to_get_sharh.is_empty()
  }
}

// ─── Profiles ────────────────────────────────────────────────────────────────

/// A reporting scholar's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Mohdith {
  pub name: String,
  pub mohdith_id: String,
  /// Free-text biography.
  pub info: String,
}

/// A source book's profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
  pub name: String,
  pub book_id: String,
  pub author: String,
  pub reviewer: Option<String>,
  pub publisher: Option<String>,
  pub edition: Option<String>,
  pub edition_year: Option<String>,
}

// ─── Reference lists ─────────────────────────────────────────────────────────

/// One entry of a `/v1/data/*` reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataItem {
  pub key: String,
  pub value: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flag_helpers_require_exact_true() {
    let mut h = Hadith {
      has_similar_hadith: Some("true".into()),
      has_alternate_hadith_sahih: Some("false".into()),
      ..Hadith::default()
    };
    assert!(h.has_similar());
    assert!(!h.has_alternate());

    h.has_similar_hadith = Some("True".into());
    assert!(!h.has_similar());
    h.has_similar_hadith = None;
    assert!(!h.has_similar());
  }

  #[test]
  fn sharh_metadata_fetchable_needs_all_three_fields() {
    let complete = SharhMetadata {
      id: "4870".into(),
      is_contain_sharh: "true".into(),
      url_to_get_sharh: "/v1/site/sharh/4870".into(),
      sharh: None,
    };
    assert!(complete.is_fetchable());

    assert!(!SharhMetadata { id: String::new(), ..complete.clone() }.is_fetchable());
    assert!(
      !SharhMetadata { is_contain_sharh: "false".into(), ..complete.clone() }.is_fetchable()
    );
    assert!(
      !SharhMetadata { url_to_get_sharh: String::new(), ..complete }.is_fetchable()
    );
  }

  #[test]
  fn envelope_tolerates_unknown_and_missing_metadata() {
    let json = r#"{
      "metadata": { "length": "10", "isCached": "true", "someFutureField": 3 },
      "data": [{ "hadith": "إنما الأعمال بالنيات", "rawi": "عمر بن الخطاب" }]
    }"#;
    let envelope: Envelope<Vec<Hadith>> = serde_json::from_str(json).unwrap();
    assert_eq!(envelope.metadata.length.as_deref(), Some("10"));
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.data[0].rawi, "عمر بن الخطاب");

    // `metadata` absent entirely is also fine.
    let bare: Envelope<Vec<Hadith>> = serde_json::from_str(r#"{ "data": [] }"#).unwrap();
    assert!(bare.metadata.length.is_none());
  }
}
