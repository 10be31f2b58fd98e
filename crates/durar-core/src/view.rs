//! Detail-view materialisation — one primary fetch plus up to five isolated
//! dependent fetches, merged into a [`HadithView`].
//!
//! The primary hadith is load-bearing: without it there is no view. Every
//! dependent enrichment is best-effort because the upstream's relational data
//! is sparse and unreliable; a missing commentary or scholar profile must not
//! block the text a user came to read. Dependent failures are logged and
//! degrade in place, never propagated.

use tracing::{debug, warn};

use crate::{
  error::ViewError,
  model::{Book, Hadith, Mohdith},
  source::HadithSource,
};

/// Shown in place of commentary when the sharh fetch itself fails, so a
/// flagged-but-unloadable commentary is reported rather than hidden.
pub const SHARH_UNAVAILABLE: &str = "تعذر تحميل الشرح.";

// ─── View ────────────────────────────────────────────────────────────────────

/// The composed read model for a hadith detail page — never stored, built
/// fresh per view and discarded on navigation.
#[derive(Debug, Clone)]
pub struct HadithView {
  pub hadith: Hadith,
  /// Resolved commentary text, [`SHARH_UNAVAILABLE`] on fetch failure, or
  /// `None` when the record carries no fetchable commentary reference.
  pub sharh: Option<String>,
  /// Similar hadiths in upstream order; empty when unflagged or failed.
  pub similar: Vec<Hadith>,
  /// The alternate sahih hadith, when flagged and resolvable.
  pub alternate: Option<Hadith>,
  /// Reporting-scholar profile, when the record carries a mohdith id.
  pub mohdith: Option<Mohdith>,
  /// Source-book profile, when the record carries a book id.
  pub book: Option<Book>,
}

// ─── Materialisation ─────────────────────────────────────────────────────────

/// Build the full detail view for the hadith identified by `id`.
///
/// Fails only when the primary fetch fails; in that case no dependent fetch
/// is attempted. The five dependent fetches are independent of one another
/// and run concurrently; each is gated on its corresponding id/flag and
/// degrades locally on failure (see field docs on [`HadithView`]).
pub async fn materialize_view<S: HadithSource>(
  source: &S,
  id: &str,
) -> Result<HadithView, ViewError> {
  let hadith = match source.get_hadith(id).await {
    Ok(envelope) => envelope.data,
    Err(e) => {
      debug!(hadith_id = %id, error = %e, "primary hadith fetch failed");
      return Err(ViewError::NotFound(id.to_owned()));
    }
  };

  let (sharh, similar, alternate, mohdith, book) = tokio::join!(
    fetch_sharh(source, &hadith),
    fetch_similar(source, &hadith),
    fetch_alternate(source, &hadith),
    fetch_mohdith(source, &hadith),
    fetch_book(source, &hadith),
  );

  Ok(HadithView { hadith, sharh, similar, alternate, mohdith, book })
}

async fn fetch_sharh<S: HadithSource>(source: &S, hadith: &Hadith) -> Option<String> {
  let meta = hadith.sharh_metadata.as_ref()?;
  if !meta.is_fetchable() {
    return None;
  }
  match source.get_sharh(&meta.id).await {
    Ok(envelope) => envelope.data.sharh_metadata.and_then(|m| m.sharh),
    Err(e) => {
      warn!(sharh_id = %meta.id, error = %e, "sharh fetch failed");
      Some(SHARH_UNAVAILABLE.to_owned())
    }
  }
}

async fn fetch_similar<S: HadithSource>(source: &S, hadith: &Hadith) -> Vec<Hadith> {
  if !hadith.has_similar() {
    return Vec::new();
  }
  let Some(id) = hadith.hadith_id.as_deref() else {
    return Vec::new();
  };
  match source.get_similar(id).await {
    Ok(envelope) => envelope.data,
    Err(e) => {
      warn!(hadith_id = %id, error = %e, "similar hadiths fetch failed");
      Vec::new()
    }
  }
}

async fn fetch_alternate<S: HadithSource>(source: &S, hadith: &Hadith) -> Option<Hadith> {
  if !hadith.has_alternate() {
    return None;
  }
  let id = hadith.hadith_id.as_deref()?;
  match source.get_alternate(id).await {
    Ok(envelope) => Some(envelope.data),
    Err(e) => {
      warn!(hadith_id = %id, error = %e, "alternate hadith fetch failed");
      None
    }
  }
}

async fn fetch_mohdith<S: HadithSource>(source: &S, hadith: &Hadith) -> Option<Mohdith> {
  let id = hadith.mohdith_id.as_deref()?;
  match source.get_mohdith(id).await {
    Ok(envelope) => Some(envelope.data),
    Err(e) => {
      warn!(mohdith_id = %id, error = %e, "mohdith profile fetch failed");
      None
    }
  }
}

async fn fetch_book<S: HadithSource>(source: &S, hadith: &Hadith) -> Option<Book> {
  let id = hadith.book_id.as_deref()?;
  match source.get_book(id).await {
    Ok(envelope) => Some(envelope.data),
    Err(e) => {
      warn!(book_id = %id, error = %e, "book profile fetch failed");
      None
    }
  }
}
