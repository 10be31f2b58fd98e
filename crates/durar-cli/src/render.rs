//! Plain-text rendering of search pages, detail views and AI output.

use durar_ai::{AnalyzeOutput, FlowState, TranslateOutput};
use durar_core::{
  grade,
  model::{DataItem, Hadith},
  search::SearchPage,
  view::HadithView,
};

// ─── Search ──────────────────────────────────────────────────────────────────

pub fn search_page(page: &SearchPage) {
  if page.is_empty() {
    println!("No hadiths found for \"{}\".", page.query);
    return;
  }

  println!(
    "About {} result(s), page {} of ~{}.",
    page.total_results, page.page, page.total_pages
  );
  for hadith in &page.hadiths {
    summary(hadith);
  }
  if page.total_pages > 1 {
    println!("\nThe page count is estimated from ambiguous upstream metadata and may be off.");
  }
}

fn summary(hadith: &Hadith) {
  let class = grade::classify(&hadith.grade);
  println!("\n[{}] {}", hadith.hadith_id.as_deref().unwrap_or("-"), hadith.hadith);
  println!("    {} — {} ({})", hadith.rawi, hadith.book, hadith.number_or_page);
  println!("    grade: {} [{}]", hadith.grade, class.label());
}

pub fn sharh_results(hadiths: &[Hadith]) {
  if hadiths.is_empty() {
    println!("No commentary found.");
    return;
  }
  for hadith in hadiths {
    summary(hadith);
    if let Some(sharh) = hadith.sharh_metadata.as_ref().and_then(|m| m.sharh.as_deref()) {
      println!("    sharh: {sharh}");
    }
  }
}

// ─── Detail view ─────────────────────────────────────────────────────────────

pub fn hadith_view(view: &HadithView) {
  let hadith = &view.hadith;
  let class = grade::classify(&hadith.grade);

  println!("{}", hadith.hadith);
  println!();
  field("rawi", &hadith.rawi);
  field("mohdith", &hadith.mohdith);
  field("book", &hadith.book);
  field("number/page", &hadith.number_or_page);
  println!("  grade:        {} [{}]", hadith.grade, class.label());
  opt_field("grade detail", hadith.explain_grade.as_deref());
  opt_field("takhrij", hadith.takhrij.as_deref());

  if let Some(sharh) = &view.sharh {
    println!("\nSharh:\n{sharh}");
  }

  if let Some(mohdith) = &view.mohdith {
    println!("\nAbout the mohdith ({}):\n{}", mohdith.name, mohdith.info);
  }

  if let Some(book) = &view.book {
    println!("\nAbout the book ({}):", book.name);
    field("author", &book.author);
    opt_field("reviewer", book.reviewer.as_deref());
    opt_field("publisher", book.publisher.as_deref());
    opt_field("edition", book.edition.as_deref());
    opt_field("edition year", book.edition_year.as_deref());
  }

  if !view.similar.is_empty() {
    println!("\nSimilar hadiths:");
    for hadith in &view.similar {
      summary(hadith);
    }
  }

  if let Some(alternate) = &view.alternate {
    println!("\nAlternate sahih hadith:");
    summary(alternate);
  }

  if hadith.similar_hadith_dorar.is_some() || hadith.alternate_hadith_sahih_dorar.is_some() {
    println!();
    opt_field("similar on dorar.net", hadith.similar_hadith_dorar.as_deref());
    opt_field("alternate on dorar.net", hadith.alternate_hadith_sahih_dorar.as_deref());
  }
}

fn field(label: &str, value: &str) {
  println!("  {label}:{}{value}", padding(label));
}

fn opt_field(label: &str, value: Option<&str>) {
  if let Some(value) = value {
    field(label, value);
  }
}

fn padding(label: &str) -> String {
  let width = 13usize.saturating_sub(label.trim_start().chars().count());
  " ".repeat(width.max(1))
}

// ─── Reference lists ─────────────────────────────────────────────────────────

pub fn data_items(items: &[DataItem]) {
  for item in items {
    println!("{}\t{}", item.value, item.key);
  }
}

// ─── AI flows ────────────────────────────────────────────────────────────────

pub fn analysis(state: &FlowState<AnalyzeOutput>) {
  match state {
    FlowState::Succeeded(output) => {
      println!("\nتحليل الدراية:\n{}", output.dirayah_analysis);
      println!("\nتحليل الرواية:\n{}", output.riwayah_analysis);
      println!("\nأسباب الورود:\n{}", output.asbab_al_wurud_analysis);
    }
    FlowState::Failed(message) => println!("Analysis failed: {message}"),
    FlowState::Idle | FlowState::Pending => println!("Analysis did not run."),
  }
}

pub fn translation(state: &FlowState<TranslateOutput>) {
  match state {
    FlowState::Succeeded(output) => println!("\n{}", output.translated_text),
    FlowState::Failed(message) => println!("Translation failed: {message}"),
    FlowState::Idle | FlowState::Pending => println!("Translation did not run."),
  }
}
