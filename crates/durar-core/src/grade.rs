//! Heuristic classification of free-text authenticity grades.
//!
//! Upstream grades are free text ("صحيح", "حسن لغيره", "إسناده ضعيف", …) and
//! occasionally transliterated. Classification is ordered substring matching
//! over marker tables; a grade matching an authentic marker wins even when a
//! weaker marker also appears (e.g. "حسن صحيح").

use serde::{Deserialize, Serialize};

/// Coarse authenticity class derived from a free-text grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeClass {
  /// Sahih-like grades.
  Authentic,
  /// Hasan-like grades.
  Intermediate,
  /// Dhaif-like grades.
  Weak,
  /// Nothing recognisable in the grade text.
  Unknown,
}

impl GradeClass {
  /// Short human-readable label for rendering.
  pub fn label(self) -> &'static str {
    match self {
      Self::Authentic => "authentic",
      Self::Intermediate => "hasan",
      Self::Weak => "weak",
      Self::Unknown => "ungraded",
    }
  }
}

// Marker tables, checked in order. Both Arabic script and common
// transliterations, matched against a lowercased copy of the grade.
const AUTHENTIC_MARKERS: &[&str] = &["صحيح", "sahih", "authentic", "good"];
const INTERMEDIATE_MARKERS: &[&str] = &["حسن", "hasan"];
const WEAK_MARKERS: &[&str] = &["ضعيف", "dhaif", "daif", "weak"];

/// Classify a free-text grade. Inherently heuristic; see module docs.
pub fn classify(grade: &str) -> GradeClass {
  let grade = grade.to_lowercase();
  let matches = |markers: &[&str]| markers.iter().any(|m| grade.contains(m));

  if matches(AUTHENTIC_MARKERS) {
    GradeClass::Authentic
  } else if matches(INTERMEDIATE_MARKERS) {
    GradeClass::Intermediate
  } else if matches(WEAK_MARKERS) {
    GradeClass::Weak
  } else {
    GradeClass::Unknown
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn arabic_script_grades() {
    assert_eq!(classify("صحيح"), GradeClass::Authentic);
    assert_eq!(classify("إسناده صحيح"), GradeClass::Authentic);
    assert_eq!(classify("حسن لغيره"), GradeClass::Intermediate);
    assert_eq!(classify("إسناده ضعيف"), GradeClass::Weak);
  }

  #[test]
  fn transliterated_grades() {
    assert_eq!(classify("Sahih"), GradeClass::Authentic);
    assert_eq!(classify("hasan gharib"), GradeClass::Intermediate);
    assert_eq!(classify("Dhaif"), GradeClass::Weak);
    assert_eq!(classify("weak isnad"), GradeClass::Weak);
  }

  #[test]
  fn authentic_outranks_weaker_markers() {
    // "hasan sahih" carries both markers; the ordered check picks authentic.
    assert_eq!(classify("حسن صحيح"), GradeClass::Authentic);
  }

  #[test]
  fn unrecognised_text_is_unknown() {
    assert_eq!(classify(""), GradeClass::Unknown);
    assert_eq!(classify("موضوع"), GradeClass::Unknown);
  }
}
