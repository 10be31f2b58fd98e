//! The two augmentation flows: scholarly analysis and translation.
//!
//! Each flow sends the present input fields to the prompt service and expects
//! a JSON object matching its output schema. Absent optional inputs are
//! omitted from the prompt entirely, never sent as empty strings.

use serde::{Deserialize, Serialize};

use crate::{client::AiClient, error::AiError};

// ─── Analysis ────────────────────────────────────────────────────────────────

/// Input to the analysis flow — the hadith text plus whatever provenance
/// fields the record carries.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeInput {
  pub hadith_text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rawi: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mohdith: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub book: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub grade: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub explain_grade: Option<String>,
}

/// The three independent analysis sections the model must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
  /// Content and meaning (dirayah).
  pub dirayah_analysis: String,
  /// Chain of narrators and authenticity (riwayah).
  pub riwayah_analysis: String,
  /// Context of pronouncement (asbab al-wurud).
  pub asbab_al_wurud_analysis: String,
}

const ANALYSIS_SYSTEM_PROMPT: &str = "\
You are an expert Islamic scholar specializing in Hadith sciences (Ulum al-Hadith). \
Analyze the provided hadith on three axes: its content and meaning (dirayah), its \
chain of narrators and authenticity (riwayah), and the context of its pronouncement \
(asbab al-wurud). Write each analysis in Arabic, concise yet comprehensive. \
Reply with a single JSON object with exactly these string keys: \
\"dirayahAnalysis\", \"riwayahAnalysis\", \"asbabAlWurudAnalysis\".";

fn analysis_prompt(input: &AnalyzeInput) -> String {
  let mut prompt = String::from("Hadith details:\n");
  prompt.push_str(&format!("- Text (متن الحديث): {}\n", input.hadith_text));
  if let Some(rawi) = &input.rawi {
    prompt.push_str(&format!("- Narrator (الراوي): {rawi}\n"));
  }
  if let Some(mohdith) = &input.mohdith {
    prompt.push_str(&format!("- Scholar (المحدث): {mohdith}\n"));
  }
  if let Some(book) = &input.book {
    prompt.push_str(&format!("- Source book (الكتاب): {book}\n"));
  }
  if let Some(grade) = &input.grade {
    prompt.push_str(&format!("- Grade (درجة الصحة): {grade}\n"));
  }
  if let Some(explain) = &input.explain_grade {
    prompt.push_str(&format!("- Grade explanation (توضيح درجة الصحة): {explain}\n"));
  }
  prompt
}

/// Run the analysis flow once.
pub async fn analyze(client: &AiClient, input: &AnalyzeInput) -> Result<AnalyzeOutput, AiError> {
  let value = client
    .complete_json(ANALYSIS_SYSTEM_PROMPT, &analysis_prompt(input))
    .await?;
  serde_json::from_value(value).map_err(|_| AiError::EmptyModelOutput)
}

// ─── Translation ─────────────────────────────────────────────────────────────

/// Input to the translation flow — the hadith text only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateInput {
  pub hadith_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateOutput {
  pub translated_text: String,
}

const TRANSLATION_SYSTEM_PROMPT: &str = "\
You are an expert translator. Translate the Arabic hadith text you are given \
accurately into Indonesian. Provide only the translation, without introductory \
phrases or explanations. Reply with a single JSON object with exactly one string \
key: \"translatedText\".";

/// Run the translation flow once.
pub async fn translate(
  client: &AiClient,
  input: &TranslateInput,
) -> Result<TranslateOutput, AiError> {
  let value = client
    .complete_json(TRANSLATION_SYSTEM_PROMPT, &input.hadith_text)
    .await?;
  serde_json::from_value(value).map_err(|_| AiError::EmptyModelOutput)
}
