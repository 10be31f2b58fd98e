//! AI augmentation for hadith views: scholarly analysis and translation.
//!
//! Two structurally identical request/response flows against an
//! OpenAI-compatible prompt service, plus the [`flow::Flow`] cell that gives
//! each one its idle → pending → settled lifecycle with protection against
//! duplicate triggers and stale responses.

pub mod client;
pub mod error;
pub mod flow;
pub mod flows;

pub use client::{AiClient, AiConfig};
pub use error::AiError;
pub use flow::{Flow, FlowState, Ticket};
pub use flows::{AnalyzeInput, AnalyzeOutput, TranslateInput, TranslateOutput, analyze, translate};
