//! `durar` — command-line explorer for the Dorar hadith repository.
//!
//! # Usage
//!
//! ```
//! durar search "إنما الأعمال بالنيات"
//! durar show 12345
//! durar analyze 12345 --ai-url http://localhost:1234/v1
//! durar --config ~/.config/durar/config.toml translate 12345
//! ```

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use durar_ai::{AiClient, AiConfig, AnalyzeInput, Flow, TranslateInput};
use durar_client::{ApiConfig, DorarClient};
use durar_core::{
  search::search_hadiths,
  source::{DataCategory, HadithSource},
  view::materialize_view,
};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "durar", about = "Explore the Dorar hadith repository")]
struct Args {
  /// Path to a TOML config file (api_url, ai_url, ai_model, ai_api_key).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the hadith API.
  #[arg(long, env = "DURAR_API_URL")]
  api_url: Option<String>,

  /// Base URL of the OpenAI-compatible prompt service.
  #[arg(long, env = "DURAR_AI_URL")]
  ai_url: Option<String>,

  /// Model name for the prompt service.
  #[arg(long, env = "DURAR_AI_MODEL")]
  ai_model: Option<String>,

  /// API key for the prompt service, if it needs one.
  #[arg(long, env = "DURAR_AI_API_KEY")]
  ai_api_key: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Search hadiths by free text.
  Search {
    query: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
  },
  /// Show the full detail view for a hadith id.
  Show { id: String },
  /// Fetch commentary (sharh) by its id.
  Sharh { id: String },
  /// Search commentary by free text.
  SharhSearch {
    text: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
  },
  /// Print a reference list: book, degree, methodSearch, mohdith, rawi or
  /// zoneSearch.
  Data { category: String },
  /// AI analysis of a hadith: dirayah, riwayah, asbab al-wurud.
  Analyze { id: String },
  /// AI translation of a hadith into Indonesian.
  Translate { id: String },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  api_url:    String,
  #[serde(default)]
  ai_url:     String,
  #[serde(default)]
  ai_model:   String,
  #[serde(default)]
  ai_api_key: String,
}

/// CLI flag wins over the config file; empty file entries count as unset.
fn pick(flag: Option<String>, file_value: String) -> Option<String> {
  flag.or_else(|| (!file_value.is_empty()).then_some(file_value))
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  let api_config = match pick(args.api_url, file_cfg.api_url) {
    Some(base_url) => ApiConfig { base_url },
    None => ApiConfig::default(),
  };
  let client = DorarClient::new(api_config).context("building API client")?;

  let ai_config = {
    let mut config = AiConfig::default();
    if let Some(url) = pick(args.ai_url, file_cfg.ai_url) {
      config.base_url = url;
    }
    if let Some(model) = pick(args.ai_model, file_cfg.ai_model) {
      config.model = model;
    }
    config.api_key = pick(args.ai_api_key, file_cfg.ai_api_key);
    config
  };

  match args.command {
    Command::Search { query, page } => {
      let page = search_hadiths(&client, &query, page).await?;
      render::search_page(&page);
    }

    Command::Show { id } => {
      let view = materialize_view(&client, &id).await?;
      render::hadith_view(&view);
    }

    Command::Sharh { id } => {
      let envelope = client.get_sharh(&id).await?;
      match envelope.data.sharh_metadata.and_then(|m| m.sharh) {
        Some(text) => println!("{text}"),
        None => println!("The response carried no commentary text."),
      }
    }

    Command::SharhSearch { text, page } => {
      let envelope = client.search_sharh(&text, page).await?;
      render::sharh_results(&envelope.data);
    }

    Command::Data { category } => {
      let category = DataCategory::from_key(&category)
        .with_context(|| format!("unknown data category: {category}"))?;
      let items = client.get_data_list(category).await?;
      render::data_items(&items);
    }

    Command::Analyze { id } => {
      let hadith = client.get_hadith(&id).await?.data;
      let input = AnalyzeInput {
        hadith_text: hadith.hadith.clone(),
        rawi: non_empty(&hadith.rawi),
        mohdith: non_empty(&hadith.mohdith),
        book: non_empty(&hadith.book),
        grade: non_empty(&hadith.grade),
        explain_grade: hadith.explain_grade.clone(),
      };
      let ai = AiClient::new(ai_config).context("building AI client")?;

      let mut flow = Flow::new();
      if let Some(ticket) = flow.begin() {
        println!("Analyzing…");
        match durar_ai::analyze(&ai, &input).await {
          Ok(output) => flow.succeed(ticket, output),
          Err(e) => flow.fail(ticket, e.to_string()),
        };
      }
      render::analysis(flow.state());
    }

    Command::Translate { id } => {
      let hadith = client.get_hadith(&id).await?.data;
      let input = TranslateInput { hadith_text: hadith.hadith.clone() };
      let ai = AiClient::new(ai_config).context("building AI client")?;

      let mut flow = Flow::new();
      if let Some(ticket) = flow.begin() {
        println!("Translating…");
        match durar_ai::translate(&ai, &input).await {
          Ok(output) => flow.succeed(ticket, output),
          Err(e) => flow.fail(ticket, e.to_string()),
        };
      }
      render::translation(flow.state());
    }
  }

  Ok(())
}

fn non_empty(value: &str) -> Option<String> {
  (!value.is_empty()).then(|| value.to_owned())
}
