//! gather command-line entry point.
//!
//! Runs a query end to end and prints the enriched documents, either as
//! a human-readable listing or as a JSON report. Logging goes to stderr
//! so stdout stays clean for the report.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use clap::Parser;
use gather_client::{EnrichedDocument, Gather, SearchRequest};
use gather_core::AppConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Search the web and extract readable text from each result.
#[derive(Debug, Parser)]
#[command(name = "gather", version, about)]
struct Cli {
    /// Query words.
    #[arg(required = true)]
    query: Vec<String>,

    /// Number of results to request (1-10).
    #[arg(long, short = 'n')]
    num: Option<u8>,

    /// Bypass the disk cache entirely for this run.
    #[arg(long)]
    no_cache: bool,

    /// Override the cache directory.
    #[arg(long)]
    cache_dir: Option<std::path::PathBuf>,

    /// Emit a JSON report instead of the human-readable listing.
    #[arg(long)]
    json: bool,
}

/// JSON report wrapper for `--json` output.
#[derive(Debug, Serialize)]
struct Report {
    query: String,
    retrieved_at: String,
    documents: Vec<ReportDocument>,
}

#[derive(Debug, Serialize)]
struct ReportDocument {
    title: String,
    display_link: String,
    url: String,
    snippet: String,
    text: String,
    text_available: bool,
}

impl From<&EnrichedDocument> for ReportDocument {
    fn from(doc: &EnrichedDocument) -> Self {
        Self {
            title: doc.title.clone(),
            display_link: doc.display_link.clone(),
            url: doc.url.clone(),
            snippet: doc.snippet.clone(),
            text: doc.text.as_str().to_string(),
            text_available: doc.text.is_extracted(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    let mut config = AppConfig::load().context("failed to load configuration")?;
    if cli.no_cache {
        config.cache_enabled = false;
    }
    if let Some(dir) = cli.cache_dir {
        config.cache_dir = dir;
    }

    let gather = Gather::from_config(&config)
        .await
        .context("failed to assemble pipeline")?;

    let request = SearchRequest { q: query.clone(), num: cli.num, ..Default::default() };
    let documents = gather
        .run_request(request)
        .await
        .with_context(|| format!("search failed for {:?}", query))?;

    tracing::debug!("built {} documents for {:?}", documents.len(), query);

    if cli.json {
        let report = Report {
            query,
            retrieved_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            documents: documents.iter().map(ReportDocument::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_listing(&query, &documents);
    }

    Ok(())
}

fn print_listing(query: &str, documents: &[EnrichedDocument]) {
    if documents.is_empty() {
        println!("no results for {:?}", query);
        return;
    }

    for (idx, doc) in documents.iter().enumerate() {
        let availability = if doc.text.is_extracted() {
            format!("{} chars of text", doc.text.as_str().len())
        } else {
            "no text".to_string()
        };
        println!("{}. {} ({})", idx + 1, doc.title, doc.display_link);
        println!("   {}", doc.url);
        println!("   {}", doc.snippet);
        println!("   [{}]", availability);
    }
}
