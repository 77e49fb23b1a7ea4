use anyhow::Result;
use colored::Colorize;
use tracing::info;

use taxon::arxiv::client::{ArxivClient, FeedQuery};
use taxon::classify::keywords::KeywordTable;
use taxon::config::Config;
use taxon::output::charts::PlottersBackend;
use taxon::output::terminal;
use taxon::pipeline;

/// Taxon: classify recent arXiv preprints by subject area.
///
/// One straight-line run: fetch the latest papers for the configured
/// category, classify each by keyword, print a summary, and write the
/// bar chart and (when needed) the "Other" word-cloud.
#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging; default to info for this crate only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taxon=info")),
        )
        .init();

    let config = Config::default();
    let table = KeywordTable::mathematics()?;

    println!("Fetching recent arXiv {} papers...", config.category);
    let client = ArxivClient::new(&config.api_url)?;
    let query = FeedQuery::recent(&config.category, config.max_results);
    let papers = client.fetch(&query).await?;
    println!("Retrieved {} papers.", papers.len());
    info!(count = papers.len(), "Feed fetched");

    let backend = PlottersBackend::new(format!(
        "arXiv {} Papers Classification (Last {} Papers)",
        config.category, config.max_results
    ));

    let summary = pipeline::run(papers, &table, &backend, &config)?;

    terminal::display_summary(&summary.counts, summary.classified.len());

    println!("\n{}", "Visualizations saved:".bold());
    for path in &summary.artifacts {
        println!("  {}", path.display());
    }

    Ok(())
}
