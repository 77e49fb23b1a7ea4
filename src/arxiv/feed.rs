// Atom feed parsing: arXiv entries into plain Paper records.
//
// feed-rs handles the Atom envelope; this module maps each entry onto
// the handful of fields the classifier needs. arXiv wraps titles and
// abstracts with hard line breaks, so both are whitespace-normalized.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use feed_rs::model::Entry;
use feed_rs::parser;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A paper from the arXiv feed. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    pub arxiv_id: String,
    pub title: String,
    /// The abstract (`summary` in the Atom feed).
    pub summary: String,
    pub published: Option<DateTime<Utc>>,
    pub authors: Vec<String>,
    pub pdf_link: String,
}

impl Paper {
    /// Title and abstract joined, the text the classifier sees.
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.summary)
    }
}

/// Parse a raw Atom response into papers, preserving feed order.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Paper>> {
    let parsed = parser::parse(bytes).context("Failed to parse arXiv Atom feed")?;

    let papers: Vec<Paper> = parsed.entries.into_iter().map(paper_from_entry).collect();
    debug!(count = papers.len(), "Parsed feed entries");
    Ok(papers)
}

fn paper_from_entry(entry: Entry) -> Paper {
    let arxiv_id = extract_arxiv_id(&entry.id);

    let title = entry
        .title
        .as_ref()
        .map(|t| normalize_whitespace(&t.content))
        .unwrap_or_default();

    let summary = entry
        .summary
        .as_ref()
        .map(|s| normalize_whitespace(&s.content))
        .unwrap_or_default();

    let authors = entry.authors.iter().map(|a| a.name.clone()).collect();

    // arXiv marks the PDF link with title="pdf" / type="application/pdf".
    // Older entries sometimes omit it; the URL is derivable from the id.
    let pdf_link = entry
        .links
        .iter()
        .find(|l| {
            l.media_type.as_deref() == Some("application/pdf")
                || l.title.as_deref() == Some("pdf")
        })
        .map(|l| l.href.clone())
        .unwrap_or_else(|| format!("https://arxiv.org/pdf/{arxiv_id}"));

    Paper {
        arxiv_id,
        title,
        summary,
        published: entry.published.map(|dt| dt.into()),
        authors,
        pdf_link,
    }
}

/// Extract the arXiv id from an entry id like
/// "http://arxiv.org/abs/2401.12345v1".
fn extract_arxiv_id(id_url: &str) -> String {
    match id_url.rfind("/abs/") {
        Some(pos) => id_url[pos + 5..].to_string(),
        None => id_url.to_string(),
    }
}

/// Collapse runs of whitespace into single spaces.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
