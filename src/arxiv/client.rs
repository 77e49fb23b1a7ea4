// arXiv export API client: unauthenticated HTTP GET on the public endpoint.
//
// A thin reqwest wrapper: builds the single bounded query, checks the
// status, and hands the body to the feed parser. There is no retry or
// backoff; a failed request fails the run.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use super::feed::{self, Paper};

/// Default arXiv export API endpoint.
pub const DEFAULT_API_URL: &str = "https://export.arxiv.org/api/query";

/// Sort field accepted by the export API.
#[derive(Debug, Clone, Copy)]
pub enum SortBy {
    SubmittedDate,
    LastUpdatedDate,
    Relevance,
}

impl SortBy {
    pub fn as_api_str(self) -> &'static str {
        match self {
            SortBy::SubmittedDate => "submittedDate",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::Relevance => "relevance",
        }
    }
}

/// Sort order accepted by the export API.
#[derive(Debug, Clone, Copy)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_api_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

/// Parameters for the single feed query.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    /// arXiv archive name, e.g. "math"
    pub category: String,
    /// Result offset (always 0 for this tool)
    pub start: usize,
    pub max_results: usize,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl FeedQuery {
    /// The query this tool runs: most recent submissions in a category.
    pub fn recent(category: &str, max_results: usize) -> Self {
        Self {
            category: category.to_string(),
            start: 0,
            max_results,
            sort_by: SortBy::SubmittedDate,
            sort_order: SortOrder::Descending,
        }
    }
}

/// HTTP client for the arXiv export API.
pub struct ArxivClient {
    client: reqwest::Client,
    base_url: String,
}

impl ArxivClient {
    /// Create a client pointing at the given endpoint.
    ///
    /// Defaults to the public export API; pass a different URL for tests
    /// or mirrors.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("taxon/0.1 (arXiv subject classification)")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue the feed query and parse the response into papers.
    ///
    /// Papers come back in feed order, descending submission date for
    /// the query this tool runs. Network and parse failures propagate.
    pub async fn fetch(&self, query: &FeedQuery) -> Result<Vec<Paper>> {
        let search_query = format!("cat:{}", query.category);
        let start = query.start.to_string();
        let max_results = query.max_results.to_string();

        debug!(
            category = query.category,
            max_results = query.max_results,
            "arXiv feed query"
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("search_query", search_query.as_str()),
                ("start", start.as_str()),
                ("max_results", max_results.as_str()),
                ("sortBy", query.sort_by.as_api_str()),
                ("sortOrder", query.sort_order.as_api_str()),
            ])
            .send()
            .await
            .context("arXiv API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("arXiv API returned {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read arXiv response body")?;

        feed::parse_feed(&bytes)
    }
}
