use std::path::PathBuf;

/// Run configuration.
///
/// Everything here is a compile-time constant: the tool takes no CLI
/// flags, environment variables, or config files. The struct exists so
/// the fetch and render stages can be exercised against arbitrary values
/// in tests instead of reaching for module-level globals.
pub struct Config {
    /// arXiv export API endpoint
    pub api_url: String,
    /// Subject category code to query (arXiv archive name)
    pub category: String,
    /// How many papers to request in the single feed query
    pub max_results: usize,
    /// Where the classification bar chart is written
    pub chart_path: PathBuf,
    /// Where the "Other" word-cloud is written (only when Other > 0)
    pub word_cloud_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: crate::arxiv::client::DEFAULT_API_URL.to_string(),
            category: "math".to_string(),
            max_results: 500,
            chart_path: PathBuf::from("arxiv_math_classification.png"),
            word_cloud_path: PathBuf::from("arxiv_math_other_wordcloud.png"),
        }
    }
}
