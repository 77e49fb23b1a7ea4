// Output: terminal summary and chart file rendering.

pub mod charts;
pub mod terminal;
pub mod traits;

use std::path::PathBuf;

use anyhow::Result;

use crate::classify::counts::CategoryCounts;
use crate::classify::keywords::OTHER_LABEL;
use crate::config::Config;

use self::traits::ChartBackend;

/// Write the chart files for a finished run.
///
/// The bar chart is always written; the word-cloud only when any papers
/// fell through to "Other". Returns the paths actually written.
pub fn render_reports(
    backend: &dyn ChartBackend,
    counts: &CategoryCounts,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    backend.bar_chart(counts, &config.chart_path)?;
    written.push(config.chart_path.clone());

    let other = counts.get(OTHER_LABEL);
    if other > 0 {
        backend.word_cloud(OTHER_LABEL, other, &config.word_cloud_path)?;
        written.push(config.word_cloud_path.clone());
    }

    Ok(written)
}
