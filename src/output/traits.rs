// Chart backend trait: keeps the graphics library out of the pipeline.
//
// Classification and aggregation are testable against a mock backend;
// the plotters implementation is the only code that touches a drawing
// surface.

use std::path::Path;

use anyhow::Result;

use crate::classify::counts::CategoryCounts;

/// Renderer for the image artifacts a run produces.
pub trait ChartBackend {
    /// Draw the horizontal classification bar chart to `path`.
    ///
    /// One bar per category in the counts' provided order, bar length
    /// proportional to the count, with the count printed next to the bar.
    fn bar_chart(&self, counts: &CategoryCounts, path: &Path) -> Result<()>;

    /// Draw the single-word cloud for the unclassified bucket to `path`,
    /// with the word sized by its count.
    fn word_cloud(&self, label: &str, count: u32, path: &Path) -> Result<()>;
}
