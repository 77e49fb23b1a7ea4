// The run pipeline: classify -> tally -> render.
//
// Everything after the single network call lives here so a whole run
// minus the fetch can be exercised offline against a mock chart
// backend. Straight-line, no branching beyond the conditional
// word-cloud.

use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::arxiv::feed::Paper;
use crate::classify::classifier::{self, ClassifiedPaper};
use crate::classify::counts::{self, CategoryCounts};
use crate::classify::keywords::KeywordTable;
use crate::config::Config;
use crate::output::{self, traits::ChartBackend};

/// Everything a finished run produced.
pub struct RunSummary {
    pub classified: Vec<ClassifiedPaper>,
    pub counts: CategoryCounts,
    /// Image files written, in write order
    pub artifacts: Vec<PathBuf>,
}

/// Classify the fetched papers, tally the categories, and write the
/// chart artifacts.
pub fn run(
    papers: Vec<Paper>,
    table: &KeywordTable,
    backend: &dyn ChartBackend,
    config: &Config,
) -> Result<RunSummary> {
    let pb = ProgressBar::new(papers.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Classifying [{bar:30}] {pos}/{len}")
            .unwrap(),
    );

    let mut classified = Vec::with_capacity(papers.len());
    for paper in papers {
        let categories = classifier::classify(&paper.combined_text(), table);
        classified.push(ClassifiedPaper { paper, categories });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let counts = counts::tally(&classified);
    info!(
        papers = classified.len(),
        categories = counts.len(),
        "Classification complete"
    );

    let artifacts = output::render_reports(backend, &counts, config)?;

    Ok(RunSummary {
        classified,
        counts,
        artifacts,
    })
}
