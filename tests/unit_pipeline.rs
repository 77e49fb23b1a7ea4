// Pipeline tests with a recording chart backend: no graphics, no
// network. Covers the classify -> tally -> render flow and the
// conditional word-cloud.

use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;

use taxon::arxiv::feed::Paper;
use taxon::classify::counts::CategoryCounts;
use taxon::classify::keywords::{KeywordTable, OTHER_LABEL};
use taxon::config::Config;
use taxon::output::traits::ChartBackend;
use taxon::pipeline;

fn paper(title: &str, summary: &str) -> Paper {
    Paper {
        arxiv_id: "2401.00001".to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        published: None,
        authors: vec![],
        pdf_link: String::new(),
    }
}

/// Records render calls instead of drawing anything.
#[derive(Default)]
struct RecordingBackend {
    bar_charts: Mutex<Vec<Vec<(String, u32)>>>,
    word_clouds: Mutex<Vec<(String, u32)>>,
}

impl ChartBackend for RecordingBackend {
    fn bar_chart(&self, counts: &CategoryCounts, _path: &Path) -> Result<()> {
        let entries = counts.iter().map(|(l, c)| (l.to_string(), c)).collect();
        self.bar_charts.lock().unwrap().push(entries);
        Ok(())
    }

    fn word_cloud(&self, label: &str, count: u32, _path: &Path) -> Result<()> {
        self.word_clouds
            .lock()
            .unwrap()
            .push((label.to_string(), count));
        Ok(())
    }
}

#[test]
fn run_classifies_tallies_and_renders() {
    let table = KeywordTable::mathematics().unwrap();
    let config = Config::default();
    let backend = RecordingBackend::default();

    let papers = vec![
        paper("A Group Theory Result", "We study finite groups and rings."),
        paper("On Painting", "A study of brushwork."),
    ];

    let summary = pipeline::run(papers, &table, &backend, &config).unwrap();

    assert_eq!(summary.classified.len(), 2);
    assert_eq!(summary.counts.get("Algebra"), 1);
    assert_eq!(summary.counts.get(OTHER_LABEL), 1);

    // Bar chart plus word-cloud: one paper fell through to Other
    assert_eq!(
        summary.artifacts,
        vec![config.chart_path.clone(), config.word_cloud_path.clone()]
    );
    assert_eq!(backend.bar_charts.lock().unwrap().len(), 1);
    assert_eq!(
        backend.word_clouds.lock().unwrap().as_slice(),
        &[(OTHER_LABEL.to_string(), 1)]
    );
}

#[test]
fn run_skips_word_cloud_when_everything_classifies() {
    let table = KeywordTable::mathematics().unwrap();
    let config = Config::default();
    let backend = RecordingBackend::default();

    let papers = vec![
        paper("Prime gaps", "New bounds on prime gaps."),
        paper("Harmonic maps", "Harmonic analysis on a manifold."),
    ];

    let summary = pipeline::run(papers, &table, &backend, &config).unwrap();

    assert_eq!(summary.counts.get(OTHER_LABEL), 0);
    assert_eq!(summary.artifacts, vec![config.chart_path.clone()]);
    assert!(backend.word_clouds.lock().unwrap().is_empty());
}

#[test]
fn bar_chart_receives_counts_in_provided_order() {
    let table = KeywordTable::mathematics().unwrap();
    let config = Config::default();
    let backend = RecordingBackend::default();

    // First paper seen is Other, second is Algebra; the tally keeps
    // that first-seen order for the renderer
    let papers = vec![
        paper("On Painting", "A study of brushwork."),
        paper("Rings", "On the ring of integers."),
    ];

    pipeline::run(papers, &table, &backend, &config).unwrap();

    let charts = backend.bar_charts.lock().unwrap();
    assert_eq!(
        charts[0],
        vec![(OTHER_LABEL.to_string(), 1), ("Algebra".to_string(), 1)]
    );
}
