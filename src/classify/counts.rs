// Category tallies: the frequency mapping consumed by the renderer.
//
// Entries keep first-seen insertion order, matching the order papers
// arrive in, so the bar chart consumes keys as provided. As a mapping
// the result is order-independent: shuffling the input papers changes
// nothing but the key order.

use serde::{Deserialize, Serialize};

use super::classifier::ClassifiedPaper;

/// Label -> count mapping preserving first-seen insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryCounts {
    entries: Vec<(String, u32)>,
}

impl CategoryCounts {
    pub fn increment(&mut self, label: &str) {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
    }

    /// Count for a label; 0 when the label was never seen.
    pub fn get(&self, label: &str) -> u32 {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Entries sorted by count, descending. Ties keep first-seen order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Sum of all counts. Exceeds the paper count when papers are
    /// multi-label.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    pub fn max_count(&self) -> u32 {
        self.entries.iter().map(|(_, c)| *c).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tally category occurrences across all classified papers.
///
/// Each paper increments one counter per category it belongs to, so a
/// multi-label paper counts once in every category it matched.
pub fn tally(papers: &[ClassifiedPaper]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for paper in papers {
        for category in &paper.categories {
            counts.increment(category);
        }
    }
    counts
}
