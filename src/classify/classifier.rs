// Paper classification: combined title+abstract against the keyword table.
//
// Pure and deterministic: no ordering dependency between papers, so each
// paper is classified independently. A paper may land in several
// categories; "Other" is assigned only when nothing matched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::arxiv::feed::Paper;

use super::keywords::{KeywordTable, OTHER_LABEL};

/// A paper plus the category labels it matched. The set is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedPaper {
    pub paper: Paper,
    pub categories: BTreeSet<String>,
}

/// Classify a block of text against the table.
///
/// Returns every category with at least one whole-word keyword hit, or
/// exactly {"Other"} when none match.
pub fn classify(text: &str, table: &KeywordTable) -> BTreeSet<String> {
    let mut labels: BTreeSet<String> = table
        .categories()
        .iter()
        .filter(|cat| cat.matches(text))
        .map(|cat| cat.label().to_string())
        .collect();

    if labels.is_empty() {
        labels.insert(OTHER_LABEL.to_string());
    }

    labels
}
