// Unit tests for the classification and aggregation contracts.
//
// These exercise the public API end to end (table -> classify -> tally)
// without touching the network or the chart backend.

use std::collections::BTreeSet;

use taxon::arxiv::feed::Paper;
use taxon::classify::classifier::{classify, ClassifiedPaper};
use taxon::classify::counts::tally;
use taxon::classify::keywords::{KeywordTable, OTHER_LABEL};

fn paper(title: &str, summary: &str) -> Paper {
    Paper {
        arxiv_id: "2401.00001".to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        published: None,
        authors: vec!["Test Author".to_string()],
        pdf_link: "https://arxiv.org/pdf/2401.00001".to_string(),
    }
}

fn classify_all(papers: Vec<Paper>, table: &KeywordTable) -> Vec<ClassifiedPaper> {
    papers
        .into_iter()
        .map(|p| {
            let categories = classify(&p.combined_text(), table);
            ClassifiedPaper {
                paper: p,
                categories,
            }
        })
        .collect()
}

// ============================================================
// Whole-word matching
// ============================================================

#[test]
fn stringent_does_not_match_ring() {
    let table = KeywordTable::mathematics().unwrap();
    let labels = classify(
        "Stringent conditions. We impose stringent requirements on strings.",
        &table,
    );
    assert_eq!(labels, BTreeSet::from([OTHER_LABEL.to_string()]));
}

#[test]
fn matching_ignores_case() {
    let table = KeywordTable::mathematics().unwrap();
    let labels = classify("ZETA Values. On special ZETA values.", &table);
    assert!(labels.contains("Number Theory"));
}

// ============================================================
// Spec scenarios
// ============================================================

#[test]
fn group_theory_paper_lands_in_algebra() {
    let table = KeywordTable::mathematics().unwrap();
    let p = paper("A Group Theory Result", "We study finite groups and rings.");
    let labels = classify(&p.combined_text(), &table);
    assert_eq!(labels, BTreeSet::from(["Algebra".to_string()]));
}

#[test]
fn unrelated_paper_lands_in_other() {
    let table = KeywordTable::mathematics().unwrap();
    let papers = vec![paper("On Painting", "A study of brushwork.")];
    let classified = classify_all(papers, &table);

    assert_eq!(
        classified[0].categories,
        BTreeSet::from([OTHER_LABEL.to_string()])
    );

    let counts = tally(&classified);
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.get(OTHER_LABEL), 1);
}

#[test]
fn multi_label_paper_counts_in_both_categories() {
    let table = KeywordTable::mathematics().unwrap();
    let papers = vec![
        // Algebra only
        paper("Rings", "On the ring of integers."),
        // Algebra and Analysis
        paper("Group actions", "A group acting by measure preserving maps."),
    ];
    let classified = classify_all(papers, &table);

    assert_eq!(
        classified[0].categories,
        BTreeSet::from(["Algebra".to_string()])
    );
    assert_eq!(
        classified[1].categories,
        BTreeSet::from(["Algebra".to_string(), "Analysis".to_string()])
    );

    let counts = tally(&classified);
    assert_eq!(counts.get("Algebra"), 2);
    assert_eq!(counts.get("Analysis"), 1);
}

// ============================================================
// Aggregation properties
// ============================================================

#[test]
fn tally_is_invariant_under_input_order() {
    let table = KeywordTable::mathematics().unwrap();
    let mut classified = classify_all(
        vec![
            paper("Rings", "On the ring of integers."),
            paper("Brushwork", "A study of brushwork."),
            paper("Random walks", "A stochastic process on a graph."),
            paper("Harmonic maps", "Harmonic functions on a manifold."),
        ],
        &table,
    );

    let forward = tally(&classified);
    classified.reverse();
    let backward = tally(&classified);
    classified.rotate_left(1);
    let rotated = tally(&classified);

    for label in [
        "Algebra",
        "Analysis",
        "Geometry",
        "Probability",
        "Combinatorics",
        OTHER_LABEL,
    ] {
        assert_eq!(forward.get(label), backward.get(label), "label {label}");
        assert_eq!(forward.get(label), rotated.get(label), "label {label}");
    }
    assert_eq!(forward.len(), backward.len());
}

#[test]
fn total_equals_sum_of_per_paper_matches() {
    let table = KeywordTable::mathematics().unwrap();
    let classified = classify_all(
        vec![
            paper("Rings", "On the ring of integers."),
            paper("Group actions", "A group acting by measure preserving maps."),
            paper("Brushwork", "A study of brushwork."),
        ],
        &table,
    );

    let expected: u64 = classified.iter().map(|p| p.categories.len() as u64).sum();
    let counts = tally(&classified);
    assert_eq!(counts.total(), expected);
}
