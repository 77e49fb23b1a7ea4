// The fixed keyword table mapping subject areas to their marker keywords.
//
// Built once at startup, never mutated. Each keyword compiles to a
// case-insensitive regex anchored on word boundaries at both ends, so
// "ring" cannot match inside "string".

use anyhow::{Context, Result};
use regex_lite::Regex;

/// Label assigned when no category keyword matches.
pub const OTHER_LABEL: &str = "Other";

/// A subject area and its compiled keyword patterns.
pub struct Category {
    label: String,
    keywords: Vec<String>,
    patterns: Vec<Regex>,
}

impl Category {
    pub fn new(label: &str, keywords: &[&str]) -> Result<Self> {
        let patterns = keywords
            .iter()
            .map(|kw| {
                Regex::new(&format!(r"(?i)\b{}\b", regex_lite::escape(kw)))
                    .with_context(|| format!("Invalid keyword pattern: {kw}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            patterns,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when at least one keyword appears as a whole word in the
    /// text. `any` stops at the first hit; checking every keyword would
    /// give the same answer.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(text))
    }
}

/// Ordered list of categories checked against every paper.
pub struct KeywordTable {
    categories: Vec<Category>,
}

impl KeywordTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The mathematics sub-area table this tool ships with.
    pub fn mathematics() -> Result<Self> {
        let table: [(&str, &[&str]); 10] = [
            (
                "Algebra",
                &["algebra", "group", "ring", "field", "module", "homomorphism"],
            ),
            (
                "Analysis",
                &["analysis", "function", "derivative", "integral", "measure", "harmonic"],
            ),
            (
                "Geometry",
                &["geometry", "topology", "manifold", "curve", "surface", "metric"],
            ),
            (
                "Number Theory",
                &["number theory", "prime", "modular", "diophantine", "zeta"],
            ),
            (
                "Applied Math",
                &["applied", "model", "simulation", "numerical", "optimization"],
            ),
            (
                "Probability",
                &["probability", "stochastic", "random", "markov", "brownian"],
            ),
            (
                "Statistics",
                &["statistics", "regression", "hypothesis", "bayesian", "estimation"],
            ),
            (
                "Dynamical Systems",
                &["dynamical", "chaos", "bifurcation", "attractor", "flow"],
            ),
            (
                "Logic",
                &["logic", "set theory", "model theory", "proof", "computability"],
            ),
            (
                "Combinatorics",
                &["combinatorics", "graph", "permutation", "partition", "matroid"],
            ),
        ];

        let categories = table
            .into_iter()
            .map(|(label, keywords)| Category::new(label, keywords))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(categories))
    }
}
