// Taxon: keyword-based subject classification for arXiv preprints.
//
// This is the library root. Each module corresponds to one stage of the
// fetch -> classify -> tally -> render pipeline.

pub mod arxiv;
pub mod classify;
pub mod config;
pub mod output;
pub mod pipeline;
