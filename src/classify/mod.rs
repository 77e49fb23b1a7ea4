// Classification: fixed keyword table, whole-word matching, tallying.

pub mod classifier;
pub mod counts;
pub mod keywords;
