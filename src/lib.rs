//! Unified fuzzy similarity between two strings.
//!
//! Six independent metrics (Levenshtein, Jaro-Winkler, bigram cosine, trigram
//! Jaccard, SimHash and a single-hash MinHash sketch) are run in parallel on
//! the same pair and averaged into one score in `[0, 1]`.
//!
//! ```
//! let score = unisim::unified_similarity("kitten", "sitting");
//! assert!(score > 0.0 && score < 1.0);
//!
//! let same_length = |a: &str, b: &str| if a.len() == b.len() { 1.0 } else { 0.0 };
//! assert_eq!(unisim::similarity_by_method("abc", "xyz", Some(&same_length)), 1.0);
//! ```

pub mod aggregate;
pub mod core;

pub use crate::aggregate::{
    score_breakdown, similarity_by_method, unified_similarity, MetricScore, ScoreBreakdown,
    ScoreRow, UNIFIED,
};
pub use crate::core::{Metric, SimilarityMetric, UnknownMetricError};
