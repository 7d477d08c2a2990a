pub mod cosine;
pub mod jaccard;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod minhash;
pub mod simhash;

pub use crate::core::metric::cosine::*;
pub use crate::core::metric::jaccard::*;
pub use crate::core::metric::jaro_winkler::*;
pub use crate::core::metric::levenshtein::*;
pub use crate::core::metric::minhash::*;
pub use crate::core::metric::simhash::*;

use std::fmt;
use std::str::FromStr;

use crate::core::error::UnknownMetricError;

/******************************************************************************/
/* SimilarityMetric Trait                                                     */
/******************************************************************************/
/// Anything that scores a pair of strings. Closures taking two `&str` and
/// returning `f64` implement it automatically.
pub trait SimilarityMetric {
    fn compute(&self, source: &str, target: &str) -> f64;
}

impl<F> SimilarityMetric for F
where
    F: Fn(&str, &str) -> f64,
{
    fn compute(&self, source: &str, target: &str) -> f64 {
        self(source, target)
    }
}

/******************************************************************************/
/* Built-in metrics                                                           */
/******************************************************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Levenshtein,
    JaroWinkler,
    Cosine,
    Jaccard,
    SimHash,
    MinHash,
}

impl Metric {
    /// Every built-in metric, in the order the aggregate reports them.
    pub const ALL: [Metric; 6] = [
        Metric::Levenshtein,
        Metric::JaroWinkler,
        Metric::Cosine,
        Metric::Jaccard,
        Metric::SimHash,
        Metric::MinHash,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Levenshtein => "levenshtein",
            Metric::JaroWinkler => "jaro-winkler",
            Metric::Cosine => "cosine",
            Metric::Jaccard => "jaccard",
            Metric::SimHash => "simhash",
            Metric::MinHash => "minhash",
        }
    }
}

impl SimilarityMetric for Metric {
    fn compute(&self, source: &str, target: &str) -> f64 {
        match self {
            Metric::Levenshtein => levenshtein_similarity(source, target),
            Metric::JaroWinkler => jaro_winkler_similarity(source, target),
            Metric::Cosine => cosine_similarity(source, target),
            Metric::Jaccard => jaccard_similarity(source, target),
            Metric::SimHash => simhash_similarity(source, target),
            Metric::MinHash => minhash_similarity(source, target),
        }
    }
}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .iter()
            .find(|metric| metric.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownMetricError::new(s))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
