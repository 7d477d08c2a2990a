use ahash::RandomState;
use rayon::prelude::*;
use std::collections::HashSet;
use std::hash::{BuildHasher, Hash, Hasher};

use crate::core::ngram::shingle_set;

const SHINGLE_LENGTH: usize = 3;

/*****************************************************************************/
/* Single-hash MinHash sketch                                                */
/*****************************************************************************/
/// 1 when the smallest shingle hash of both strings coincides, otherwise 0.
///
/// Only one hash function is used, so this is a coin flip weighted by the
/// Jaccard index of the shingle sets rather than an estimate of it. A string
/// without shingles has no minimum and never matches.
pub fn minhash_similarity(source: &str, target: &str) -> f64 {
    let source_min = min_hash(&shingle_set(source, SHINGLE_LENGTH));
    let target_min = min_hash(&shingle_set(target, SHINGLE_LENGTH));

    match (source_min, target_min) {
        (Some(s), Some(t)) if s == t => 1.0,
        _ => 0.0,
    }
}

pub fn min_hash(shingles: &HashSet<String>) -> Option<u64> {
    let hash_builder = sketch_hasher();

    shingles
        .par_iter()
        .map(|shingle| {
            let mut hasher = hash_builder.build_hasher();
            shingle.hash(&mut hasher);
            hasher.finish()
        })
        .min()
}

// Fixed seeds keep sketches comparable between calls and threads.
fn sketch_hasher() -> RandomState {
    RandomState::with_seeds(
        0x243f_6a88_85a3_08d3,
        0x1319_8a2e_0370_7344,
        0xa409_3822_299f_31d0,
        0x082e_fa98_ec4e_6c89,
    )
}
