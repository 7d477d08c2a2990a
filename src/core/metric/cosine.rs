use rayon::prelude::*;
use std::collections::HashSet;

use crate::core::ngram::{bigram_counter, NGramCounter};

/*****************************************************************************/
/* Cosine similarity of bigram vectors                                       */
/*****************************************************************************/
/// Cosine of the angle between the bigram frequency vectors of both strings.
/// A string without bigrams has no direction and scores 0.
pub fn cosine_similarity(source: &str, target: &str) -> f64 {
    let source_bigrams = bigram_counter(source);
    let target_bigrams = bigram_counter(target);

    let magnitude_source = magnitude(&source_bigrams);
    let magnitude_target = magnitude(&target_bigrams);
    if magnitude_source == 0.0 || magnitude_target == 0.0 {
        return 0.0;
    }

    let all_bigrams: HashSet<&String> = source_bigrams
        .keys()
        .chain(target_bigrams.keys())
        .collect();
    let dot_product: f64 = all_bigrams
        .par_iter()
        .map(|bigram| count_of(&source_bigrams, bigram) * count_of(&target_bigrams, bigram))
        .sum();

    dot_product / (magnitude_source * magnitude_target)
}

fn count_of(counter: &NGramCounter, bigram: &str) -> f64 {
    counter.get(bigram).copied().unwrap_or(0) as f64
}

fn magnitude(counter: &NGramCounter) -> f64 {
    counter
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        .sqrt()
}

////////////////////////////////////////////////////////////////////////////////
// Testing
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn identical() {
        assert_approx_eq!(cosine_similarity("john smith", "john smith"), 1.0);
        assert_approx_eq!(cosine_similarity("abab", "abab"), 1.0);
    }

    #[test]
    fn partial_overlap() {
        // abcd -> {ab, bc, cd}, abce -> {ab, bc, ce}
        assert_approx_eq!(cosine_similarity("abcd", "abce"), 2.0 / 3.0);
        // aab -> {aa, ab}, aaab -> {aa: 2, ab}
        assert_approx_eq!(
            cosine_similarity("aab", "aaab"),
            3.0 / (2.0_f64.sqrt() * 5.0_f64.sqrt())
        );
    }

    #[test]
    fn disjoint() {
        assert_approx_eq!(cosine_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn too_short_for_bigrams() {
        assert_approx_eq!(cosine_similarity("a", "a"), 0.0);
        assert_approx_eq!(cosine_similarity("a", "ab"), 0.0);
        assert_approx_eq!(cosine_similarity("", ""), 0.0);
    }

    #[test]
    fn symmetric() {
        assert_approx_eq!(
            cosine_similarity("kitten", "sitting"),
            cosine_similarity("sitting", "kitten")
        );
    }
}
