use crate::core::ngram::trigram_set;

/// Jaccard index of the trigram sets of both strings. Two strings that
/// produce no trigrams at all score 0.
pub fn jaccard_similarity(source: &str, target: &str) -> f64 {
    let source_trigrams = trigram_set(source);
    let target_trigrams = trigram_set(target);

    let union = source_trigrams.union(&target_trigrams).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = source_trigrams.intersection(&target_trigrams).count();

    intersection as f64 / union as f64
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn overlap() {
        // abcde -> {abc, bcd, cde}, abcdf -> {abc, bcd, cdf}
        assert_approx_eq!(jaccard_similarity("abcde", "abcdf"), 2.0 / 4.0);
        assert_approx_eq!(jaccard_similarity("abc", "abc"), 1.0);
        assert_approx_eq!(jaccard_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn too_short_for_trigrams() {
        assert_approx_eq!(jaccard_similarity("ab", "ab"), 0.0);
        assert_approx_eq!(jaccard_similarity("", ""), 0.0);
        // Only one side has trigrams, so the union is not empty.
        assert_approx_eq!(jaccard_similarity("ab", "abc"), 0.0);
    }

    #[test]
    fn repeated_trigrams_count_once() {
        assert_approx_eq!(jaccard_similarity("abcabc", "abc"), 1.0 / 3.0);
    }
}
