use rayon::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::core::ngram::bigram_counter;

const FINGERPRINT_BITS: usize = 64;

/*****************************************************************************/
/* SimHash fingerprints                                                      */
/*****************************************************************************/
/// Fraction of agreeing bits between the SimHash fingerprints of both strings.
pub fn simhash_similarity(source: &str, target: &str) -> f64 {
    let differing_bits = (simhash(source) ^ simhash(target)).count_ones();

    1.0 - differing_bits as f64 / FINGERPRINT_BITS as f64
}

/// 64-bit SimHash over the distinct bigrams of `text`, each bigram weighted
/// equally. Bit i is set when more bigram hashes have bit i set than unset.
pub fn simhash(text: &str) -> u64 {
    let counters: [AtomicI64; FINGERPRINT_BITS] = std::array::from_fn(|_| AtomicI64::new(0));
    let bigrams = bigram_counter(text);
    let bigrams: Vec<&String> = bigrams.keys().collect();

    bigrams.par_iter().for_each(|bigram| {
        let hash = polynomial_hash(bigram);
        for (bit, counter) in counters.iter().enumerate() {
            let vote = if hash & (1 << bit) != 0 { 1 } else { -1 };
            counter.fetch_add(vote, Ordering::Relaxed);
        }
    });

    counters
        .iter()
        .enumerate()
        .filter(|(_, counter)| counter.load(Ordering::Relaxed) > 0)
        .fold(0u64, |fingerprint, (bit, _)| fingerprint | 1 << bit)
}

/// `h = h * 31 + c` over the characters of `s`, starting from 0 and wrapping
/// on overflow.
pub fn polynomial_hash(s: &str) -> u64 {
    s.chars()
        .fold(0u64, |hash, c| hash.wrapping_mul(31).wrapping_add(c as u64))
}

////////////////////////////////////////////////////////////////////////////////
// Testing
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn polynomial_hashes() {
        assert_eq!(polynomial_hash(""), 0);
        assert_eq!(polynomial_hash("a"), 97);
        assert_eq!(polynomial_hash("ab"), 97 * 31 + 98);
    }

    #[test]
    fn single_bigram_fingerprint_is_its_hash() {
        assert_eq!(simhash("ab"), polynomial_hash("ab"));
        // Repeats do not add weight.
        assert_eq!(simhash("aaaa"), polynomial_hash("aa"));
    }

    #[test]
    fn ties_leave_bits_clear() {
        // "ab" and "ba" disagree on some bits; those counters sit at zero.
        let expected = polynomial_hash("ab") & polynomial_hash("ba");
        assert_eq!(simhash("aba"), expected);
    }

    #[test]
    fn empty_fingerprint() {
        assert_eq!(simhash(""), 0);
        assert_eq!(simhash("a"), 0);
    }

    #[test]
    fn similarity() {
        assert_approx_eq!(simhash_similarity("john smith", "john smith"), 1.0);
        let expected =
            1.0 - (polynomial_hash("ab") ^ polynomial_hash("cd")).count_ones() as f64 / 64.0;
        assert_approx_eq!(simhash_similarity("ab", "cd"), expected);
        assert_approx_eq!(
            simhash_similarity("kitten", "sitting"),
            simhash_similarity("sitting", "kitten")
        );
    }
}
