use counter::Counter;
use rayon::prelude::*;
use std::collections::HashSet;

/// Occurrence counts of every overlapping character window in a string.
pub type NGramCounter = Counter<String>;

/*****************************************************************************/
/* Frequency maps                                                            */
/*****************************************************************************/
/// Count every overlapping window of `window_size` characters in `s`.
///
/// Windows start at each offset from 0 to `len - window_size`, so a string
/// shorter than the window yields an empty counter. No case or whitespace
/// adjustment is made.
pub fn ngram_counter(s: &str, window_size: usize) -> NGramCounter {
    let chars = window_chars(s, window_size);

    chars
        .par_windows(window_size)
        .fold(NGramCounter::new, |mut counter, window| {
            counter[&mconcat_chars(window)] += 1;
            counter
        })
        .reduce(NGramCounter::new, merge_counters)
}

pub fn bigram_counter(s: &str) -> NGramCounter {
    ngram_counter(s, 2)
}

fn merge_counters(mut into: NGramCounter, from: NGramCounter) -> NGramCounter {
    for (ngram, count) in from.iter() {
        into[ngram] += *count;
    }
    into
}

/*****************************************************************************/
/* Sets                                                                      */
/*****************************************************************************/
/// The distinct overlapping windows of `window_size` characters in `s`.
pub fn ngram_set(s: &str, window_size: usize) -> HashSet<String> {
    let chars = window_chars(s, window_size);

    chars.par_windows(window_size).map(mconcat_chars).collect()
}

pub fn trigram_set(s: &str) -> HashSet<String> {
    ngram_set(s, 3)
}

/// k-shingles are plain n-gram sets under another name.
pub fn shingle_set(s: &str, k: usize) -> HashSet<String> {
    ngram_set(s, k)
}

fn window_chars(s: &str, window_size: usize) -> Vec<char> {
    if window_size == 0 {
        panic!("ngram extraction requires a window_size of 1 or greater")
    }
    s.chars().collect()
}

fn mconcat_chars(cs: &[char]) -> String {
    cs.iter().collect()
}
