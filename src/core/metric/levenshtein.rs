use rayon::prelude::*;
use std::cmp::{max, min};

/*****************************************************************************/
/* Levenshtein edit distance                                                 */
/*****************************************************************************/
/// Levenshtein distance normalized into a similarity, `1 - d / max_len`.
/// Two empty strings are identical.
pub fn levenshtein_similarity(source: &str, target: &str) -> f64 {
    let max_length = max(source.chars().count(), target.chars().count());
    if max_length == 0 {
        1.0
    } else {
        1.0 - levenshtein_distance(source, target) as f64 / max_length as f64
    }
}

/// Full dynamic-programming Levenshtein distance counted in characters.
pub fn levenshtein_distance(source: &str, target: &str) -> usize {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let width = target.len() + 1;
    let mut dp = vec![0usize; (source.len() + 1) * width];

    // The boundary has no inter-cell dependency.
    dp.par_chunks_mut(width)
        .enumerate()
        .for_each(|(i, row)| row[0] = i);
    dp[..width]
        .par_iter_mut()
        .enumerate()
        .for_each(|(j, cell)| *cell = j);

    // Each interior cell reads its upper, left and upper-left neighbours, so
    // the interior is filled strictly row by row.
    for i in 1..=source.len() {
        for j in 1..width {
            let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };
            let deletion = dp[(i - 1) * width + j] + 1;
            let insertion = dp[i * width + j - 1] + 1;
            let substitution = dp[(i - 1) * width + j - 1] + cost;
            dp[i * width + j] = min(min(deletion, insertion), substitution);
        }
    }

    dp[dp.len() - 1]
}
