use itertools::Itertools;
use std::cmp::{max, min};

const MAX_PREFIX_LENGTH: usize = 4;
const PREFIX_SCALE: f64 = 0.1;

/*****************************************************************************/
/* Jaro-Winkler                                                              */
/*****************************************************************************/
/// Jaro similarity boosted by the length of the common prefix (at most four
/// characters). Strings with no matching characters score 0.
pub fn jaro_winkler_similarity(source: &str, target: &str) -> f64 {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    let jaro = jaro(&source, &target);
    if jaro == 0.0 {
        return 0.0;
    }

    let prefix_length = common_prefix_length(&source, &target);
    jaro + PREFIX_SCALE * prefix_length as f64 * (1.0 - jaro)
}

pub fn jaro_similarity(source: &str, target: &str) -> f64 {
    let source: Vec<char> = source.chars().collect();
    let target: Vec<char> = target.chars().collect();

    jaro(&source, &target)
}

fn jaro(source: &[char], target: &[char]) -> f64 {
    let matches = MatchedChars::new(source, target);
    let m = matches.count();
    if m == 0 {
        return 0.0;
    }

    let m = m as f64;
    let transpositions = matches.transpositions() as f64;

    (m / source.len() as f64 + m / target.len() as f64 + (m - transpositions) / m) / 3.0
}

fn common_prefix_length(source: &[char], target: &[char]) -> usize {
    source
        .iter()
        .zip(target)
        .take(MAX_PREFIX_LENGTH)
        .take_while(|(s, t)| s == t)
        .count()
}

/*****************************************************************************/
/* Windowed character matching                                               */
/*****************************************************************************/
/// Characters of each string that found a partner within the match window,
/// kept in their original order.
#[derive(Debug, PartialEq)]
struct MatchedChars {
    source: Vec<char>,
    target: Vec<char>,
}

impl MatchedChars {
    /// Each source index claims the first unconsumed equal character of the
    /// target inside `max_len / 2 - 1` positions of itself. A target position
    /// is consumed at most once. When the longer string has a single
    /// character the window is negative and nothing matches.
    fn new(source: &[char], target: &[char]) -> Self {
        let max_len = max(source.len(), target.len());
        if max_len < 2 {
            return MatchedChars {
                source: vec![],
                target: vec![],
            };
        }

        let window = max_len / 2 - 1;
        let mut target_consumed = vec![false; target.len()];
        let mut source_matches = Vec::new();

        for (i, c) in source.iter().enumerate() {
            let lo = i.saturating_sub(window);
            let hi = min(target.len(), i + window + 1);

            if let Some(j) = (lo..hi).find(|&j| !target_consumed[j] && target[j] == *c) {
                target_consumed[j] = true;
                source_matches.push(*c);
            }
        }

        let target_matches = target
            .iter()
            .zip(target_consumed)
            .filter(|(_, consumed)| *consumed)
            .map(|(c, _)| *c)
            .collect();

        MatchedChars {
            source: source_matches,
            target: target_matches,
        }
    }

    fn count(&self) -> usize {
        self.source.len()
    }

    /// Half the number of positions where the matched sequences disagree.
    fn transpositions(&self) -> usize {
        self.source
            .iter()
            .zip_eq(&self.target)
            .filter(|(s, t)| s != t)
            .count()
            / 2
    }
}

////////////////////////////////////////////////////////////////////////////////
// Testing
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn martha_marhta() {
        let matches = MatchedChars::new(&chars("martha"), &chars("marhta"));
        assert_eq!(matches.count(), 6);
        assert_eq!(matches.transpositions(), 1);

        assert_approx_eq!(jaro_similarity("martha", "marhta"), 17.0 / 18.0);
        assert_approx_eq!(jaro_winkler_similarity("martha", "marhta"), 0.961111, 1e-6);
    }

    #[test]
    fn dixon_dicksonx() {
        assert_approx_eq!(jaro_similarity("dixon", "dicksonx"), 0.766667, 1e-6);
        assert_approx_eq!(jaro_winkler_similarity("dixon", "dicksonx"), 0.813333, 1e-6);
    }

    #[test]
    fn jaro_agrees_with_strsim() {
        for (a, b) in vec![("martha", "marhta"), ("dixon", "dicksonx"), ("dwayne", "duane")] {
            assert_approx_eq!(jaro_similarity(a, b), strsim::jaro(a, b));
        }
    }

    #[test]
    fn prefix_is_capped() {
        // Identical eight character prefix only counts for four.
        let jaro = jaro_similarity("abcdefghxy", "abcdefghyz");
        assert_approx_eq!(
            jaro_winkler_similarity("abcdefghxy", "abcdefghyz"),
            jaro + 0.4 * (1.0 - jaro)
        );
    }

    #[test]
    fn no_matches() {
        assert_approx_eq!(jaro_winkler_similarity("abc", "xyz"), 0.0);
        assert_approx_eq!(jaro_winkler_similarity("", "xyz"), 0.0);
        assert_approx_eq!(jaro_winkler_similarity("", ""), 0.0);
    }

    #[test]
    fn identical() {
        assert_approx_eq!(jaro_winkler_similarity("john smith", "john smith"), 1.0);
        assert_approx_eq!(jaro_winkler_similarity("aaaaaa", "aaaaaa"), 1.0);
    }

    #[test]
    fn single_characters_never_match() {
        assert_eq!(MatchedChars::new(&chars("a"), &chars("a")).count(), 0);
        assert_eq!(jaro_winkler_similarity("a", "a"), 0.0);
        assert_eq!(jaro_winkler_similarity("a", "b"), 0.0);
        // A two character string opens a window of zero.
        let jaro = (1.0 + 0.5 + 1.0) / 3.0;
        assert_approx_eq!(jaro_winkler_similarity("a", "ab"), jaro + 0.1 * (1.0 - jaro));
    }

    #[test]
    fn window_limits_matches() {
        // 'a' sits seven places away, outside the window of three.
        let matches = MatchedChars::new(&chars("abcdefgh"), &chars("xxxxxxxa"));
        assert_eq!(matches.count(), 0);
    }

    #[test]
    fn symmetry_on_sample_pairs() {
        for (a, b) in vec![
            ("martha", "marhta"),
            ("dixon", "dicksonx"),
            ("kitten", "sitting"),
        ] {
            assert_approx_eq!(jaro_winkler_similarity(a, b), jaro_winkler_similarity(b, a));
        }
    }
}
