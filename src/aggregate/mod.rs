mod result;

use log::{debug, trace};
use rayon::prelude::*;

use crate::core::{Metric, SimilarityMetric};

pub use result::{MetricScore, ScoreBreakdown, ScoreRow, UNIFIED};

/*****************************************************************************/
/* Unified similarity                                                        */
/*****************************************************************************/
/// Mean of all six built-in metrics on the pair, in `[0, 1]`.
///
/// An absent or all-whitespace input scores 0.
pub fn unified_similarity<'a, S, T>(source: S, target: T) -> f64
where
    S: Into<Option<&'a str>>,
    T: Into<Option<&'a str>>,
{
    score_breakdown(source, target).map_or(0.0, |breakdown| *breakdown.mean())
}

/// Every built-in metric score on the pair plus their mean, or `None` when an
/// input is absent or all whitespace.
///
/// Each metric runs as its own task on the rayon pool and only reads the two
/// inputs. Results are collected in `Metric::ALL` order.
pub fn score_breakdown<'a, S, T>(source: S, target: T) -> Option<ScoreBreakdown>
where
    S: Into<Option<&'a str>>,
    T: Into<Option<&'a str>>,
{
    let (source, target) = non_blank_pair(source.into(), target.into())?;

    let scores: Vec<MetricScore> = Metric::ALL
        .par_iter()
        .map(|&metric| {
            let score = metric.compute(source, target);
            trace!("{} scored {:?} against {:?}: {}", metric, source, target, score);
            MetricScore::new(metric, score)
        })
        .collect();

    let breakdown = ScoreBreakdown::new(scores);
    debug!(
        "unified similarity of {:?} and {:?}: {}",
        source,
        target,
        breakdown.mean()
    );
    Some(breakdown)
}

/*****************************************************************************/
/* Caller supplied metric                                                    */
/*****************************************************************************/
/// Score the pair with a caller supplied metric.
///
/// Returns 0 without calling the metric when an input is absent or all
/// whitespace, or when no metric is given. The metric's output is returned
/// as is.
pub fn similarity_by_method<'a, S, T, M>(source: S, target: T, metric: Option<&M>) -> f64
where
    S: Into<Option<&'a str>>,
    T: Into<Option<&'a str>>,
    M: SimilarityMetric + ?Sized,
{
    match (non_blank_pair(source.into(), target.into()), metric) {
        (Some((source, target)), Some(metric)) => metric.compute(source, target),
        _ => 0.0,
    }
}

fn non_blank_pair<'a>(
    source: Option<&'a str>,
    target: Option<&'a str>,
) -> Option<(&'a str, &'a str)> {
    match (source, target) {
        (Some(s), Some(t)) if !is_blank(s) && !is_blank(t) => Some((s, t)),
        _ => {
            debug!("skipping comparison of {:?} and {:?}: blank input", source, target);
            None
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
