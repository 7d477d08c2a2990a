use getset::Getters;
use serde::Serialize;

use crate::core::Metric;

/// The score a single built-in metric gave a pair of strings.
#[derive(Debug, Clone, Copy, PartialEq, Getters)]
pub struct MetricScore {
    #[getset(get = "pub")]
    metric: Metric,
    #[getset(get = "pub")]
    score: f64,
}

impl MetricScore {
    pub fn new(metric: Metric, score: f64) -> Self {
        MetricScore { metric, score }
    }
}

/// Every built-in metric score for one pair, in `Metric::ALL` order, and
/// their mean.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ScoreBreakdown {
    #[getset(get = "pub")]
    scores: Vec<MetricScore>,
    #[getset(get = "pub")]
    mean: f64,
}

impl ScoreBreakdown {
    pub fn new(scores: Vec<MetricScore>) -> Self {
        let mean = if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|ms| *ms.score()).sum::<f64>() / scores.len() as f64
        };

        ScoreBreakdown { scores, mean }
    }

    pub fn score_for(&self, metric: Metric) -> Option<f64> {
        self.scores
            .iter()
            .find(|ms| *ms.metric() == metric)
            .map(|ms| *ms.score())
    }

    /// Rows for tabular output, one per metric followed by the mean.
    pub fn to_rows(&self) -> Vec<ScoreRow> {
        self.scores
            .iter()
            .map(|ms| ScoreRow::new(ms.metric().name(), *ms.score()))
            .chain(std::iter::once(ScoreRow::new(UNIFIED, self.mean)))
            .collect()
    }
}

pub const UNIFIED: &str = "unified";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub metric: &'static str,
    pub score: f64,
}

impl ScoreRow {
    pub fn new(metric: &'static str, score: f64) -> Self {
        ScoreRow { metric, score }
    }
}
