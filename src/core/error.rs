use std::error::Error;
use std::fmt::Display;

use crate::core::metric::Metric;

/// Raised when a metric name does not match any built-in metric.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownMetricError {
    name: String,
}

impl UnknownMetricError {
    pub fn new(name: &str) -> Self {
        UnknownMetricError {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for UnknownMetricError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let known: Vec<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        write!(
            f,
            "unknown metric '{}' (expected one of: {})",
            self.name,
            known.join(", ")
        )
    }
}

impl Error for UnknownMetricError {}
