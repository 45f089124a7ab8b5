//! Error types for metric series generation

use chrono::NaiveDate;
use thiserror::Error;

use super::MetricId;

/// Errors raised while validating metric configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("Unrecognized trend '{0}' (expected one of: grow, stable, fixed, decline)")]
    UnrecognizedTrend(String),

    #[error("Metric {metric} has a non-finite base value or range bound")]
    NonFiniteValue { metric: MetricId },

    #[error("Metric {metric} range [{min}, {max}] must satisfy 0 <= min <= max")]
    InvalidRange { metric: MetricId, min: f64, max: f64 },

    #[error("Metric {metric} base value {base} lies outside its range [{min}, {max}]")]
    BaseValueOutOfRange {
        metric: MetricId,
        base: f64,
        min: f64,
        max: f64,
    },

    #[error("Metric {metric} range [{min}, {max}] holds no whole count")]
    NoWholeCount { metric: MetricId, min: f64, max: f64 },

    #[error("Metric {metric} range maximum {max} exceeds the largest exact count {limit}")]
    RangeTooLarge { metric: MetricId, max: f64, limit: f64 },

    #[error("Metric {metric} is fixed at {base}, which is not a whole count")]
    FractionalFixedValue { metric: MetricId, base: f64 },

    #[error("Simulation window ends ({end}) before it starts ({start})")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}
