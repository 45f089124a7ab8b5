//! Aggregate configuration for a metric simulation run

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::metrics::{MetricsConfig, MetricsError};

/// Cadence at which the caller samples generated snapshots
///
/// The generator itself always advances one day per call; the frequency is
/// applied by the caller when it selects which snapshots to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Model descriptor passed through to every snapshot unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub name: String,
    pub is_custom_model: bool,
    pub custom_model_training_date: Option<String>,
}

impl ModelDescriptor {
    pub fn default_model() -> Self {
        Self {
            name: "default".to_string(),
            is_custom_model: false,
            custom_model_training_date: None,
        }
    }

    pub fn custom(name: impl Into<String>, training_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_custom_model: true,
            custom_model_training_date: Some(training_date.into()),
        }
    }
}

/// Everything a [`MetricSeriesGenerator`](crate::domain::metrics::MetricSeriesGenerator) needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockConfig {
    pub start_date: NaiveDate,
    /// Inclusive last day of the window
    pub end_date: NaiveDate,
    #[serde(default)]
    pub update_frequency: UpdateFrequency,
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub editors: Vec<String>,
    #[serde(default)]
    pub repositories: Vec<String>,
}

impl MockConfig {
    /// Number of days in the inclusive window
    pub fn window_days(&self) -> u64 {
        let span = (self.end_date - self.start_date).num_days();
        u64::try_from(span + 1).unwrap_or(0)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.end_date < self.start_date {
            return Err(MetricsError::InvalidWindow {
                start: self.start_date,
                end: self.end_date,
            });
        }
        self.metrics.validate()
    }
}
