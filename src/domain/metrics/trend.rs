//! Trend shapes governing how a metric evolves tick over tick

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::MetricsError;

/// Shape function applied to a metric's base value
///
/// Parsing is strict: any name outside the four known trends is rejected with
/// [`MetricsError::UnrecognizedTrend`], including during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Trend {
    /// Compounding growth by the configured rate
    Grow,
    /// Base value plus independent uniform noise each tick
    Stable,
    /// Base value, unchanged
    Fixed,
    /// Compounding decay by the magnitude of the configured rate
    Decline,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grow => "grow",
            Self::Stable => "stable",
            Self::Fixed => "fixed",
            Self::Decline => "decline",
        }
    }
}

impl FromStr for Trend {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grow" => Ok(Self::Grow),
            "stable" => Ok(Self::Stable),
            "fixed" => Ok(Self::Fixed),
            "decline" => Ok(Self::Decline),
            other => Err(MetricsError::UnrecognizedTrend(other.to_string())),
        }
    }
}

impl TryFrom<String> for Trend {
    type Error = MetricsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
