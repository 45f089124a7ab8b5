//! Usage-intensity policies controlling how fast seat activity advances

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::SeatsError;

/// Named policy for the per-call activity increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum UsagePattern {
    /// Everyone is active every 4 hours
    Heavy,
    /// Heavy users every 12 hours, everyone else daily
    HeavyButSiloed,
    /// Everyone daily
    Moderate,
    /// Everyone weekly
    Light,
}

impl UsagePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heavy => "heavy",
            Self::HeavyButSiloed => "heavy-but-siloed",
            Self::Moderate => "moderate",
            Self::Light => "light",
        }
    }

    /// Hours between activity updates for a seat
    pub fn increment_hours(&self, is_heavy_user: bool) -> i64 {
        match self {
            Self::Heavy => 4,
            Self::HeavyButSiloed if is_heavy_user => 12,
            Self::HeavyButSiloed => 24,
            Self::Moderate => 24,
            Self::Light => 168,
        }
    }

    pub fn increment(&self, is_heavy_user: bool) -> TimeDelta {
        TimeDelta::hours(self.increment_hours(is_heavy_user))
    }
}

impl FromStr for UsagePattern {
    type Err = SeatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heavy" => Ok(Self::Heavy),
            "heavy-but-siloed" => Ok(Self::HeavyButSiloed),
            "moderate" => Ok(Self::Moderate),
            "light" => Ok(Self::Light),
            other => Err(SeatsError::UnrecognizedUsagePattern(other.to_string())),
        }
    }
}

impl TryFrom<String> for UsagePattern {
    type Error = SeatsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for UsagePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
