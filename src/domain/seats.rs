//! Seat activity domain types
//!
//! Seats are the per-user licence records of the analytics API. The generator
//! in this module advances each seat's `last_activity_at` according to a
//! [`UsagePattern`] and stamps a randomly chosen editor on every call.

pub mod editor_pool;
pub mod errors;
pub mod generator;
pub mod template;
pub mod usage_pattern;

pub use editor_pool::EditorPool;
pub use errors::SeatsError;
pub use generator::{ActivityOutcome, SeatActivityGenerator, SeatsTick};
pub use template::{SeatTemplate, SeatsSnapshot};
pub use usage_pattern::UsagePattern;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{EditorId, Login};

/// Configuration for a [`SeatActivityGenerator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatsMockConfig {
    /// Seed for seats whose template carries no activity yet
    pub start_date: NaiveDate,
    /// Hard ceiling for activity advancement, taken at midnight UTC
    pub end_date: NaiveDate,
    pub usage_pattern: UsagePattern,
    #[serde(default)]
    pub heavy_users: Vec<Login>,
    pub editors: Vec<EditorId>,
}

impl SeatsMockConfig {
    pub fn is_heavy_user(&self, login: &Login) -> bool {
        self.heavy_users.contains(login)
    }

    /// Latest timestamp a seat may advance to
    pub fn activity_ceiling(&self) -> DateTime<Utc> {
        self.end_date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Timestamp assumed for seats without recorded activity
    pub fn activity_floor(&self) -> DateTime<Utc> {
        self.start_date.and_time(NaiveTime::MIN).and_utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_data;
    use chrono::TimeZone;

    #[test]
    fn test_ceiling_and_floor_are_midnight_utc() {
        let config = test_data::example_seats_config();
        assert_eq!(
            config.activity_ceiling(),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
        );
        assert_eq!(
            config.activity_floor(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_heavy_user_lookup() {
        let config = test_data::example_seats_config();
        assert!(config.is_heavy_user(&Login::try_new("arfon".to_string()).unwrap()));
        assert!(!config.is_heavy_user(&Login::try_new("octocat".to_string()).unwrap()));
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "usagePattern": "heavy-but-siloed",
            "heavyUsers": ["nathos"],
            "editors": ["vscode/1.96.2/"]
        }"#;
        let config: SeatsMockConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.usage_pattern, UsagePattern::HeavyButSiloed);
        assert_eq!(config.heavy_users.len(), 1);
    }

    #[test]
    fn test_unknown_usage_pattern_fails_deserialization() {
        let json = r#"{
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "usagePattern": "bursty",
            "editors": ["vscode"]
        }"#;
        let error = serde_json::from_str::<SeatsMockConfig>(json).unwrap_err();
        assert!(error.to_string().contains("Unrecognized usage pattern 'bursty'"));
    }
}
