//! Canonical example data for fixtures and tests
//!
//! This module centralizes the example configurations and seat template used
//! by the binary's defaults and throughout the test suite.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::metrics::{MetricConfig, MetricsConfig, Trend, ValueRange};
use crate::domain::mock_config::{MockConfig, ModelDescriptor, UpdateFrequency};
use crate::domain::seats::{SeatTemplate, SeatsMockConfig, UsagePattern};
use crate::domain::types::{EditorId, GrowthRate, Login, Volatility};

/// Logins used by the example seat template
pub mod logins {
    pub const NATHOS: &str = "nathos";
    pub const ARFON: &str = "arfon";
    pub const KYANNY: &str = "kyanny";
    pub const OCTOCAT: &str = "octocat";
    pub const MONALISA: &str = "monalisa";

    /// Logins receiving the faster increment under `heavy-but-siloed`
    pub const HEAVY_USERS: [&str; 3] = [NATHOS, ARFON, KYANNY];
}

/// Editor identifiers seats are stamped with
pub mod editors {
    pub const CHAT_PLATFORM: &str = "copilot-chat-platform";
    pub const VSCODE_COPILOT: &str = "vscode/1.96.2/copilot/1.254.0";
    pub const GHOST_PILOT: &str = "GitHubGhostPilot/1.0.0/unknown";
    pub const VSCODE_BARE: &str = "vscode/1.96.2/";
    pub const VSCODE_INSIDERS_CHAT: &str = "vscode/1.97.0-insider/copilot-chat/0.24.2024122001";

    pub const POOL: [&str; 5] = [
        CHAT_PLATFORM,
        VSCODE_COPILOT,
        GHOST_PILOT,
        VSCODE_BARE,
        VSCODE_INSIDERS_CHAT,
    ];
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("example dates are valid")
}

fn growth(rate: f64) -> GrowthRate {
    GrowthRate::try_new(rate).expect("example growth rates are valid")
}

fn volatility(amount: f64) -> Volatility {
    Volatility::try_new(amount).expect("example volatilities are valid")
}

fn dimensions(config: MetricsConfig, start: NaiveDate, end: NaiveDate) -> MockConfig {
    MockConfig {
        start_date: start,
        end_date: end,
        update_frequency: UpdateFrequency::Daily,
        metrics: config,
        models: vec![
            ModelDescriptor::default_model(),
            ModelDescriptor::custom("a-custom-model", "2024-02-01"),
        ],
        languages: ["python", "ruby", "typescript", "go"]
            .map(String::from)
            .to_vec(),
        editors: ["vscode", "neovim"].map(String::from).to_vec(),
        repositories: ["demo/repo1", "demo/repo2"].map(String::from).to_vec(),
    }
}

/// Single-day config with every metric pinned to a fixed value
pub fn example_mock_config() -> MockConfig {
    let metrics = MetricsConfig {
        total_active_users: MetricConfig::fixed(24.0),
        total_engaged_users: MetricConfig::fixed(20.0),
        code_suggestions: MetricConfig::fixed(249.0),
        code_acceptances: MetricConfig::fixed(123.0),
        code_lines_suggested: MetricConfig::fixed(225.0),
        code_lines_accepted: MetricConfig::fixed(135.0),
        chats: MetricConfig::fixed(45.0),
        chat_insertions: MetricConfig::fixed(12.0),
        chat_copies: MetricConfig::fixed(16.0),
        pr_summaries: MetricConfig::fixed(6.0),
        total_code_reviews: MetricConfig::fixed(10.0),
        total_code_review_comments: MetricConfig::fixed(30.0),
    };
    dimensions(metrics, date(2024, 6, 24), date(2024, 6, 24))
}

/// Month-long config exercising every trend shape
pub fn default_mock_config() -> MockConfig {
    let ranged = |base: f64, min: f64, max: f64, trend: Trend| {
        MetricConfig::new(base, ValueRange::new(min, max), trend)
    };

    let metrics = MetricsConfig {
        total_active_users: ranged(100.0, 80.0, 200.0, Trend::Grow).with_growth_rate(growth(0.01)),
        total_engaged_users: ranged(75.0, 50.0, 150.0, Trend::Grow)
            .with_growth_rate(growth(0.015)),
        code_suggestions: ranged(1000.0, 800.0, 2000.0, Trend::Stable)
            .with_volatility(volatility(0.1)),
        code_acceptances: ranged(400.0, 300.0, 800.0, Trend::Stable)
            .with_volatility(volatility(0.1)),
        code_lines_suggested: ranged(3000.0, 2000.0, 6000.0, Trend::Grow)
            .with_growth_rate(growth(0.02)),
        code_lines_accepted: ranged(1200.0, 800.0, 2400.0, Trend::Grow)
            .with_growth_rate(growth(0.02)),
        chats: ranged(300.0, 200.0, 600.0, Trend::Stable).with_volatility(volatility(0.15)),
        chat_insertions: ranged(80.0, 40.0, 160.0, Trend::Stable)
            .with_volatility(volatility(0.2)),
        chat_copies: ranged(90.0, 30.0, 180.0, Trend::Decline).with_growth_rate(growth(0.01)),
        pr_summaries: ranged(40.0, 20.0, 80.0, Trend::Grow).with_growth_rate(growth(0.01)),
        total_code_reviews: MetricConfig::fixed(25.0),
        total_code_review_comments: ranged(120.0, 60.0, 240.0, Trend::Decline)
            .with_growth_rate(growth(-0.005)),
    };
    dimensions(metrics, date(2024, 1, 1), date(2024, 1, 31))
}

/// Year-long seats config with a moderate usage pattern
pub fn example_seats_config() -> SeatsMockConfig {
    SeatsMockConfig {
        start_date: date(2024, 1, 1),
        end_date: date(2024, 12, 31),
        usage_pattern: UsagePattern::Moderate,
        heavy_users: logins::HEAVY_USERS
            .iter()
            .map(|login| Login::try_new(login.to_string()).expect("example logins are valid"))
            .collect(),
        editors: editors::POOL
            .iter()
            .map(|editor| EditorId::try_new(editor.to_string()).expect("example editors are valid"))
            .collect(),
    }
}

/// Four-seat template shaped like the seats endpoint response
pub fn example_seat_template() -> SeatTemplate {
    let seat = |id: u64, login: &str, last_activity_at: serde_json::Value| {
        json!({
            "created_at": "2023-08-01T12:00:00Z",
            "updated_at": "2024-05-30T08:21:11Z",
            "pending_cancellation_date": null,
            "last_activity_at": last_activity_at,
            "last_activity_editor": "vscode/1.96.2/",
            "plan_type": "business",
            "assignee": {
                "login": login,
                "id": id,
                "type": "User",
                "site_admin": false
            }
        })
    };

    SeatTemplate::from_value(json!({
        "total_seats": 4,
        "seats": [
            seat(1001, logins::NATHOS, json!("2024-06-10T09:15:00Z")),
            seat(1002, logins::ARFON, json!("2024-06-11T14:30:00+02:00")),
            seat(1003, logins::OCTOCAT, json!("2024-06-09T18:45:12Z")),
            seat(1004, logins::MONALISA, serde_json::Value::Null),
        ]
    }))
    .expect("example template has a seats array")
}
