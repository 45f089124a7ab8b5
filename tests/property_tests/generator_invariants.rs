//! Property-based tests for generator invariants
//!
//! These tests verify that emitted values respect their envelopes and that
//! seat activity never moves past the configured end date.

use chrono::{NaiveDate, TimeDelta};
use proptest::prelude::*;
use serde_json::json;
use usage_mock::domain::{
    test_data, MetricConfig, MetricId, MetricSeriesGenerator, MetricsConfig, MockConfig,
    SeatActivityGenerator, SeatTemplate, SeatsMockConfig, Trend, UsagePattern, ValueRange,
};
use usage_mock::domain::{GrowthRate, Volatility};

// Property test generators
pub mod generators {
    use super::*;

    pub fn trend() -> impl Strategy<Value = Trend> {
        prop_oneof![
            Just(Trend::Grow),
            Just(Trend::Stable),
            Just(Trend::Fixed),
            Just(Trend::Decline),
        ]
    }

    pub fn usage_pattern() -> impl Strategy<Value = UsagePattern> {
        prop_oneof![
            Just(UsagePattern::Heavy),
            Just(UsagePattern::HeavyButSiloed),
            Just(UsagePattern::Moderate),
            Just(UsagePattern::Light),
        ]
    }

    /// Generate metric configs that pass validation
    ///
    /// Bounds may be fractional, but every range spans at least one whole
    /// count and `fixed` base values are whole counts.
    pub fn metric_config() -> impl Strategy<Value = MetricConfig> {
        (
            0.0f64..10_000.0,
            1.0f64..10_000.0,
            0.0f64..=1.0,
            trend(),
            -0.99f64..2.0,
            0.0f64..=1.0,
        )
            .prop_map(|(min, span, position, trend, rate, volatility)| {
                let max = min + span;
                let base = if trend == Trend::Fixed {
                    let (low, high) = (min.ceil(), max.floor());
                    low + ((high - low) * position).round()
                } else {
                    min + span * position
                };
                MetricConfig::new(base, ValueRange::new(min, max), trend)
                    .with_growth_rate(GrowthRate::try_new(rate).expect("rate above -1"))
                    .with_volatility(Volatility::try_new(volatility).expect("volatility in [0, 1]"))
            })
    }

    /// Hours before the end date at which a seat's activity starts
    pub fn hours_before_end() -> impl Strategy<Value = i64> {
        0i64..2_000
    }
}

/// Margin keeping step-size checks clear of floating point rounding
const STEP_TOLERANCE: f64 = 1.0e-6;

fn mock_config(metric: MetricConfig) -> MockConfig {
    let mut config = test_data::example_mock_config();
    config.metrics = MetricsConfig::uniform(metric);
    config
}

fn series(config: MockConfig, seed: u64, days: usize) -> Vec<u64> {
    let mut generator = MetricSeriesGenerator::seeded(config, seed).expect("valid config");
    (0..days)
        .map(|_| generator.generate_metrics().get(MetricId::TotalActiveUsers))
        .collect()
}

proptest! {
    #[test]
    fn prop_values_stay_within_range(
        metric in generators::metric_config(),
        seed in any::<u64>(),
        days in 1usize..120,
    ) {
        let range = metric.range;
        let config = mock_config(metric);
        let mut generator = MetricSeriesGenerator::seeded(config, seed).expect("valid config");

        for _ in 0..days {
            let snapshot = generator.generate_metrics();
            for id in MetricId::ALL {
                let value = snapshot.get(id) as f64;
                prop_assert!(
                    range.contains(value),
                    "{} = {} outside [{}, {}]",
                    id,
                    value,
                    range.min,
                    range.max
                );
            }
        }
    }

    #[test]
    fn prop_fixed_metrics_never_change(
        base in 0u32..1_000_000,
        seed in any::<u64>(),
        days in 1usize..60,
    ) {
        let config = mock_config(MetricConfig::fixed(f64::from(base)));
        let values = series(config, seed, days);
        prop_assert!(values.iter().all(|value| *value == u64::from(base)));
    }

    #[test]
    fn prop_generated_configs_validate(metric in generators::metric_config()) {
        prop_assert!(metric.validate(MetricId::Chats).is_ok());
    }

    #[test]
    fn prop_grow_is_strictly_increasing(
        base in 1.0f64..100_000.0,
        rate in 0.01f64..0.5,
        seed in any::<u64>(),
    ) {
        // Each step then adds at least one whole count before rounding
        prop_assume!(base * rate >= 1.0 + STEP_TOLERANCE);

        let metric = MetricConfig::new(base, ValueRange::new(0.0, 1.0e12), Trend::Grow)
            .with_growth_rate(GrowthRate::try_new(rate).expect("positive rate"));
        let values = series(mock_config(metric), seed, 30);
        prop_assert!(
            values.windows(2).all(|pair| pair[0] < pair[1]),
            "not strictly increasing: {:?}",
            values
        );
    }

    #[test]
    fn prop_decline_is_strictly_decreasing_above_min(
        base in 1.0f64..100_000.0,
        rate in 0.01f64..0.99,
        negative in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let signed = if negative { -rate } else { rate };
        let metric = MetricConfig::new(base, ValueRange::new(0.0, 1.0e9), Trend::Decline)
            .with_growth_rate(GrowthRate::try_new(signed).expect("rate above -1"));
        let values = series(mock_config(metric), seed, 60);

        for (day, pair) in values.windows(2).enumerate() {
            prop_assert!(pair[0] >= pair[1]);

            // Strict while the day's decay still removes at least one whole count
            let unrounded = base * (1.0 - rate).powf(day as f64);
            if unrounded * rate >= 1.0 + STEP_TOLERANCE {
                prop_assert!(
                    pair[0] > pair[1],
                    "day {} did not decrease: {:?}",
                    day,
                    values
                );
            }
        }
    }

    #[test]
    fn prop_seat_activity_never_passes_end_date(
        pattern in generators::usage_pattern(),
        offsets in proptest::collection::vec(generators::hours_before_end(), 1..6),
        ticks in 1usize..20,
        seed in any::<u64>(),
    ) {
        let config = SeatsMockConfig {
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30).expect("valid date"),
            usage_pattern: pattern,
            ..test_data::example_seats_config()
        };
        let ceiling = config.activity_ceiling();

        let seats: Vec<_> = offsets
            .iter()
            .enumerate()
            .map(|(index, hours)| {
                let at = ceiling - TimeDelta::hours(*hours);
                json!({
                    "assignee": { "login": format!("user{index}") },
                    "last_activity_at": at.to_rfc3339(),
                })
            })
            .collect();
        let mut snapshot = SeatTemplate::from_value(json!({ "seats": seats }))
            .expect("valid template");

        for tick in 0..ticks {
            let mut generator = SeatActivityGenerator::seeded(
                config.clone(),
                snapshot,
                seed.wrapping_add(tick as u64),
            )
            .expect("valid template");
            let result = generator.generate_tick();
            for outcome in result.outcomes.values() {
                prop_assert!(outcome.timestamp() <= ceiling);
            }
            snapshot = result.snapshot;
        }
    }
}
