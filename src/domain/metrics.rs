//! Metric series domain types
//!
//! A [`MetricConfig`] declares how a single usage metric behaves over time: an
//! anchor value, an inclusive envelope the value must stay within, and the
//! trend shape that moves it. [`MetricSeriesGenerator`] turns a full
//! [`MetricsConfig`] into one [`DailySnapshot`] per simulated day.

pub mod catalog;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod snapshot;
pub mod trend;

// Re-export commonly used types
pub use catalog::{MetricId, MetricsConfig};
pub use errors::MetricsError;
pub use generator::MetricSeriesGenerator;
pub use snapshot::DailySnapshot;
pub use trend::Trend;

use serde::{Deserialize, Serialize};

use crate::domain::types::{GrowthRate, Volatility};

/// Inclusive bounds a generated value is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate range holding a single value
    pub fn exactly(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Force a value into `[min, max]`; NaN settles on `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.max(self.min).min(self.max)
    }

    /// Round to the nearest whole count that still lies inside the range
    ///
    /// Assumes a validated range, which always holds at least one whole count.
    pub fn settle(&self, value: f64) -> u64 {
        let rounded = self.clamp(value).round();
        // Validation keeps `0 <= min` and `max <= MAX_COUNT`, so the cast is exact.
        rounded.max(self.min.ceil()).min(self.max.floor()) as u64
    }

    /// Whether at least one whole count lies inside the range
    pub fn holds_whole_count(&self) -> bool {
        self.min.ceil() <= self.max.floor()
    }
}

/// Generation policy for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricConfig {
    /// Anchor value at the start of the window
    pub base_value: f64,
    pub range: ValueRange,
    pub trend: Trend,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<GrowthRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<Volatility>,
}

impl MetricConfig {
    pub fn new(base_value: f64, range: ValueRange, trend: Trend) -> Self {
        Self {
            base_value,
            range,
            trend,
            growth_rate: None,
            volatility: None,
        }
    }

    /// A metric pinned to `value` for every tick
    pub fn fixed(value: f64) -> Self {
        Self::new(value, ValueRange::exactly(value), Trend::Fixed)
    }

    pub fn with_growth_rate(mut self, rate: GrowthRate) -> Self {
        self.growth_rate = Some(rate);
        self
    }

    pub fn with_volatility(mut self, volatility: Volatility) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Configured growth rate, or the default when unset
    pub fn effective_growth_rate(&self) -> f64 {
        self.growth_rate
            .map(GrowthRate::into_inner)
            .unwrap_or(constants::defaults::GROWTH_RATE)
    }

    /// Per-tick decay fraction used by `decline`, always non-negative
    pub fn effective_decline_rate(&self) -> f64 {
        self.growth_rate
            .map(|rate| rate.magnitude())
            .unwrap_or(constants::defaults::GROWTH_RATE)
    }

    /// Configured volatility, or the default when unset
    pub fn effective_volatility(&self) -> f64 {
        self.volatility
            .map(Volatility::into_inner)
            .unwrap_or(constants::defaults::VOLATILITY)
    }

    /// Check `0 <= min <= base_value <= max <= MAX_COUNT` with finite values
    ///
    /// The range must hold a whole count, and a `fixed` base value must itself
    /// be a whole count, since every emitted value is rounded.
    pub fn validate(&self, metric: MetricId) -> Result<(), MetricsError> {
        let ValueRange { min, max } = self.range;
        if !(self.base_value.is_finite() && min.is_finite() && max.is_finite()) {
            return Err(MetricsError::NonFiniteValue { metric });
        }
        if min < 0.0 || min > max {
            return Err(MetricsError::InvalidRange { metric, min, max });
        }
        if max > constants::limits::MAX_COUNT {
            return Err(MetricsError::RangeTooLarge {
                metric,
                max,
                limit: constants::limits::MAX_COUNT,
            });
        }
        if !self.range.contains(self.base_value) {
            return Err(MetricsError::BaseValueOutOfRange {
                metric,
                base: self.base_value,
                min,
                max,
            });
        }
        if self.trend == Trend::Fixed && self.base_value.fract() != 0.0 {
            return Err(MetricsError::FractionalFixedValue {
                metric,
                base: self.base_value,
            });
        }
        if !self.range.holds_whole_count() {
            return Err(MetricsError::NoWholeCount { metric, min, max });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_clamp() {
        let range = ValueRange::new(10.0, 20.0);
        assert_eq!(range.clamp(5.0), 10.0);
        assert_eq!(range.clamp(15.5), 15.5);
        assert_eq!(range.clamp(25.0), 20.0);
        assert_eq!(range.clamp(f64::NAN), 10.0);
    }

    #[test]
    fn test_range_settle_rounds_inside_bounds() {
        let range = ValueRange::new(10.0, 20.0);
        assert_eq!(range.settle(12.4), 12);
        assert_eq!(range.settle(12.5), 13);
        assert_eq!(range.settle(99.0), 20);

        let fractional = ValueRange::new(2.6, 5.4);
        assert_eq!(fractional.settle(2.6), 3);
        assert_eq!(fractional.settle(5.4), 5);
        assert_eq!(fractional.settle(f64::INFINITY), 5);
    }

    #[test]
    fn test_range_without_whole_count() {
        assert!(!ValueRange::new(10.2, 10.8).holds_whole_count());
        assert!(ValueRange::new(10.2, 11.0).holds_whole_count());
        assert!(ValueRange::exactly(7.0).holds_whole_count());
    }

    #[test]
    fn test_effective_defaults() {
        let metric = MetricConfig::new(100.0, ValueRange::new(0.0, 200.0), Trend::Grow);
        assert_eq!(metric.effective_growth_rate(), constants::defaults::GROWTH_RATE);
        assert_eq!(metric.effective_decline_rate(), constants::defaults::GROWTH_RATE);
        assert_eq!(metric.effective_volatility(), constants::defaults::VOLATILITY);
    }

    #[test]
    fn test_decline_rate_ignores_sign() {
        let negative = MetricConfig::new(100.0, ValueRange::new(0.0, 200.0), Trend::Decline)
            .with_growth_rate(GrowthRate::try_new(-0.2).unwrap());
        let positive = negative
            .clone()
            .with_growth_rate(GrowthRate::try_new(0.2).unwrap());
        assert_eq!(negative.effective_decline_rate(), 0.2);
        assert_eq!(positive.effective_decline_rate(), 0.2);
    }

    #[test]
    fn test_validate() {
        let id = MetricId::Chats;
        assert!(MetricConfig::fixed(45.0).validate(id).is_ok());

        let inverted = MetricConfig::new(5.0, ValueRange::new(10.0, 1.0), Trend::Fixed);
        assert!(matches!(
            inverted.validate(id),
            Err(MetricsError::InvalidRange { .. })
        ));

        let negative = MetricConfig::new(0.0, ValueRange::new(-1.0, 1.0), Trend::Fixed);
        assert!(matches!(
            negative.validate(id),
            Err(MetricsError::InvalidRange { .. })
        ));

        let outside = MetricConfig::new(11.0, ValueRange::new(0.0, 10.0), Trend::Fixed);
        assert!(matches!(
            outside.validate(id),
            Err(MetricsError::BaseValueOutOfRange { .. })
        ));

        let infinite = MetricConfig::new(f64::INFINITY, ValueRange::new(0.0, 10.0), Trend::Fixed);
        assert_eq!(
            infinite.validate(id),
            Err(MetricsError::NonFiniteValue { metric: id })
        );
    }

    #[test]
    fn test_validate_rejects_range_without_whole_count() {
        let id = MetricId::Chats;
        let narrow = MetricConfig::new(10.5, ValueRange::new(10.2, 10.8), Trend::Stable);
        assert_eq!(
            narrow.validate(id),
            Err(MetricsError::NoWholeCount {
                metric: id,
                min: 10.2,
                max: 10.8
            })
        );

        let growing = MetricConfig::new(10.5, ValueRange::new(10.2, 10.8), Trend::Grow);
        assert!(matches!(
            growing.validate(id),
            Err(MetricsError::NoWholeCount { .. })
        ));

        // A fixed value in the same range is already rejected as fractional
        let fixed = MetricConfig::new(10.5, ValueRange::new(10.2, 10.8), Trend::Fixed);
        assert!(matches!(
            fixed.validate(id),
            Err(MetricsError::FractionalFixedValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_fractional_fixed_value() {
        let id = MetricId::TotalActiveUsers;
        let fractional = MetricConfig::fixed(24.4);
        assert_eq!(
            fractional.validate(id),
            Err(MetricsError::FractionalFixedValue {
                metric: id,
                base: 24.4
            })
        );

        // Only `fixed` emits its base value verbatim
        let growing = MetricConfig::new(24.4, ValueRange::new(0.0, 100.0), Trend::Grow);
        assert!(growing.validate(id).is_ok());
    }

    #[test]
    fn test_validate_rejects_ranges_beyond_exact_counts() {
        let id = MetricId::CodeLinesSuggested;
        let huge = 1.0e20;
        let oversized = MetricConfig::fixed(huge);
        assert!(matches!(
            oversized.validate(id),
            Err(MetricsError::RangeTooLarge { .. })
        ));

        let limit = constants::limits::MAX_COUNT;
        assert!(MetricConfig::fixed(limit).validate(id).is_ok());
    }

    #[test]
    fn test_validated_config_settles_inside_range() {
        let metric = MetricConfig::new(3.0, ValueRange::new(2.6, 5.4), Trend::Stable);
        assert!(metric.validate(MetricId::Chats).is_ok());

        for value in [-10.0, 0.0, 2.6, 2.9, 4.5, 5.4, 5.6, 1.0e9, f64::NAN] {
            let settled = metric.range.settle(value) as f64;
            assert!(metric.range.contains(settled), "{value} settled to {settled}");
        }
    }

    #[test]
    fn test_deserializes_camel_case_fields() {
        let json = r#"{
            "baseValue": 120,
            "range": { "min": 100, "max": 400 },
            "trend": "grow",
            "growthRate": 0.02
        }"#;
        let metric: MetricConfig = serde_json::from_str(json).unwrap();
        assert_eq!(metric.base_value, 120.0);
        assert_eq!(metric.trend, Trend::Grow);
        assert_eq!(metric.effective_growth_rate(), 0.02);
        assert!(metric.volatility.is_none());
    }

    #[test]
    fn test_deserialization_rejects_unknown_trend() {
        let json = r#"{ "baseValue": 1, "range": { "min": 0, "max": 2 }, "trend": "spiky" }"#;
        let error = serde_json::from_str::<MetricConfig>(json).unwrap_err();
        assert!(error.to_string().contains("Unrecognized trend 'spiky'"));
    }
}
