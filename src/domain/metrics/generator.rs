//! Day-by-day metric series generation
//!
//! The generator owns a date cursor that starts at the configured start date
//! and advances exactly one day per [`MetricSeriesGenerator::generate_metrics`]
//! call. Values are computed from the number of days elapsed since the start:
//!
//! - `fixed`: the base value
//! - `grow`: `base * (1 + rate)^days`
//! - `decline`: `base * (1 - |rate|)^days`
//! - `stable`: `base + uniform(-volatility * base, volatility * base)`, drawn
//!   independently every tick
//!
//! and then clamped into the metric's range and rounded to a whole count.
//! The cursor does not stop at the end date; clamping is the only bound.
//!
//! `stable` draws from the generator's random source, so its output is only
//! reproducible when the source is seeded (see [`MetricSeriesGenerator::seeded`]).

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use super::{DailySnapshot, MetricConfig, MetricId, MetricsError, Trend};
use crate::domain::mock_config::MockConfig;

/// Produces one [`DailySnapshot`] per call
#[derive(Debug)]
pub struct MetricSeriesGenerator<R = StdRng> {
    config: MockConfig,
    cursor: NaiveDate,
    rng: R,
    overrun_reported: bool,
}

impl MetricSeriesGenerator<StdRng> {
    /// Generator backed by an entropy-seeded random source
    pub fn new(config: MockConfig) -> Result<Self, MetricsError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl MetricSeriesGenerator<ChaCha8Rng> {
    /// Generator whose `stable` noise is reproducible for a given seed
    pub fn seeded(config: MockConfig, seed: u64) -> Result<Self, MetricsError> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MetricSeriesGenerator<R> {
    /// Generator drawing noise from the supplied random source
    pub fn with_rng(config: MockConfig, rng: R) -> Result<Self, MetricsError> {
        config.validate()?;

        info!(
            start = %config.start_date,
            end = %config.end_date,
            frequency = %config.update_frequency,
            "Metric series generator initialized"
        );

        Ok(Self {
            cursor: config.start_date,
            config,
            rng,
            overrun_reported: false,
        })
    }

    /// Produce the snapshot for the current date and advance the cursor by one day
    pub fn generate_metrics(&mut self) -> DailySnapshot {
        let date = self.cursor;
        let days = self.days_since_start();

        if date > self.config.end_date && !self.overrun_reported {
            warn!(
                %date,
                end = %self.config.end_date,
                "Generating past the configured end date; values rely on range clamping"
            );
            self.overrun_reported = true;
        }

        let mut snapshot = DailySnapshot::blank(date, &self.config);
        for id in MetricId::ALL {
            let metric = self.config.metrics.get(id);
            let value = metric.range.settle(trend_value(metric, days, &mut self.rng));
            snapshot.set(id, value);
        }

        match self.cursor.checked_add_days(Days::new(1)) {
            Some(next) => self.cursor = next,
            None => warn!(%date, "Date cursor cannot advance past the calendar limit"),
        }

        debug!(%date, days_since_start = days, "Generated daily metrics snapshot");
        snapshot
    }

    /// Date the next snapshot will carry
    pub fn current_date(&self) -> NaiveDate {
        self.cursor
    }

    pub fn days_since_start(&self) -> i64 {
        (self.cursor - self.config.start_date).num_days()
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

/// Unclamped value of `metric` after `days` ticks
fn trend_value<R: Rng + ?Sized>(metric: &MetricConfig, days: i64, rng: &mut R) -> f64 {
    let base = metric.base_value;
    let elapsed = days as f64;

    match metric.trend {
        Trend::Fixed => base,
        Trend::Grow => base * (1.0 + metric.effective_growth_rate()).powf(elapsed),
        Trend::Decline => {
            let factor = (1.0 - metric.effective_decline_rate()).max(0.0);
            base * factor.powf(elapsed)
        }
        Trend::Stable => {
            let amplitude = metric.effective_volatility() * base.abs();
            if amplitude > 0.0 {
                base + rng.gen_range(-amplitude..=amplitude)
            } else {
                base
            }
        }
    }
}
