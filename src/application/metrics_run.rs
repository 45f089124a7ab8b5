//! Whole-window metric runs
//!
//! The generator only knows how to produce the next day. This runner drives
//! it across the configured window and applies the update frequency, which
//! selects snapshots rather than changing how they are generated.

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use tracing::{info, instrument};

use crate::domain::{
    DailySnapshot, MetricSeriesGenerator, MetricsError, MockConfig, UpdateFrequency,
};

/// Days between kept snapshots for a weekly cadence
pub const DAYS_PER_WEEK: i64 = 7;

/// Generates a full window of snapshots from one [`MockConfig`]
#[derive(Debug, Clone)]
pub struct MetricsRun {
    config: MockConfig,
    seed: Option<u64>,
}

impl MetricsRun {
    pub fn new(config: MockConfig) -> Self {
        Self { config, seed: None }
    }

    /// Make `stable` noise reproducible across runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// One snapshot per day from start to end date inclusive
    #[instrument(skip(self), fields(start = %self.config.start_date, end = %self.config.end_date))]
    pub fn generate_window(&self) -> Result<Vec<DailySnapshot>, MetricsError> {
        let days = self.config.window_days();
        let snapshots = match self.seed {
            Some(seed) => collect_days(
                &mut MetricSeriesGenerator::seeded(self.config.clone(), seed)?,
                days,
            ),
            None => collect_days(&mut MetricSeriesGenerator::new(self.config.clone())?, days),
        };
        info!(days, "Generated metric window");
        Ok(snapshots)
    }

    /// The window's snapshots filtered to the configured update frequency
    pub fn run(&self) -> Result<Vec<DailySnapshot>, MetricsError> {
        let window = self.generate_window()?;
        Ok(select_by_frequency(
            self.config.update_frequency,
            self.config.start_date,
            window,
        ))
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

fn collect_days<R: Rng>(generator: &mut MetricSeriesGenerator<R>, days: u64) -> Vec<DailySnapshot> {
    (0..days).map(|_| generator.generate_metrics()).collect()
}

/// Keep the snapshots a caller sampling at `frequency` would report
///
/// - `daily`: every snapshot
/// - `weekly`: every seventh day counted from `start`
/// - `monthly`: the first snapshot and every first-of-month after it
pub fn select_by_frequency(
    frequency: UpdateFrequency,
    start: NaiveDate,
    snapshots: Vec<DailySnapshot>,
) -> Vec<DailySnapshot> {
    match frequency {
        UpdateFrequency::Daily => snapshots,
        UpdateFrequency::Weekly => snapshots
            .into_iter()
            .filter(|snapshot| (snapshot.date - start).num_days() % DAYS_PER_WEEK == 0)
            .collect(),
        UpdateFrequency::Monthly => snapshots
            .into_iter()
            .enumerate()
            .filter(|(index, snapshot)| *index == 0 || snapshot.date.day() == 1)
            .map(|(_, snapshot)| snapshot)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_data;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn config(start: NaiveDate, end: NaiveDate, frequency: UpdateFrequency) -> MockConfig {
        let mut config = test_data::example_mock_config();
        config.start_date = start;
        config.end_date = end;
        config.update_frequency = frequency;
        config
    }

    #[test]
    fn test_daily_run_covers_window() {
        let run = MetricsRun::new(config(date(6, 24), date(6, 30), UpdateFrequency::Daily));
        let snapshots = run.run().unwrap();

        assert_eq!(snapshots.len(), 7);
        assert_eq!(snapshots[0].date, date(6, 24));
        assert_eq!(snapshots[6].date, date(6, 30));
    }

    #[test]
    fn test_weekly_run_keeps_every_seventh_day() {
        let run = MetricsRun::new(config(date(1, 1), date(1, 31), UpdateFrequency::Weekly));
        let dates: Vec<NaiveDate> = run.run().unwrap().iter().map(|s| s.date).collect();

        assert_eq!(
            dates,
            vec![date(1, 1), date(1, 8), date(1, 15), date(1, 22), date(1, 29)]
        );
    }

    #[test]
    fn test_monthly_run_keeps_first_of_each_month() {
        let run = MetricsRun::new(config(date(1, 15), date(4, 10), UpdateFrequency::Monthly));
        let dates: Vec<NaiveDate> = run.run().unwrap().iter().map(|s| s.date).collect();

        assert_eq!(dates, vec![date(1, 15), date(2, 1), date(3, 1), date(4, 1)]);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let run = MetricsRun::new(test_data::default_mock_config()).with_seed(99);
        assert_eq!(run.generate_window().unwrap(), run.generate_window().unwrap());
    }

    #[test]
    fn test_invalid_window_is_reported() {
        let run = MetricsRun::new(config(date(3, 1), date(2, 1), UpdateFrequency::Daily));
        assert!(matches!(
            run.run(),
            Err(MetricsError::InvalidWindow { .. })
        ));
    }
}
