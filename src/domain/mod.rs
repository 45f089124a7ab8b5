//! Domain types and generation logic for usage fixtures
//!
//! This module contains the two generators at the heart of the crate, the
//! configuration types they consume, and the validated newtypes they share.

pub mod metrics;
pub mod mock_config;
pub mod seats;
pub mod test_data;
pub mod types;

pub use metrics::{
    DailySnapshot, MetricConfig, MetricId, MetricSeriesGenerator, MetricsConfig, MetricsError,
    Trend, ValueRange,
};
pub use mock_config::{MockConfig, ModelDescriptor, UpdateFrequency};
pub use seats::{
    ActivityOutcome, EditorPool, SeatActivityGenerator, SeatTemplate, SeatsError, SeatsMockConfig,
    SeatsSnapshot, SeatsTick, UsagePattern,
};
pub use types::{EditorId, GrowthRate, Login, Volatility};
