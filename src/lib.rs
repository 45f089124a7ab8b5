//! Usage Mock - synthetic usage metrics and seat activity for analytics fixtures
//!
//! Two generators produce plausible stand-ins for live product analytics data:
//! [`MetricSeriesGenerator`] emits one snapshot of twelve usage metrics per
//! simulated day, shaped by declarative trends and clamped into fixed
//! envelopes, and [`SeatActivityGenerator`] advances per-user activity
//! timestamps according to a usage-intensity policy.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{Application, MetricsRun, SeatsRun};
pub use domain::{MetricSeriesGenerator, SeatActivityGenerator};
pub use error::{Error, Result};
