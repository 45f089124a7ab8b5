//! Application services
//!
//! This module contains the runners that own cross-call generation state on
//! behalf of a caller, and the [`Application`] that wires them to settings
//! and fixture files.

pub mod app;
pub mod metrics_run;
pub mod seats_run;

pub use app::Application;
pub use metrics_run::{select_by_frequency, MetricsRun};
pub use seats_run::SeatsRun;
