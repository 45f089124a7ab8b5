//! Caller-owned state for repeated seat generation
//!
//! Each call constructs a fresh [`SeatActivityGenerator`]. Stateless calls
//! always start from the original template; stateful calls start from the
//! previous output, which this runner keeps between calls.

use tracing::{debug, instrument};

use crate::domain::{
    SeatActivityGenerator, SeatTemplate, SeatsError, SeatsMockConfig, SeatsSnapshot,
};

#[derive(Debug, Clone)]
pub struct SeatsRun {
    config: SeatsMockConfig,
    original: SeatTemplate,
    latest: Option<SeatsSnapshot>,
    seed: Option<u64>,
    ticks: u64,
}

impl SeatsRun {
    pub fn new(config: SeatsMockConfig, template: SeatTemplate) -> Self {
        Self {
            config,
            original: template,
            latest: None,
            seed: None,
            ticks: 0,
        }
    }

    /// Make editor choices reproducible; stateful ticks derive their seed from it
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate from the original template; repeated calls agree on timestamps
    #[instrument(skip(self))]
    pub fn generate_stateless(&self) -> Result<SeatsSnapshot, SeatsError> {
        generate_once(&self.config, self.original.clone(), self.seed)
    }

    /// Generate from the previous stateful output, falling back to the original
    #[instrument(skip(self), fields(tick = self.ticks))]
    pub fn generate_stateful(&mut self) -> Result<SeatsSnapshot, SeatsError> {
        let template = self
            .latest
            .clone()
            .unwrap_or_else(|| self.original.clone());
        let seed = self.seed.map(|seed| seed.wrapping_add(self.ticks));

        let snapshot = generate_once(&self.config, template, seed)?;
        self.latest = Some(snapshot.clone());
        self.ticks += 1;
        debug!(ticks = self.ticks, "Advanced stateful seat snapshot");
        Ok(snapshot)
    }

    /// Most recent stateful output
    pub fn latest(&self) -> Option<&SeatsSnapshot> {
        self.latest.as_ref()
    }

    /// Forget stateful progress so the next stateful call starts from the original
    pub fn reset(&mut self) {
        self.latest = None;
        self.ticks = 0;
    }
}

fn generate_once(
    config: &SeatsMockConfig,
    template: SeatTemplate,
    seed: Option<u64>,
) -> Result<SeatsSnapshot, SeatsError> {
    let snapshot = match seed {
        Some(seed) => {
            SeatActivityGenerator::seeded(config.clone(), template, seed)?.generate_metrics()
        }
        None => SeatActivityGenerator::new(config.clone(), template)?.generate_metrics(),
    };
    Ok(snapshot)
}
