use crate::application::{MetricsRun, SeatsRun};
use crate::config::{GenerationMode, Settings};
use crate::domain::{test_data, MockConfig, SeatTemplate, SeatsMockConfig};
use crate::infrastructure::{load_mock_config, load_seat_template, load_seats_config, write_json};
use crate::Result;
use serde_json::Value;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        Ok(Self::from_settings(settings))
    }

    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the configured mode and return the generated fixture as JSON
    ///
    /// The fixture is also written to the output path when one is configured.
    #[instrument(skip(self), fields(mode = ?self.settings.generator.mode))]
    pub fn run(&self) -> Result<Value> {
        let generator = &self.settings.generator;
        info!(seed = ?generator.seed, "Generating usage fixture");

        let fixture = match generator.mode {
            GenerationMode::Metrics => {
                let mut run = MetricsRun::new(self.mock_config()?);
                if let Some(seed) = generator.seed {
                    run = run.with_seed(seed);
                }
                serde_json::to_value(run.run()?)?
            }
            GenerationMode::SeatsStateless | GenerationMode::SeatsStateful => {
                let mut run = SeatsRun::new(self.seats_config()?, self.seat_template()?);
                if let Some(seed) = generator.seed {
                    run = run.with_seed(seed);
                }
                let mut snapshots = Vec::new();
                for _ in 0..generator.iterations {
                    let snapshot = if generator.mode == GenerationMode::SeatsStateful {
                        run.generate_stateful()?
                    } else {
                        run.generate_stateless()?
                    };
                    snapshots.push(snapshot);
                }
                serde_json::to_value(snapshots)?
            }
        };

        if let Some(path) = &self.settings.paths.output {
            write_json(path, &fixture)?;
        }
        info!("Fixture generated successfully");
        Ok(fixture)
    }

    fn mock_config(&self) -> Result<MockConfig> {
        match &self.settings.paths.mock_config {
            Some(path) => load_mock_config(path),
            None => Ok(test_data::default_mock_config()),
        }
    }

    fn seats_config(&self) -> Result<SeatsMockConfig> {
        match &self.settings.paths.seats_config {
            Some(path) => load_seats_config(path),
            None => Ok(test_data::example_seats_config()),
        }
    }

    fn seat_template(&self) -> Result<SeatTemplate> {
        match &self.settings.paths.seats_template {
            Some(path) => load_seat_template(path),
            None => Ok(test_data::example_seat_template()),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
