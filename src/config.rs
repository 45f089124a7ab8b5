use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub paths: PathSettings,
    pub logging: LoggingSettings,
}

/// Which generator the binary drives
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    Metrics,
    SeatsStateless,
    SeatsStateful,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorSettings {
    pub mode: GenerationMode,
    /// Seat ticks to run; metric runs always cover the configured window
    pub iterations: u32,
    pub seed: Option<u64>,
}

/// Optional JSON inputs and output; built-in examples are used when unset
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PathSettings {
    pub mock_config: Option<PathBuf>,
    pub seats_config: Option<PathBuf>,
    pub seats_template: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("generator.mode", "metrics")?
            .set_default("generator.iterations", 1)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(Environment::with_prefix("USAGE_MOCK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
