use anyhow::Result;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use usage_mock::config::{LogFormat, Settings};
use usage_mock::Application;

#[instrument]
fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Initialize tracing; stdout is reserved for the generated fixture
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match settings.logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    info!("Starting usage mock generator");

    let app = Application::from_settings(settings);
    let fixture = app.run()?;
    if app.settings().paths.output.is_none() {
        println!("{}", serde_json::to_string_pretty(&fixture)?);
    }

    Ok(())
}
