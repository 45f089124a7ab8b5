use crate::domain::{MockConfig, SeatTemplate, SeatsMockConfig};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
    serde_json::from_str(&contents).map_err(|e| Error::load(path, e))
}

/// Load a metric simulation config in its camelCase JSON form
pub fn load_mock_config(path: &Path) -> Result<MockConfig> {
    let config: MockConfig = read_json(path)?;
    config.validate().map_err(|e| Error::load(path, e))?;
    debug!(path = %path.display(), "Loaded mock config");
    Ok(config)
}

pub fn load_seats_config(path: &Path) -> Result<SeatsMockConfig> {
    let config = read_json(path)?;
    debug!(path = %path.display(), "Loaded seats config");
    Ok(config)
}

/// Load a seat template; fails when the document has no `seats` array
pub fn load_seat_template(path: &Path) -> Result<SeatTemplate> {
    let value: serde_json::Value = read_json(path)?;
    let template = SeatTemplate::from_value(value).map_err(|e| Error::load(path, e))?;
    debug!(path = %path.display(), seats = template.len(), "Loaded seat template");
    Ok(template)
}

/// Write any output pretty-printed, creating parent directories as needed
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered)?;
    info!(path = %path.display(), "Wrote generated fixture");
    Ok(())
}
