mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    if let Ok(uri) = env::var("MODEL_URI") {
        config.model.uri = uri;
    }
    if let Ok(tracking_uri) = env::var("MLFLOW_TRACKING_URI") {
        config.model.tracking_uri = tracking_uri;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads a YAML config file. A missing file yields the built-in defaults.
pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = match tokio::fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    // An empty document deserializes to unit, not to a map.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(&config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    let model = &config.model;
    for (key, value) in [
        ("model.tracking_uri", &model.tracking_uri),
        ("model.uri", &model.uri),
        ("model.serving_url", &model.serving_url),
    ] {
        if value.trim().is_empty() {
            return Err(Error::config(format!("'{}' must not be empty", key)));
        }
    }
    Ok(())
}
