use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Base URL of the tracking server hosting the model registry.
    #[serde(default = "default_tracking_uri")]
    pub tracking_uri: String,
    /// `models:/<name>/<stage>` or `models:/<name>/<version>`.
    #[serde(default = "default_model_uri")]
    pub uri: String,
    /// Scoring server exposing `/invocations` for the resolved model.
    #[serde(default = "default_serving_url")]
    pub serving_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            tracking_uri: default_tracking_uri(),
            uri: default_model_uri(),
            serving_url: default_serving_url(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tracking_uri() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_model_uri() -> String {
    "models:/experiment_final_model/Production".to_string()
}

fn default_serving_url() -> String {
    "http://127.0.0.1:5001".to_string()
}
