use churn_serve::{
    Result,
    config::{Config, LogsConfig, ModelConfig, ServerConfig},
    model::Model,
    server,
};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration pointing at the given registry and scoring URLs
pub fn create_test_config(tracking_uri: &str, serving_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        model: ModelConfig {
            tracking_uri: tracking_uri.to_string(),
            uri: "models:/experiment_final_model/Production".to_string(),
            serving_url: serving_url.to_string(),
        },
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Serve the prediction router in-process
pub fn create_test_server(model: Arc<dyn Model>) -> TestServer {
    TestServer::new(server::router(model)).expect("Failed to start test server")
}

/// The default record as it appears on the wire
pub fn default_request_body() -> Value {
    json!({
        "CreditScore": 586,
        "Age": 23.0,
        "Tenure": 2,
        "Balance": 0.0,
        "NumOfProducts": 2,
        "HasCrCard": 0.0,
        "IsActiveMember": 1,
        "EstimatedSalary": 160976.75,
        "Surname": "Lucchese",
        "Geography": "France",
        "Gender": "Female"
    })
}

/// A registry `model_version` record
pub fn model_version_json(version: &str, stage: &str) -> Value {
    json!({
        "name": "experiment_final_model",
        "version": version,
        "current_stage": stage,
        "run_id": format!("run-{version}"),
        "source": format!("mlflow-artifacts:/1/run-{version}/artifacts/model"),
        "status": "READY"
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "0.0.0.0"
  port: 9000
  logs:
    level: "debug"
model:
  tracking_uri: "http://mlflow:5000"
  uri: "models:/churn/Staging"
  serving_url: "http://scoring:5001"
"#;
