mod client;
mod registry;
mod types;
mod uri;

pub use client::*;
pub use registry::ModelRegistry;
pub use types::ModelVersion;
pub use uri::{ModelReference, ModelUri};

use crate::{Result, config::ModelConfig};
use std::sync::Arc;
use tracing::info;

/// Resolves the configured model through the registry and binds it to the
/// scoring endpoint. Called once at startup.
pub async fn load_model(config: &ModelConfig) -> Result<Arc<dyn Model>> {
    let uri = ModelUri::parse(&config.uri)?;
    let registry = ModelRegistry::new(config.tracking_uri.clone());

    info!("Resolving {} via {}", uri, registry.tracking_uri());
    let version = registry.resolve(&uri).await?;

    info!(
        model = %version.name,
        version = %version.version,
        stage = version.current_stage.as_deref().unwrap_or("None"),
        run_id = version.run_id.as_deref().unwrap_or(""),
        "Model resolved"
    );

    let model = ServedModel::new(&config.serving_url);
    info!("Serving predictions through {}", model.invocations_url());

    Ok(Arc::new(model))
}
