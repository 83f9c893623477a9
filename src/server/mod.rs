pub mod handlers;
pub mod types;

use crate::{Result, config::Config, model::Model};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Routes for a server scoring with `model`.
pub fn router(model: Arc<dyn Model>) -> Router {
    let app_state = handlers::AppState { model };

    Router::new()
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    // Registry lookup happens once; a failure here aborts startup.
    let model = crate::model::load_model(&config.model).await?;

    let app = router(model);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
