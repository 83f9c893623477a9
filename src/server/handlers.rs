use super::types::{ErrorResponse, PredictionResponse};
use crate::{
    model::Model,
    schema::{PredictionRequest, create_dataframe},
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Model>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload.map_err(reject)?;
    debug!("Received prediction request: {:?}", request);

    let frame = create_dataframe(&request);

    let predictions = state.model.predict(&frame).await.map_err(|e| {
        error!("Model prediction failed: {}", e);
        internal_error(e.to_string())
    })?;

    let prediction = predictions.into_iter().next().ok_or_else(|| {
        error!("Model returned no predictions");
        internal_error("Inference error: model returned no predictions")
    })?;

    debug!("Prediction: {}", prediction);
    Ok(Json(PredictionResponse { prediction }))
}

fn reject(rejection: JsonRejection) -> ApiError {
    let error = match &rejection {
        JsonRejection::JsonDataError(_) => "Invalid field value",
        JsonRejection::JsonSyntaxError(_) => "Malformed JSON body",
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`"
        }
        _ => "Invalid request body",
    };
    let status = rejection.status();
    let detail = rejection.body_text();
    warn!("Rejected prediction request ({}): {}", status, detail);

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            detail: Some(detail),
        }),
    )
}

fn internal_error(message: impl Into<String>) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.into(),
            detail: None,
        }),
    )
}
