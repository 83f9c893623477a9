use super::types::{InvocationRequest, InvocationResponse};
use crate::{Error, Result, schema::DataFrame};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A loaded model: scores every row of a frame and returns one value per row.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Model: Send + Sync {
    async fn predict(&self, frame: &DataFrame) -> Result<Vec<Value>>;
}

/// Model hosted behind a scoring server's `/invocations` endpoint.
pub struct ServedModel {
    invocations_url: String,
    client: reqwest::Client,
}

impl ServedModel {
    pub fn new(serving_url: &str) -> Self {
        Self {
            invocations_url: format!("{}/invocations", serving_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }

    pub fn invocations_url(&self) -> &str {
        &self.invocations_url
    }
}

#[async_trait]
impl Model for ServedModel {
    async fn predict(&self, frame: &DataFrame) -> Result<Vec<Value>> {
        debug!(
            "Scoring {} row(s) at {}",
            frame.num_rows(),
            self.invocations_url
        );

        let response = self
            .client
            .post(&self.invocations_url)
            .json(&InvocationRequest {
                dataframe_split: frame,
            })
            .send()
            .await
            .map_err(|e| Error::inference(format!("Scoring request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Scoring server returned {}: {}",
                status, text
            )));
        }

        let body: InvocationResponse = response
            .json()
            .await
            .map_err(|e| Error::inference(format!("Failed to parse scoring response: {}", e)))?;

        Ok(body.into_predictions())
    }
}
