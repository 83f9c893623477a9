use super::{
    types::{
        GetLatestVersionsRequest, GetLatestVersionsResponse, GetModelVersionResponse,
        ModelVersion,
    },
    uri::{ModelReference, ModelUri},
};
use crate::{Error, Result};
use tracing::debug;

const LATEST_VERSIONS_PATH: &str = "/api/2.0/mlflow/registered-models/get-latest-versions";
const MODEL_VERSION_PATH: &str = "/api/2.0/mlflow/model-versions/get";

/// Client for the tracking server's model registry REST API.
pub struct ModelRegistry {
    tracking_uri: String,
    client: reqwest::Client,
}

impl ModelRegistry {
    pub fn new(tracking_uri: impl Into<String>) -> Self {
        Self {
            tracking_uri: tracking_uri.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn tracking_uri(&self) -> &str {
        &self.tracking_uri
    }

    /// Resolves a registry URI to a concrete model version.
    pub async fn resolve(&self, uri: &ModelUri) -> Result<ModelVersion> {
        match &uri.reference {
            ModelReference::Stage(stage) => self.latest_in_stage(&uri.name, stage).await,
            ModelReference::Version(version) => self.get_version(&uri.name, *version).await,
        }
    }

    async fn latest_in_stage(&self, name: &str, stage: &str) -> Result<ModelVersion> {
        debug!("Looking up latest version of '{}' in stage '{}'", name, stage);

        let url = format!("{}{}", self.tracking_uri, LATEST_VERSIONS_PATH);
        let response = self
            .client
            .post(&url)
            .json(&GetLatestVersionsRequest {
                name,
                stages: vec![stage],
            })
            .send()
            .await
            .map_err(|e| Error::registry(format!("Failed to reach registry at {}: {}", url, e)))?;

        let body: GetLatestVersionsResponse = Self::read_json(response).await?;

        body.model_versions
            .into_iter()
            .max_by_key(|v| v.version.parse::<u64>().unwrap_or(0))
            .ok_or_else(|| {
                Error::registry(format!("No version of model '{}' in stage '{}'", name, stage))
            })
    }

    async fn get_version(&self, name: &str, version: u64) -> Result<ModelVersion> {
        debug!("Looking up version {} of '{}'", version, name);

        let url = format!("{}{}", self.tracking_uri, MODEL_VERSION_PATH);
        let version = version.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("name", name), ("version", version.as_str())])
            .send()
            .await
            .map_err(|e| Error::registry(format!("Failed to reach registry at {}: {}", url, e)))?;

        let body: GetModelVersionResponse = Self::read_json(response).await?;
        Ok(body.model_version)
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::registry(format!("Registry returned {}: {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::registry(format!("Failed to parse registry response: {}", e)))
    }
}
