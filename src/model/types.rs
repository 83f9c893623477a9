use crate::schema::DataFrame;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A registered model version as reported by the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelVersion {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub current_stage: Option<String>,
    #[serde(default)]
    pub run_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GetLatestVersionsRequest<'a> {
    pub name: &'a str,
    pub stages: Vec<&'a str>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GetLatestVersionsResponse {
    #[serde(default)]
    pub model_versions: Vec<ModelVersion>,
}

#[derive(Debug, Deserialize)]
pub struct GetModelVersionResponse {
    pub model_version: ModelVersion,
}

#[derive(Debug, Serialize)]
pub struct InvocationRequest<'a> {
    pub dataframe_split: &'a DataFrame,
}

/// Scoring servers answer either `{"predictions": [...]}` or a bare list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InvocationResponse {
    Wrapped { predictions: Vec<Value> },
    Bare(Vec<Value>),
}

impl InvocationResponse {
    pub fn into_predictions(self) -> Vec<Value> {
        match self {
            Self::Wrapped { predictions } => predictions,
            Self::Bare(predictions) => predictions,
        }
    }
}
