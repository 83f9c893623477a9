use async_trait::async_trait;
use churn_serve::{Error, Result, model::Model, schema::DataFrame};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Deterministic model for testing. Records every frame it scores.
#[derive(Debug, Clone)]
pub struct StubModel {
    pub frames: Arc<Mutex<Vec<DataFrame>>>,
    pub output: Vec<Value>,
    pub error: Option<String>,
}

impl StubModel {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
            output: vec![Value::from(0)],
            error: None,
        }
    }

    pub fn with_output(mut self, output: Vec<Value>) -> Self {
        self.output = output;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_frames(&self) -> Vec<DataFrame> {
        self.frames.lock().unwrap().clone()
    }
}

#[async_trait]
impl Model for StubModel {
    async fn predict(&self, frame: &DataFrame) -> Result<Vec<Value>> {
        self.frames.lock().unwrap().push(frame.clone());

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.output.clone())
    }
}

impl Default for StubModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores a row from its own contents so different inputs give different
/// predictions: churn (1) when the customer is inactive or holds a single
/// product, otherwise 0.
#[derive(Debug, Default)]
pub struct RuleModel;

#[async_trait]
impl Model for RuleModel {
    async fn predict(&self, frame: &DataFrame) -> Result<Vec<Value>> {
        (0..frame.num_rows())
            .map(|row| {
                let active = frame
                    .get(row, "IsActiveMember")
                    .and_then(Value::as_f64)
                    .ok_or_else(|| Error::inference("missing feature IsActiveMember"))?;
                let products = frame
                    .get(row, "NumOfProducts")
                    .and_then(Value::as_i64)
                    .ok_or_else(|| Error::inference("missing feature NumOfProducts"))?;

                Ok(Value::from(u8::from(active == 0.0 || products == 1)))
            })
            .collect()
    }
}
