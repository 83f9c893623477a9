use crate::{Error, Result};
use std::fmt;

const SCHEME: &str = "models:/";

/// How a registry URI pins the model: by deployment stage or by version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReference {
    Stage(String),
    Version(u64),
}

/// Parsed `models:/<name>/<stage-or-version>` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelUri {
    pub name: String,
    pub reference: ModelReference,
}

impl ModelUri {
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| Error::invalid_uri(uri, format!("expected '{SCHEME}' scheme")))?;

        let (name, reference) = rest
            .trim_end_matches('/')
            .rsplit_once('/')
            .ok_or_else(|| Error::invalid_uri(uri, "expected '<name>/<stage or version>'"))?;

        if name.is_empty() || name.contains('/') {
            return Err(Error::invalid_uri(uri, "model name must be a single non-empty segment"));
        }
        if reference.is_empty() {
            return Err(Error::invalid_uri(uri, "missing stage or version"));
        }

        let reference = match reference.parse::<u64>() {
            Ok(version) => ModelReference::Version(version),
            Err(_) => ModelReference::Stage(reference.to_string()),
        };

        Ok(Self {
            name: name.to_string(),
            reference,
        })
    }
}

impl fmt::Display for ModelUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference {
            ModelReference::Stage(stage) => write!(f, "{SCHEME}{}/{}", self.name, stage),
            ModelReference::Version(version) => write!(f, "{SCHEME}{}/{}", self.name, version),
        }
    }
}
