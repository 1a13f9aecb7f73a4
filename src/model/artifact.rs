// src/model/artifact.rs

use crate::errors::PredictError;
use crate::model::predictor::RegressionModel;
use crate::model::schema::{ModelSchema, ReconciledRecord};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// A trained regression model as exported to JSON.
///
/// ```json
/// {
///   "feature_names_in": ["Size", "Bedrooms", ...],
///   "estimator": { "type": "linear", "coefficients": [...], "intercept": 0.0 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Input columns in training order. Absent in artifacts exported
    /// without column metadata.
    #[serde(default)]
    pub feature_names_in: Option<Vec<String>>,
    pub estimator: Estimator,
    #[serde(skip)]
    fingerprint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    Linear {
        coefficients: Vec<f64>,
        #[serde(default)]
        intercept: f64,
    },
    /// Random forest: mean of the tree outputs.
    Forest { trees: Vec<RegressionTree> },
}

/// One fitted tree in flat array form. Node `i` is a leaf when
/// `children_left[i] == -1`; otherwise rows with
/// `x[feature[i]] <= threshold[i]` go left.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl ModelArtifact {
    /// Reads and parses the artifact. Any failure here means the model's
    /// schema can't be known, so it is reported as `SchemaUnavailable`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PredictError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            PredictError::SchemaUnavailable(format!(
                "cannot read model artifact {}: {e}",
                path.display()
            ))
        })?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, PredictError> {
        let mut artifact: ModelArtifact = serde_json::from_slice(bytes).map_err(|e| {
            PredictError::SchemaUnavailable(format!("corrupt model artifact: {e}"))
        })?;
        artifact.fingerprint = format!("{:x}", Sha256::digest(bytes));
        Ok(artifact)
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names_in.as_ref().map_or(0, Vec::len)
    }
}

impl RegressionModel for ModelArtifact {
    fn schema(&self) -> Result<ModelSchema, PredictError> {
        match &self.feature_names_in {
            Some(names) => ModelSchema::new(names.clone()),
            None => Err(PredictError::SchemaUnavailable(
                "model artifact carries no feature_names_in".into(),
            )),
        }
    }

    fn predict(&self, row: &ReconciledRecord) -> Result<f64, PredictError> {
        if let Some(names) = &self.feature_names_in {
            if names.as_slice() != row.columns() {
                return Err(PredictError::PredictionFailed(
                    "feature names do not match those seen during fit".into(),
                ));
            }
        }

        let x = row.values();
        match &self.estimator {
            Estimator::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != x.len() {
                    return Err(PredictError::PredictionFailed(format!(
                        "X has {} features, but the model is expecting {} features as input",
                        x.len(),
                        coefficients.len()
                    )));
                }
                Ok(intercept + coefficients.iter().zip(x).map(|(c, v)| c * v).sum::<f64>())
            }
            Estimator::Forest { trees } => {
                if trees.is_empty() {
                    return Err(PredictError::PredictionFailed("forest has no trees".into()));
                }
                let mut total = 0.0;
                for (i, tree) in trees.iter().enumerate() {
                    total += tree
                        .predict(x)
                        .map_err(|msg| PredictError::PredictionFailed(format!("tree {i}: {msg}")))?;
                }
                Ok(total / trees.len() as f64)
            }
        }
    }

    fn fingerprint(&self) -> Option<&str> {
        if self.fingerprint.is_empty() {
            None
        } else {
            Some(self.fingerprint.as_str())
        }
    }
}

impl RegressionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Walks from the root to a leaf.
    pub fn predict(&self, x: &[f64]) -> Result<f64, String> {
        let n = self.node_count();
        if n == 0 {
            return Err("empty tree".into());
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.value.len() != n
        {
            return Err("node arrays have different lengths".into());
        }

        let mut node = 0usize;
        // A well-formed tree reaches a leaf in fewer than `n` steps.
        for _ in 0..n {
            let left = self.children_left[node];
            if left < 0 {
                return Ok(self.value[node]);
            }

            let feature = usize::try_from(self.feature[node])
                .ok()
                .filter(|f| *f < x.len())
                .ok_or_else(|| {
                    format!(
                        "node {node} splits on feature {} but the row has {} features",
                        self.feature[node],
                        x.len()
                    )
                })?;

            let next = if x[feature] <= self.threshold[node] {
                left
            } else {
                self.children_right[node]
            };
            node = usize::try_from(next)
                .ok()
                .filter(|c| *c < n)
                .ok_or_else(|| format!("node {node} points at missing child {next}"))?;
        }

        Err("tree does not terminate".into())
    }
}
