// src/model/store.rs

use crate::errors::PredictError;
use crate::model::artifact::ModelArtifact;
use crate::model::predictor::RegressionModel;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Hands out the model for each render.
///
/// The artifact is read once at startup, or on every render when `reload`
/// is set. A failed load is kept and returned to every caller instead of
/// stopping the server.
pub struct ModelStore {
    path: Option<PathBuf>,
    reload: bool,
    loaded: Result<Arc<dyn RegressionModel>, PredictError>,
}

impl ModelStore {
    pub fn open(path: impl Into<PathBuf>, reload: bool) -> Self {
        let path = path.into();
        let loaded = load(&path);
        Self {
            path: Some(path),
            reload,
            loaded,
        }
    }

    /// Wraps an already built model; never reloads.
    pub fn from_model(model: Arc<dyn RegressionModel>) -> Self {
        Self {
            path: None,
            reload: false,
            loaded: Ok(model),
        }
    }

    pub fn current(&self) -> Result<Arc<dyn RegressionModel>, PredictError> {
        match (&self.path, self.reload) {
            (Some(path), true) => load(path),
            _ => self.loaded.clone(),
        }
    }
}

fn load(path: &Path) -> Result<Arc<dyn RegressionModel>, PredictError> {
    match ModelArtifact::load(path) {
        Ok(artifact) => {
            info!(
                "Loaded model {} ({} input columns, sha256 {})",
                path.display(),
                artifact.feature_count(),
                artifact.fingerprint().unwrap_or("-")
            );
            let model: Arc<dyn RegressionModel> = Arc::new(artifact);
            Ok(model)
        }
        Err(e) => {
            warn!("Model not available: {e}");
            Err(e)
        }
    }
}
