// src/model/predictor.rs

use crate::domain::features::{encode, PropertySelection};
use crate::domain::reference::ReferenceData;
use crate::errors::PredictError;
use crate::model::schema::{drift, reconcile, ModelSchema, ReconciledRecord};
use log::debug;

/// What the app needs from a trained regression model.
pub trait RegressionModel: Send + Sync {
    /// Training-time input columns, in training order.
    fn schema(&self) -> Result<ModelSchema, PredictError>;

    /// Scores one row laid out like `schema()`.
    fn predict(&self, row: &ReconciledRecord) -> Result<f64, PredictError>;

    /// Short identifier of the loaded artifact, if any.
    fn fingerprint(&self) -> Option<&str> {
        None
    }
}

/// Runs the model on one row and checks the output is a usable price.
pub fn predict(model: &dyn RegressionModel, row: &ReconciledRecord) -> Result<f64, PredictError> {
    let price = model.predict(row)?;
    if !price.is_finite() {
        return Err(PredictError::PredictionFailed(format!(
            "model returned a non-finite value ({price})"
        )));
    }
    Ok(price)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub price: f64,
    /// How many schema columns were zero-filled.
    pub columns_padded: usize,
    /// How many encoded columns the model ignored.
    pub columns_dropped: usize,
}

/// encode -> reconcile -> predict for one selection.
pub fn estimate(
    selection: &PropertySelection,
    reference: &ReferenceData,
    model: &dyn RegressionModel,
) -> Result<Estimate, PredictError> {
    let record = encode(selection, reference);
    let schema = model.schema()?;

    let drift = drift(&record, &schema);
    debug!(
        "Encoded {} columns for a {}-column model",
        record.len(),
        schema.columns().len()
    );
    if !drift.dropped.is_empty() {
        debug!("Model ignores encoded columns: {:?}", drift.dropped);
    }

    let row = reconcile(&record, &schema);
    let price = predict(model, &row)?;

    Ok(Estimate {
        price,
        columns_padded: drift.padded.len(),
        columns_dropped: drift.dropped.len(),
    })
}
