// src/model/schema.rs

use crate::domain::features::FeatureRecord;
use crate::errors::PredictError;

/// Ordered training-time column names of a model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    columns: Vec<String>,
}

impl ModelSchema {
    /// Fails with `SchemaUnavailable` when there are no columns.
    pub fn new(columns: Vec<String>) -> Result<Self, PredictError> {
        if columns.is_empty() {
            return Err(PredictError::SchemaUnavailable(
                "model lists no input columns".into(),
            ));
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

/// A feature record laid out exactly like a `ModelSchema`.
///
/// Only `reconcile` builds one, so the column list always matches the
/// schema it was reconciled against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledRecord {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl ReconciledRecord {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    /// Back to a plain record, e.g. to reconcile again.
    pub fn to_record(&self) -> FeatureRecord {
        self.columns
            .iter()
            .cloned()
            .zip(self.values.iter().copied())
            .collect()
    }
}

/// Projects `record` onto `schema`.
///
/// Schema columns missing from the record are filled with 0 (an unselected
/// or unknown indicator reads as "false"). Record columns outside the schema
/// are dropped. The output follows the schema's order exactly.
pub fn reconcile(record: &FeatureRecord, schema: &ModelSchema) -> ReconciledRecord {
    let values = schema
        .columns()
        .iter()
        .map(|column| record.get(column).unwrap_or(0.0))
        .collect();

    ReconciledRecord {
        columns: schema.columns().to_vec(),
        values,
    }
}

/// How far a record and a schema have drifted apart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaDrift {
    /// Schema columns the record lacks; `reconcile` zero-fills them.
    pub padded: Vec<String>,
    /// Record columns the schema doesn't know; `reconcile` drops them.
    pub dropped: Vec<String>,
}

pub fn drift(record: &FeatureRecord, schema: &ModelSchema) -> SchemaDrift {
    let padded = schema
        .columns()
        .iter()
        .filter(|c| !record.contains(c))
        .cloned()
        .collect();

    let dropped = record
        .columns()
        .filter(|c| !schema.columns().iter().any(|s| s == c))
        .map(str::to_string)
        .collect();

    SchemaDrift { padded, dropped }
}
