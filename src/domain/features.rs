// src/domain/features.rs

use crate::domain::reference::ReferenceData;

pub const SIZE: &str = "Size";
pub const BEDROOMS: &str = "Bedrooms";
pub const BATHROOMS: &str = "Bathrooms";
pub const AREA_AVG_PRICE: &str = "Area_Avg_Price";
pub const AREA_PREFIX: &str = "Area_";
pub const PROPERTY_TYPE_PREFIX: &str = "Property Type_";

/// One candidate property as chosen in the sidebar form.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySelection {
    pub size: f64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: String,
    pub property_type: String,
}

/// Column name -> value, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRecord {
    columns: Vec<(String, f64)>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `column`, replacing the value in place if it already exists.
    pub fn insert(&mut self, column: impl Into<String>, value: f64) {
        let column = column.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.columns.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.get(column).is_some()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }
}

impl FromIterator<(String, f64)> for FeatureRecord {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut record = FeatureRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

pub fn area_column(area: &str) -> String {
    format!("{AREA_PREFIX}{area}")
}

pub fn property_type_column(ptype: &str) -> String {
    format!("{PROPERTY_TYPE_PREFIX}{ptype}")
}

/// Builds the flat feature record for one selection.
///
/// The one-hot blocks walk the whole area table and property type list, so
/// every area and type gets a column even when it isn't selected. An area
/// missing from the table gets an average price of 0.0.
pub fn encode(selection: &PropertySelection, reference: &ReferenceData) -> FeatureRecord {
    let mut record = FeatureRecord::new();

    record.insert(SIZE, selection.size);
    record.insert(BEDROOMS, f64::from(selection.bedrooms));
    record.insert(BATHROOMS, f64::from(selection.bathrooms));
    record.insert(
        AREA_AVG_PRICE,
        reference.average_price(&selection.area).unwrap_or(0.0),
    );

    for area in reference.areas() {
        record.insert(area_column(area), indicator(area == selection.area));
    }

    for ptype in reference.property_types() {
        record.insert(
            property_type_column(ptype),
            indicator(*ptype == selection.property_type),
        );
    }

    record
}

fn indicator(selected: bool) -> f64 {
    if selected {
        1.0
    } else {
        0.0
    }
}
