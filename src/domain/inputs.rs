// src/domain/inputs.rs

use crate::domain::features::PropertySelection;
use crate::domain::reference::ReferenceData;
use crate::errors::ServerError;
use std::collections::HashMap;

/// Inclusive slider range; the default is the minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderBounds {
    pub size: Range<f64>,
    pub bedrooms: Range<u32>,
    pub bathrooms: Range<u32>,
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            size: Range {
                min: 52.0,
                max: 1_500_000.0,
            },
            bedrooms: Range { min: 1, max: 10 },
            bathrooms: Range { min: 1, max: 144 },
        }
    }
}

impl PropertySelection {
    /// What the form shows before the user touches anything.
    pub fn initial(reference: &ReferenceData, bounds: &SliderBounds) -> Self {
        Self {
            size: bounds.size.min,
            bedrooms: bounds.bedrooms.min,
            bathrooms: bounds.bathrooms.min,
            area: reference.default_area().to_string(),
            property_type: reference.default_property_type().to_string(),
        }
    }

    /// Reads a submitted form.
    ///
    /// Missing fields keep their initial value and numbers are clamped into
    /// the slider range. Garbage numbers and unknown areas or property types
    /// are rejected.
    pub fn from_params(
        params: &HashMap<String, String>,
        reference: &ReferenceData,
        bounds: &SliderBounds,
    ) -> Result<Self, ServerError> {
        let mut selection = Self::initial(reference, bounds);

        if let Some(raw) = field(params, "size") {
            let size: f64 = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("invalid size: {raw}")))?;
            if !size.is_finite() {
                return Err(ServerError::BadRequest(format!("invalid size: {raw}")));
            }
            selection.size = bounds.size.clamp(size);
        }

        if let Some(raw) = field(params, "bedrooms") {
            selection.bedrooms = bounds.bedrooms.clamp(parse_count("bedrooms", raw)?);
        }

        if let Some(raw) = field(params, "bathrooms") {
            selection.bathrooms = bounds.bathrooms.clamp(parse_count("bathrooms", raw)?);
        }

        if let Some(area) = field(params, "area") {
            if !reference.contains_area(area) {
                return Err(ServerError::BadRequest(format!("unknown area: {area}")));
            }
            selection.area = area.to_string();
        }

        if let Some(ptype) = field(params, "property_type") {
            if !reference.contains_property_type(ptype) {
                return Err(ServerError::BadRequest(format!(
                    "unknown property type: {ptype}"
                )));
            }
            selection.property_type = ptype.to_string();
        }

        Ok(selection)
    }
}

fn field<'a>(params: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    params
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Whole counts; negative input clamps to zero before the range clamp.
fn parse_count(name: &str, raw: &str) -> Result<u32, ServerError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| ServerError::BadRequest(format!("invalid {name}: {raw}")))?;
    Ok(value.clamp(0, i64::from(u32::MAX)) as u32)
}
