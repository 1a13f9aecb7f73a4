// src/domain/reference.rs

use std::fmt;

/// Average historical sale price per London area, in table order.
///
/// The keys already carry the `Area_` prefix of the source dataset.
pub const LONDON_AREA_PRICES: &[(&str, f64)] = &[
    ("Area_Bromley", 418750.0),
    ("Area_Croydon", 435294.1176470588),
    ("Area_Eastern", 1001684.3915590268),
    ("Area_Eastern Central", 1410220.4217687075),
    ("Area_Enfield", 501597.28712871287),
    ("Area_Harrow", 510628.26086956525),
    ("Area_Ilford", 585666.6666666666),
    ("Area_Kingston", 570000.0),
    ("Area_Kingston upon Thames", 800996.6666666666),
    ("Area_North Western", 1237283.4899466557),
    ("Area_Northern", 831295.2083578575),
    ("Area_South Eastern", 692104.7799433026),
    ("Area_South Western", 1516724.372564152),
    ("Area_Sutton", 661666.6666666666),
    ("Area_Twickenham", 851258.7475345167),
    ("Area_Western Central", 1625819.108695652),
    ("Area_Western and Paddington", 1706839.3389084507),
];

pub const PROPERTY_TYPES: &[&str] = &["Apartment", "Flat", "House", "Semi-Detached", "Terraced"];

#[derive(Debug, PartialEq)]
pub enum ReferenceError {
    DuplicateArea(String),
    NegativePrice(String),
    DuplicatePropertyType(String),
    Empty(&'static str),
}

impl fmt::Display for ReferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceError::DuplicateArea(area) => write!(f, "Area listed twice: {area}"),
            ReferenceError::NegativePrice(area) => write!(f, "Negative average price for {area}"),
            ReferenceError::DuplicatePropertyType(t) => write!(f, "Property type listed twice: {t}"),
            ReferenceError::Empty(what) => write!(f, "No {what} configured"),
        }
    }
}

impl std::error::Error for ReferenceError {}

/// Immutable lookup tables built once at startup and handed to whoever
/// needs them (encoder, router, templates).
#[derive(Debug, Clone)]
pub struct ReferenceData {
    areas: Vec<(String, f64)>,
    property_types: Vec<String>,
}

impl ReferenceData {
    pub fn new(
        areas: Vec<(String, f64)>,
        property_types: Vec<String>,
    ) -> Result<Self, ReferenceError> {
        if areas.is_empty() {
            return Err(ReferenceError::Empty("areas"));
        }
        if property_types.is_empty() {
            return Err(ReferenceError::Empty("property types"));
        }

        for (i, (area, price)) in areas.iter().enumerate() {
            if areas[..i].iter().any(|(seen, _)| seen == area) {
                return Err(ReferenceError::DuplicateArea(area.clone()));
            }
            if *price < 0.0 {
                return Err(ReferenceError::NegativePrice(area.clone()));
            }
        }

        for (i, ptype) in property_types.iter().enumerate() {
            if property_types[..i].contains(ptype) {
                return Err(ReferenceError::DuplicatePropertyType(ptype.clone()));
            }
        }

        Ok(Self {
            areas,
            property_types,
        })
    }

    /// The fixed London tables.
    pub fn london() -> Result<Self, ReferenceError> {
        Self::new(
            LONDON_AREA_PRICES
                .iter()
                .map(|(area, price)| (area.to_string(), *price))
                .collect(),
            PROPERTY_TYPES.iter().map(|t| t.to_string()).collect(),
        )
    }

    /// Area names paired with their average price, in table order.
    pub fn area_prices(&self) -> &[(String, f64)] {
        &self.areas
    }

    pub fn areas(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(|(area, _)| area.as_str())
    }

    pub fn average_price(&self, area: &str) -> Option<f64> {
        self.areas
            .iter()
            .find(|(name, _)| name == area)
            .map(|(_, price)| *price)
    }

    pub fn contains_area(&self, area: &str) -> bool {
        self.average_price(area).is_some()
    }

    pub fn property_types(&self) -> &[String] {
        &self.property_types
    }

    pub fn contains_property_type(&self, ptype: &str) -> bool {
        self.property_types.iter().any(|t| t == ptype)
    }

    pub fn default_area(&self) -> &str {
        // `new` guarantees at least one area.
        self.areas.first().map(|(a, _)| a.as_str()).unwrap_or_default()
    }

    pub fn default_property_type(&self) -> &str {
        self.property_types
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}
