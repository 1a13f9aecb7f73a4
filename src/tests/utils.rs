use crate::domain::inputs::SliderBounds;
use crate::domain::reference::ReferenceData;
use crate::model::ModelStore;
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique path in the temp dir for one test artifact.
pub fn temp_model_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{}_{}.json",
        name,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

/// Linear model over Size and the Bromley indicator, plus one column the
/// form never produces:
/// price = 100_000 + 500 * Size + 50_000 * Area_Area_Bromley
pub const BROMLEY_MODEL: &str = r#"{
    "feature_names_in": ["Size", "Area_Area_Bromley", "Area_Area_Retired"],
    "estimator": {
        "type": "linear",
        "coefficients": [500.0, 50000.0, 1.0],
        "intercept": 100000.0
    }
}"#;

/// Declares three input columns but only has two coefficients.
pub const BROKEN_MODEL: &str = r#"{
    "feature_names_in": ["Size", "Bedrooms", "Bathrooms"],
    "estimator": { "type": "linear", "coefficients": [1.0, 2.0] }
}"#;

/// State backed by an artifact with `contents`, or by no file at all.
pub fn test_state(contents: Option<&str>) -> AppState {
    let path = temp_model_path("router_model");
    if let Some(json) = contents {
        std::fs::write(&path, json).expect("Failed to write test model");
    }

    AppState {
        reference: ReferenceData::london().expect("London tables are valid"),
        bounds: SliderBounds::default(),
        models: ModelStore::open(&path, false),
        currency_symbol: "£".to_string(),
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
