use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state, BROKEN_MODEL, BROMLEY_MODEL};
use serde_json::Value;

fn json(uri: &str, contents: Option<&str>) -> (u16, Value) {
    let state = test_state(contents);
    let resp = handle(get(uri), &state).expect("Failed to handle request");
    let status = resp.status().as_u16();
    let value = serde_json::from_str(&body_string(resp)).expect("body is JSON");
    (status, value)
}

#[test]
fn api_predict_returns_price() {
    let (status, body) = json(
        "/api/predict?size=1000&bedrooms=2&bathrooms=1&area=Area_Bromley&property_type=Flat",
        Some(BROMLEY_MODEL),
    );

    assert_eq!(status, 200);
    assert_eq!(body["predicted_price"].as_f64(), Some(650000.0));
    assert_eq!(body["formatted"], "£ 650,000.00");
    assert_eq!(body["model_fingerprint"].as_str().map(str::len), Some(64));
}

#[test]
fn api_predict_without_model_is_unavailable() {
    let (status, body) = json("/api/predict", None);

    assert_eq!(status, 503);
    assert_eq!(body["kind"], "schema_unavailable");
    assert!(body.get("predicted_price").is_none());
}

#[test]
fn api_predict_with_failing_model_is_server_error() {
    let (status, body) = json("/api/predict", Some(BROKEN_MODEL));

    assert_eq!(status, 500);
    assert_eq!(body["kind"], "prediction_failed");
    assert!(body["error"].as_str().unwrap().contains("expecting 2 features"));
}

#[test]
fn api_areas_lists_table_in_order() {
    let (status, body) = json("/api/areas", None);

    assert_eq!(status, 200);
    let areas = body.as_array().unwrap();
    assert_eq!(areas.len(), 17);
    assert_eq!(areas[0]["area"], "Area_Bromley");
    assert_eq!(areas[0]["average_price"].as_f64(), Some(418750.0));
    assert_eq!(areas[16]["area"], "Area_Western and Paddington");
}
