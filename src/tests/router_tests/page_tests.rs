use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{body_string, get, test_state, BROKEN_MODEL, BROMLEY_MODEL};

#[test]
fn home_page_predicts_with_initial_values() {
    let state = test_state(Some(BROMLEY_MODEL));

    let resp = handle(get("/"), &state).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("London Property Price Predictor"));
    assert!(body.contains("Average Property Prices by Area"));
    // 100_000 + 500 * 52 + 50_000
    assert!(body.contains("£ 176,000.00"));
}

#[test]
fn submitted_form_drives_the_prediction() {
    let state = test_state(Some(BROMLEY_MODEL));
    let uri = "/?size=1000&bedrooms=2&bathrooms=1&area=Area_Bromley&property_type=Flat";

    let body = body_string(handle(get(uri), &state).unwrap());

    assert!(body.contains("£ 650,000.00"));
    assert!(body.contains(r#"<option value="Flat" selected>"#));
    // Area_Area_Retired is not produced by the form and gets zero-filled
    assert!(body.contains("1 model input(s) not covered by the form were set to 0."));
}

#[test]
fn url_encoded_area_names_are_decoded() {
    let state = test_state(Some(BROMLEY_MODEL));
    let uri = "/?size=100&area=Area_Western+and+Paddington";

    let body = body_string(handle(get(uri), &state).unwrap());

    assert!(body.contains("£ 150,000.00"));
    assert!(body.contains(r#"<option value="Area_Western and Paddington" selected>"#));
}

#[test]
fn missing_model_shows_schema_error_instead_of_price() {
    let state = test_state(None);

    let resp = handle(get("/"), &state).expect("page still renders");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Error in prediction: Model schema unavailable"));
    assert!(!body.contains("£ "));
    assert!(body.contains("No model loaded"));
}

#[test]
fn failing_model_shows_prediction_error() {
    let state = test_state(Some(BROKEN_MODEL));

    let resp = handle(get("/?size=500"), &state).expect("page still renders");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Error in prediction: Prediction failed: X has 3 features"));
}

#[test]
fn predict_fragment_has_no_layout() {
    let state = test_state(Some(BROMLEY_MODEL));

    let body = body_string(handle(get("/predict?size=1000"), &state).unwrap());

    assert!(body.contains("£ 650,000.00"));
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn unknown_area_is_a_bad_request() {
    let state = test_state(Some(BROMLEY_MODEL));

    match handle(get("/?area=Atlantis"), &state) {
        Err(ServerError::BadRequest(msg)) => {
            assert!(msg.contains("Atlantis"));
            let resp = html_error_response(ServerError::BadRequest(msg));
            assert_eq!(resp.status(), 400);
        }
        other => panic!("expected BadRequest, got: {:?}", other.map(|r| r.status())),
    }
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state(Some(BROMLEY_MODEL));

    match handle(get("/admin"), &state) {
        Err(ServerError::NotFound) => {}
        other => panic!("expected NotFound, got: {:?}", other.map(|r| r.status())),
    }

    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("Error 404"));
}

#[test]
fn stylesheet_is_served() {
    let state = test_state(None);

    let resp = handle(get("/static/main.css"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("text/css; charset=utf-8")
    );
    assert!(body_string(resp).contains(".bar-chart"));
}

#[test]
fn model_raising_on_predict_is_displayed_not_fatal() {
    use crate::domain::inputs::SliderBounds;
    use crate::domain::reference::ReferenceData;
    use crate::model::predictor::tests::StubModel;
    use crate::model::ModelStore;
    use crate::router::AppState;
    use std::sync::Arc;

    let mut model = StubModel::new(&["Size", "Bedrooms"]);
    model.fail_with = Some("incompatible dtype".into());

    let state = AppState {
        reference: ReferenceData::london().unwrap(),
        bounds: SliderBounds::default(),
        models: ModelStore::from_model(Arc::new(model)),
        currency_symbol: "£".to_string(),
    };

    let resp = handle(get("/"), &state).expect("page still renders");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Error in prediction: Prediction failed: incompatible dtype"));
}
