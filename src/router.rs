use crate::domain::features::PropertySelection;
use crate::domain::inputs::SliderBounds;
use crate::domain::reference::ReferenceData;
use crate::errors::{PredictError, ServerError};
use crate::model::{estimate, Estimate, ModelStore, RegressionModel};
use crate::responses::{html_response, json_response, stylesheet_response, ResultResp};
use crate::templates::components::{format_currency, prediction_result};
use crate::templates::pages::{predictor_page, PredictorVm};
use astra::Request;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

/// Everything a render needs. Built once in `main`, shared read-only by
/// every worker.
pub struct AppState {
    pub reference: ReferenceData,
    pub bounds: SliderBounds,
    pub models: ModelStore,
    pub currency_symbol: String,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!("{method} {path}");

    match (method, path) {
        ("GET", "/") => {
            let selection = read_selection(&req, state)?;
            let (outcome, fingerprint) = run_prediction(&selection, state);

            html_response(predictor_page(&PredictorVm {
                reference: &state.reference,
                bounds: &state.bounds,
                selection: &selection,
                outcome: &outcome,
                currency_symbol: &state.currency_symbol,
                model_fingerprint: fingerprint,
            }))
        }
        ("GET", "/predict") => {
            let selection = read_selection(&req, state)?;
            let (outcome, _) = run_prediction(&selection, state);
            html_response(prediction_result(&outcome, &state.currency_symbol))
        }
        ("GET", "/api/predict") => {
            let selection = read_selection(&req, state)?;
            match run_prediction(&selection, state) {
                (Ok(est), fingerprint) => json_response(
                    200,
                    &PredictionBody {
                        predicted_price: est.price,
                        formatted: format_currency(&state.currency_symbol, est.price),
                        model_fingerprint: fingerprint,
                    },
                ),
                (Err(err), _) => {
                    let status = match err {
                        PredictError::SchemaUnavailable(_) => 503,
                        PredictError::PredictionFailed(_) => 500,
                    };
                    json_response(
                        status,
                        &ErrorBody {
                            error: err.to_string(),
                            kind: err.kind(),
                        },
                    )
                }
            }
        }
        ("GET", "/api/areas") => {
            let areas: Vec<AreaBody> = state
                .reference
                .area_prices()
                .iter()
                .map(|(area, price)| AreaBody {
                    area,
                    average_price: *price,
                })
                .collect();
            json_response(200, &areas)
        }
        ("GET", "/static/main.css") => stylesheet_response(),
        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct PredictionBody {
    predicted_price: f64,
    formatted: String,
    model_fingerprint: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

#[derive(Serialize)]
struct AreaBody<'a> {
    area: &'a str,
    average_price: f64,
}

fn read_selection(req: &Request, state: &AppState) -> Result<PropertySelection, ServerError> {
    let params = parse_query(req);
    PropertySelection::from_params(&params, &state.reference, &state.bounds)
}

/// The one place reconcile/predict errors are caught; they are turned into
/// something the page can show.
fn run_prediction(
    selection: &PropertySelection,
    state: &AppState,
) -> (Result<Estimate, PredictError>, Option<String>) {
    let (outcome, fingerprint) = match state.models.current() {
        Ok(model) => (
            estimate(selection, &state.reference, &*model),
            model.fingerprint().map(str::to_string),
        ),
        Err(err) => (Err(err), None),
    };

    if let Err(err) = &outcome {
        warn!("No price for {selection:?}: {err}");
    }

    (outcome, fingerprint)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
