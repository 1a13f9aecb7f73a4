use crate::errors::PredictError;
use crate::model::Estimate;
use crate::templates::components::currency::format_currency;
use maud::{html, Markup};

/// Price box, or the error that stopped the prediction.
pub fn prediction_result(outcome: &Result<Estimate, PredictError>, currency_symbol: &str) -> Markup {
    html! {
        section class="card" id="prediction" {
            h2 { "Predicted Property Price" }
            @match outcome {
                Ok(estimate) => {
                    p class="success" { (format_currency(currency_symbol, estimate.price)) }
                    @if estimate.columns_padded > 0 {
                        p class="microcopy" {
                            (estimate.columns_padded) " model input(s) not covered by the form were set to 0."
                        }
                    }
                }
                Err(err) => {
                    p class="error" role="alert" { "Error in prediction: " (err) }
                }
            }
        }
    }
}
