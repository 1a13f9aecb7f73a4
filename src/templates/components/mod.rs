use maud::{html, Markup};

pub mod bar_chart;
pub mod currency;
pub mod error;
pub mod prediction;

pub use bar_chart::bar_chart;
pub use currency::format_currency;
pub use error::html_error_response;
pub use prediction::prediction_result;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
