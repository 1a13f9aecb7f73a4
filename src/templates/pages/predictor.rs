use crate::domain::features::PropertySelection;
use crate::domain::inputs::SliderBounds;
use crate::domain::reference::ReferenceData;
use crate::errors::PredictError;
use crate::model::Estimate;
use crate::templates::components::{bar_chart, card, prediction_result};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "London Property Price Predictor";

pub struct PredictorVm<'a> {
    pub reference: &'a ReferenceData,
    pub bounds: &'a SliderBounds,
    pub selection: &'a PropertySelection,
    pub outcome: &'a Result<Estimate, PredictError>,
    pub currency_symbol: &'a str,
    pub model_fingerprint: Option<String>,
}

pub fn predictor_page(vm: &PredictorVm) -> Markup {
    desktop_layout(
        PAGE_TITLE,
        sidebar_form(vm.reference, vm.bounds, vm.selection),
        html! {
            h1 { (PAGE_TITLE) }
            p {
                "Simply fill in the details on the left, and the app will provide an estimated price for your desired property."
            }

            (card("Average Property Prices by Area", bar_chart(
                "Average price per area",
                vm.reference.area_prices(),
            )))

            (prediction_result(vm.outcome, vm.currency_symbol))
        },
        html! {
            @match &vm.model_fingerprint {
                Some(fp) => span { "Model sha256 " code { (fp.get(..12).unwrap_or(fp)) } },
                None => span { "No model loaded" },
            }
        },
    )
}

/// The sidebar: three sliders and two selects, submitted back to `/`.
pub fn sidebar_form(
    reference: &ReferenceData,
    bounds: &SliderBounds,
    selection: &PropertySelection,
) -> Markup {
    html! {
        h2 { "User Input Parameters" }
        p class="microcopy" { "Use the controls to configure the property details." }

        form method="get" action="/" class="inputs" {
            h3 { "Property Details" }

            label for="size" { "Size (sq ft) " output for="size" id="size-value" { (selection.size) } }
            input
                type="range"
                id="size"
                name="size"
                min=(bounds.size.min)
                max=(bounds.size.max)
                step="any"
                value=(selection.size)
                oninput="this.form.querySelector('#size-value').value = this.value";

            label for="bedrooms" { "Bedrooms " output for="bedrooms" id="bedrooms-value" { (selection.bedrooms) } }
            input
                type="range"
                id="bedrooms"
                name="bedrooms"
                min=(bounds.bedrooms.min)
                max=(bounds.bedrooms.max)
                step="1"
                value=(selection.bedrooms)
                oninput="this.form.querySelector('#bedrooms-value').value = this.value";

            label for="bathrooms" { "Bathrooms " output for="bathrooms" id="bathrooms-value" { (selection.bathrooms) } }
            input
                type="range"
                id="bathrooms"
                name="bathrooms"
                min=(bounds.bathrooms.min)
                max=(bounds.bathrooms.max)
                step="1"
                value=(selection.bathrooms)
                oninput="this.form.querySelector('#bathrooms-value').value = this.value";

            h3 { "Area & Property Type" }

            label for="area" { "Select an Area:" }
            select name="area" id="area" {
                @for area in reference.areas() {
                    option value=(area) selected[area == selection.area] { (area) }
                }
            }

            label for="property_type" { "Select Property Type" }
            select name="property_type" id="property_type" {
                @for ptype in reference.property_types() {
                    option value=(ptype) selected[*ptype == selection.property_type] { (ptype) }
                }
            }

            button type="submit" class="primary" { "Predict" }
        }
    }
}
