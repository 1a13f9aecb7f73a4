use crate::templates::components::currency::format_thousands;
use maud::{html, Markup};

const LABEL_WIDTH: f64 = 220.0;
const BAR_WIDTH: f64 = 380.0;
const VALUE_WIDTH: f64 = 120.0;
const ROW_HEIGHT: f64 = 24.0;

/// Horizontal bar per (label, value), drawn in the given order and scaled
/// to the largest value.
pub fn bar_chart(title: &str, rows: &[(String, f64)]) -> Markup {
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let width = LABEL_WIDTH + BAR_WIDTH + VALUE_WIDTH;
    let height = ROW_HEIGHT * rows.len() as f64;

    html! {
        figure class="bar-chart" {
            figcaption { (title) }
            svg
                xmlns="http://www.w3.org/2000/svg"
                role="img"
                aria-label=(title)
                width=(width)
                height=(height)
                viewBox=(format!("0 0 {width} {height}"))
            {
                @for (i, (label, value)) in rows.iter().enumerate() {
                    @let y = ROW_HEIGHT * i as f64;
                    @let bar = if max > 0.0 { BAR_WIDTH * value / max } else { 0.0 };
                    g class="bar" {
                        title { (label) ": " (format_thousands(*value)) }
                        text x=(LABEL_WIDTH - 8.0) y=(y + 16.0) text-anchor="end" { (label) }
                        rect x=(LABEL_WIDTH) y=(y + 4.0) width=(bar) height=(ROW_HEIGHT - 8.0) {}
                        text x=(LABEL_WIDTH + bar + 6.0) y=(y + 16.0) class="bar-value" {
                            (format_thousands(*value))
                        }
                    }
                }
            }
        }
    }
}
