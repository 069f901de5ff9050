use dioxus::prelude::*;
use shared_types::dashboard::{percent_of, slice_total, StatusSlice};

/// CSS `conic-gradient` stops for a donut of `slices`.
pub fn conic_gradient(slices: &[StatusSlice]) -> String {
    let total = slice_total(slices);
    if total == 0 {
        return "conic-gradient(#e5e7eb 0deg 360deg)".to_string();
    }
    let mut start = 0.0_f64;
    let stops: Vec<String> = slices
        .iter()
        .map(|s| {
            let end = start + f64::from(s.value) * 360.0 / f64::from(total);
            let stop = format!("{} {:.1}deg {:.1}deg", s.color, start, end);
            start = end;
            stop
        })
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// Patient status breakdown: donut plus a legend with percentages.
#[component]
pub fn StatusChart(
    slices: Vec<StatusSlice>,
    #[props(default = "Patient Status".to_string())] title: String,
) -> Element {
    let total = slice_total(&slices);
    let background = conic_gradient(&slices);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }
            div { class: "chart-body",
                div { class: "chart-donut", style: "background: {background};",
                    div { class: "chart-hole",
                        span { class: "chart-total", "{total}" }
                        span { class: "chart-total-label", "Total" }
                    }
                }
                ul { class: "chart-legend",
                    for slice in slices.iter() {
                        li { key: "{slice.name}", class: "chart-legend-item",
                            span { class: "chart-swatch", style: "background: {slice.color};" }
                            span { class: "chart-name", "{slice.name}" }
                            span { class: "chart-percent", "{percent_of(slice.value, total)}%" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::dashboard::patient_status_breakdown;

    #[test]
    fn gradient_spans_full_circle() {
        let gradient = conic_gradient(&patient_status_breakdown());
        assert!(gradient.starts_with("conic-gradient(#10B981 0.0deg 162.0deg"));
        assert!(gradient.ends_with("#8B5CF6 324.0deg 360.0deg)"));
    }

    #[test]
    fn empty_chart_is_grey() {
        assert_eq!(conic_gradient(&[]), "conic-gradient(#e5e7eb 0deg 360deg)");
    }

    #[test]
    fn legend_lists_percentages() {
        let html = dioxus_ssr::render_element(rsx! {
            StatusChart { slices: patient_status_breakdown() }
        });
        assert!(html.contains("Administration"));
        assert!(html.contains("30.0%"));
    }
}
