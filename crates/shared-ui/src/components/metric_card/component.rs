use dioxus::prelude::*;
use shared_types::dashboard::MetricColor;

/// Headline number with a coloured icon.
#[component]
pub fn MetricCard(
    title: String,
    value: String,
    #[props(default)] color: MetricColor,
    #[props(default)] note: Option<String>,
    icon: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "metric-card",
            div {
                p { class: "metric-title", "{title}" }
                p { class: "metric-value", "{value}" }
                if let Some(note) = note {
                    p { class: "metric-note", "{note}" }
                }
            }
            div { class: "metric-icon", "data-color": color.as_str(), {icon} }
        }
    }
}
