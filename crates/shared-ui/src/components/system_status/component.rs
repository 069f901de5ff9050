use dioxus::prelude::*;
use shared_types::dashboard::StatusItem;

/// List of subsystem health indicators.
#[component]
pub fn SystemStatus(
    items: Vec<StatusItem>,
    #[props(default = "System Status".to_string())] title: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "status-card",
            h3 { class: "status-title", "{title}" }
            ul { class: "status-list",
                for (i, item) in items.iter().enumerate() {
                    li { key: "{i}", class: "status-item",
                        span { class: "status-dot", "data-status": item.status.as_str() }
                        div {
                            div { class: "status-label", "{item.label}" }
                            div { class: "status-message", "{item.message}" }
                        }
                    }
                }
            }
        }
    }
}
