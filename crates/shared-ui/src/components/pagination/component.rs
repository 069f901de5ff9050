use dioxus::prelude::*;
use shared_types::page_window;

use crate::components::button::{Button, ButtonVariant};

/// Previous / numbered / Next page controls. Pages are 1-based and at most
/// `max_visible` numbers are shown around the current one.
#[component]
pub fn Pagination(
    current: usize,
    total_pages: usize,
    on_change: EventHandler<usize>,
    #[props(default = 5)] max_visible: usize,
) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }
    let pages = page_window(current, total_pages, max_visible);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                disabled: current <= 1,
                onclick: move |_| on_change.call(current.saturating_sub(1).max(1)),
                "Previous"
            }
            for page in pages {
                button {
                    key: "{page}",
                    r#type: "button",
                    class: "pagination-page",
                    "data-active": if page == current { "true" } else { "false" },
                    onclick: move |_| on_change.call(page),
                    "{page}"
                }
            }
            Button {
                variant: ButtonVariant::Outline,
                disabled: current >= total_pages,
                onclick: move |_| on_change.call((current + 1).min(total_pages)),
                "Next"
            }
        }
    }
}
