use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

/// Inline message strip with a dismiss button.
#[component]
pub fn Banner(tone: BannerTone, message: String, on_dismiss: EventHandler<()>) -> Element {
    let tone_class = match tone {
        BannerTone::Success => "success",
        BannerTone::Error => "error",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "banner", "data-tone": tone_class, role: "alert",
            span { "{message}" }
            button {
                r#type: "button",
                class: "banner-dismiss",
                "aria-label": "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
