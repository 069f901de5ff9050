use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Round avatar showing the user's initials.
#[component]
pub fn InitialsAvatar(
    initials: String,
    #[props(default)] color: Option<String>,
    #[props(default = false)] small: bool,
) -> Element {
    let style = color
        .map(|c| format!("background-color: {c};"))
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { class: if small { "avatar avatar-small" } else { "avatar" },
            prim::AvatarFallback { class: "avatar-initials", style: "{style}", "{initials}" }
        }
    }
}
