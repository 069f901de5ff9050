use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdMenu};
use dioxus_free_icons::Icon;

use crate::components::avatar::InitialsAvatar;

/// Header bar over dashboard content: greeting on the left, signed-in
/// user on the right.
#[component]
pub fn TopNav(
    title: String,
    subtitle: String,
    name: String,
    email: String,
    initials: String,
    #[props(default)] on_menu_toggle: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "top-nav",
            div { class: "top-nav-left",
                if let Some(handler) = on_menu_toggle {
                    button {
                        r#type: "button",
                        class: "top-nav-menu",
                        "aria-label": "Open menu",
                        onclick: move |evt| handler.call(evt),
                        Icon::<LdMenu> { icon: LdMenu, width: 22, height: 22 }
                    }
                }
                div {
                    h1 { class: "top-nav-title", "{title}" }
                    p { class: "top-nav-subtitle", "{subtitle}" }
                }
            }
            div { class: "top-nav-right",
                span { class: "top-nav-bell",
                    Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
                }
                div { class: "top-nav-user",
                    InitialsAvatar { initials: initials.clone() }
                    div { class: "top-nav-user-text",
                        span { class: "top-nav-name", "{name}" }
                        span { class: "top-nav-email", "{email}" }
                    }
                }
            }
        }
    }
}
