use dioxus::prelude::*;

/// Whether the sidebar drawer is open. Only matters on narrow screens;
/// wide screens always show the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

#[component]
pub fn SidebarProvider(#[props(default = false)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "shell",
            "data-sidebar-open": if state().open { "true" } else { "false" },
            {children}
        }
    }
}

pub fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

/// Flip the drawer open or closed.
pub fn toggle_sidebar(mut state: Signal<SidebarState>) {
    let open = state().open;
    state.set(SidebarState { open: !open });
}

/// The navigation column. Tapping the backdrop closes the drawer.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();
    let is_open = state().open;

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Logo block at the top of the sidebar.
#[component]
pub fn SidebarBrand(title: String, #[props(default)] subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "sidebar-brand",
            span { class: "sidebar-brand-mark", "+" }
            div {
                div { class: "sidebar-brand-title", "{title}" }
                if let Some(subtitle) = subtitle {
                    div { class: "sidebar-brand-subtitle", "{subtitle}" }
                }
            }
        }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-menu",
            ul { {children} }
        }
    }
}

/// One menu entry. Clicking runs `onclick` and closes the drawer.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default = false)] danger: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li {
            button {
                r#type: "button",
                class: if danger { "sidebar-menu-button danger" } else { "sidebar-menu-button" },
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    state.set(SidebarState { open: false });
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
            }
        }
    }
}

/// Content column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        div { class: "shell-main", {children} }
    }
}
