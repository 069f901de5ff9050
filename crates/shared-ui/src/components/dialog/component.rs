use dioxus::prelude::*;
use dioxus_primitives::dialog as prim;

/// Modal overlay. Open state is controlled by the caller via `open` and
/// `on_open_change`.
#[component]
pub fn DialogRoot(mut props: prim::DialogRootProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-overlay", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::DialogRoot { ..props }
    }
}

#[component]
pub fn DialogContent(mut props: prim::DialogContentProps) -> Element {
    if props.class.is_none() {
        props.class = Some("modal".to_string());
    }

    rsx! {
        prim::DialogContent { ..props }
    }
}

#[component]
pub fn DialogTitle(mut props: prim::DialogTitleProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-title", None, false));

    rsx! {
        prim::DialogTitle { ..props }
    }
}

#[component]
pub fn DialogDescription(mut props: prim::DialogDescriptionProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "modal-description", None, false));

    rsx! {
        prim::DialogDescription { ..props }
    }
}

/// Right-aligned button row at the bottom of a dialog.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "modal-footer", {children} }
    }
}
