use dioxus::prelude::*;

/// Native `<select>` built from `(value, label)` pairs.
///
/// An empty `placeholder` omits the leading "all" option; otherwise it is
/// rendered with an empty value.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<String>>,
    #[props(default)] label: String,
    #[props(default)] placeholder: String,
    options: Vec<(String, String)>,
    #[props(default = false)] disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "select-field",
            if !label.is_empty() {
                span { class: "select-label", "{label}" }
            }
            select {
                class: "select-control",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt.value());
                    }
                },
                if !placeholder.is_empty() {
                    option { value: "", selected: value.is_empty(), "{placeholder}" }
                }
                for (opt_value, opt_label) in options.iter() {
                    option {
                        key: "{opt_value}",
                        value: "{opt_value}",
                        selected: *opt_value == value,
                        "{opt_label}"
                    }
                }
            }
        }
    }
}

/// Options where value and label are the same text.
pub fn same_value_options<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<(String, String)> {
    labels
        .into_iter()
        .map(|l| (l.to_string(), l.to_string()))
        .collect()
}
