use dioxus::prelude::*;

/// Table with a fixed header row. `columns` are the header labels.
#[component]
pub fn DataTable(columns: Vec<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "table-scroll",
            table { class: "table",
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column}", "{column}" }
                        }
                    }
                }
                tbody { {children} }
            }
        }
    }
}

#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "table-row", {children} }
    }
}

#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

/// Full-width row for loading and empty states.
#[component]
pub fn DataTableMessage(span: usize, children: Element) -> Element {
    rsx! {
        tr {
            td { class: "table-message", colspan: "{span}", {children} }
        }
    }
}
