use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFlaskConical, LdPencil, LdStethoscope};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{waiting_patients, MetricColor, MAX_PAGE_BUTTONS, WAITING_PATIENTS_PER_PAGE};
use shared_types::{page_count, page_slice};
use shared_ui::{
    Button, ButtonVariant, Card, CardHeader, DataTable, DataTableCell, DataTableRow, MetricCard,
    Pagination,
};

/// "Showing a to b of n" bounds for a 1-based page.
fn showing_range(page: usize, per_page: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let first = page.saturating_sub(1) * per_page + 1;
    (first.min(total), (page * per_page).min(total))
}

/// Staff dashboard: key metrics and the waiting-patients queue.
#[component]
pub fn UserDashboard() -> Element {
    let patients = use_hook(waiting_patients);
    let mut page = use_signal(|| 1usize);

    let total = patients.len();
    let total_pages = page_count(total, WAITING_PATIENTS_PER_PAGE);
    let current = page().min(total_pages.max(1));
    let rows = page_slice(&patients, current, WAITING_PATIENTS_PER_PAGE);
    let (first, last) = showing_range(current, WAITING_PATIENTS_PER_PAGE, total);

    let columns = ["Patient ID", "Name", "Age", "Gender", "Contact", "Actions"]
        .map(String::from)
        .to_vec();

    rsx! {
        div { class: "dashboard",
            h2 { class: "dashboard-greeting", "Hello Doctor" }

            div { class: "dashboard-metrics",
                MetricCard {
                    title: "Total patient Seen",
                    value: "32",
                    color: MetricColor::Blue,
                    icon: rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: 22, height: 22 } },
                }
                MetricCard {
                    title: "Pending Lab Result",
                    value: "15",
                    color: MetricColor::Orange,
                    icon: rsx! { Icon::<LdFlaskConical> { icon: LdFlaskConical, width: 22, height: 22 } },
                }
            }

            Card {
                CardHeader {
                    title: "Waiting Patients",
                    actions: rsx! {
                        Button { variant: ButtonVariant::Primary, "View All" }
                    },
                }
                DataTable { columns,
                    for (i, patient) in rows.iter().enumerate() {
                        DataTableRow { key: "{patient.patient_id}-{i}",
                            DataTableCell {
                                span { class: "cell-accent", "{patient.patient_id}" }
                            }
                            DataTableCell { "{patient.name}" }
                            DataTableCell { "{patient.age}" }
                            DataTableCell { "{patient.gender}" }
                            DataTableCell {
                                span { class: "cell-accent", "{patient.contact}" }
                            }
                            DataTableCell {
                                button { class: "icon-button", "aria-label": "Edit patient",
                                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                                }
                            }
                        }
                    }
                }
                div { class: "table-footer",
                    span { class: "table-footer-summary",
                        "Showing {first} to {last} of {total} patients"
                    }
                    Pagination {
                        current,
                        total_pages,
                        max_visible: MAX_PAGE_BUTTONS,
                        on_change: move |p: usize| page.set(p),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showing_range_bounds() {
        assert_eq!(showing_range(1, 8, 9), (1, 8));
        assert_eq!(showing_range(2, 8, 9), (9, 9));
        assert_eq!(showing_range(1, 8, 0), (0, 0));
    }
}
