use dioxus::prelude::*;
use shared_types::dashboard::{Activity, ACTIVITIES_PER_PAGE};
use shared_types::{page_count, page_slice};

use crate::components::avatar::InitialsAvatar;
use crate::components::pagination::Pagination;

const INITIALS_COLORS: [&str; 9] = [
    "#3b82f6", "#22c55e", "#a855f7", "#ec4899", "#eab308", "#ef4444", "#6366f1", "#14b8a6",
    "#f97316",
];

/// Avatar colour for the row at `index`, cycling through the palette.
pub fn initials_color(index: usize) -> &'static str {
    INITIALS_COLORS[index % INITIALS_COLORS.len()]
}

/// Recent activity feed, paged locally.
#[component]
pub fn ActivityTable(
    activities: Vec<Activity>,
    #[props(default = "Recent Activities".to_string())] title: String,
) -> Element {
    let mut page = use_signal(|| 1usize);
    let total_pages = page_count(activities.len(), ACTIVITIES_PER_PAGE);
    let current = page();
    let offset = (current.saturating_sub(1)) * ACTIVITIES_PER_PAGE;
    let rows = page_slice(&activities, current, ACTIVITIES_PER_PAGE).to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "activity-card",
            h3 { class: "activity-title", "{title}" }
            if rows.is_empty() {
                p { class: "activity-empty", "No recent activity" }
            } else {
                table { class: "activity-table",
                    thead {
                        tr {
                            th { "User" }
                            th { "Action" }
                            th { "Time" }
                        }
                    }
                    tbody {
                        for (i, activity) in rows.into_iter().enumerate() {
                            tr { key: "{activity.id}",
                                td {
                                    div { class: "activity-user",
                                        InitialsAvatar {
                                            initials: activity.initials.clone(),
                                            color: initials_color(offset + i).to_string(),
                                            small: true,
                                        }
                                        div {
                                            div { class: "activity-name", "{activity.name}" }
                                            div { class: "activity-email", "{activity.email}" }
                                        }
                                    }
                                }
                                td { class: "activity-action", "{activity.action}" }
                                td { class: "activity-time", "{activity.time}" }
                            }
                        }
                    }
                }
            }
            Pagination {
                current,
                total_pages,
                on_change: move |p| page.set(p),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::dashboard::recent_activities;

    #[test]
    fn palette_cycles() {
        assert_eq!(initials_color(0), initials_color(9));
        assert_ne!(initials_color(0), initials_color(1));
    }

    #[test]
    fn first_page_shows_five_rows() {
        let html = dioxus_ssr::render_element(rsx! {
            ActivityTable { activities: recent_activities() }
        });
        assert!(html.contains("Shade Badmus"));
        assert!(html.contains("Tommy Alvarez"));
        assert!(!html.contains("Laura Kline"));
    }
}
