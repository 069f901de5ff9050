use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::dashboard::{
    patient_status_breakdown, recent_activities, system_status, MetricColor,
};
use shared_ui::{ActivityTable, MetricCard, StatusChart, SystemStatus};

#[component]
pub fn AdminDashboard() -> Element {
    let activities = use_hook(recent_activities);
    let status = use_hook(system_status);
    let breakdown = use_hook(patient_status_breakdown);

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard-metrics",
                MetricCard {
                    title: "Total Users",
                    value: "0",
                    color: MetricColor::Blue,
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
                }
                MetricCard {
                    title: "Recent User Login",
                    value: "0",
                    color: MetricColor::Green,
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 22, height: 22 } },
                }
            }

            div { class: "dashboard-grid",
                ActivityTable { activities }
                div { class: "dashboard-side",
                    SystemStatus { items: status }
                    StatusChart { slices: breakdown }
                }
            }
        }
    }
}
