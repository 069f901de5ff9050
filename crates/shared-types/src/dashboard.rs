//! Data shown by the dashboard widgets.
//!
//! The backend exposes no dashboard endpoints yet, so the screens render
//! the fixed sets below.

use serde::{Deserialize, Serialize};

/// Accent colour of a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MetricColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
}

impl MetricColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricColor::Blue => "blue",
            MetricColor::Green => "green",
            MetricColor::Purple => "purple",
            MetricColor::Orange => "orange",
        }
    }
}

/// One row of the recent-activities table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub action: String,
    pub time: String,
    pub initials: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Error,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Warning => "warning",
            HealthStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusItem {
    pub label: String,
    pub status: HealthStatus,
    pub message: String,
}

/// One segment of the patient-status breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Sum of all slice values.
pub fn slice_total(slices: &[StatusSlice]) -> u32 {
    slices.iter().map(|s| s.value).sum()
}

/// Share of `value` in `total`, as a percentage with one decimal.
pub fn percent_of(value: u32, total: u32) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", f64::from(value) * 100.0 / f64::from(total))
}

/// A patient waiting to be seen by a doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitingPatient {
    pub patient_id: String,
    pub name: String,
    pub age: u8,
    pub gender: String,
    pub contact: String,
}

pub const WAITING_PATIENTS_PER_PAGE: usize = 8;
pub const ACTIVITIES_PER_PAGE: usize = 5;
pub const MAX_PAGE_BUTTONS: usize = 5;

fn activity(id: u32, name: &str, email: &str, action: &str, time: &str) -> Activity {
    Activity {
        id,
        name: name.to_string(),
        email: email.to_string(),
        action: action.to_string(),
        time: time.to_string(),
        initials: crate::models::initials_from_name(name),
    }
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        activity(1, "Shade Badmus", "shade@dovacareclinics", "New Patient Registration", "1 hour ago"),
        activity(2, "Rita Barnes", "rita@dovacareclinics", "New Patient Registration", "30 minutes ago"),
        activity(3, "Milo Martin", "milo@dovacareclinics", "Payment Made", "5 minutes ago"),
        activity(4, "Jessica Pierce", "jessica@dovacareclinics", "Lab Test Results", "Just now"),
        activity(5, "Tommy Alvarez", "tommy@dovacareclinics", "Medication Prescription", "Yesterday"),
        activity(6, "Laura Kline", "laura@dovacareclinics", "Payment Made", "Last week"),
        activity(7, "Greg Daniels", "greg@dovacareclinics", "Health Assessment", "Last month"),
        activity(8, "Hannah Smith", "hannah@dovacareclinics", "Insurance Verification", "2 days ago"),
        activity(9, "Carlos Nunez", "carlos@dovacareclinics", "Payment Made", "A year ago"),
    ]
}

fn status(label: &str, status: HealthStatus, message: &str) -> StatusItem {
    StatusItem {
        label: label.to_string(),
        status,
        message: message.to_string(),
    }
}

pub fn system_status() -> Vec<StatusItem> {
    vec![
        status("System Health", HealthStatus::Healthy, "No errors detected"),
        status("Database Status", HealthStatus::Healthy, "All systems operational"),
        status("Server Load Status", HealthStatus::Warning, "High"),
        status("Last Backup", HealthStatus::Healthy, "Successful on 2023-10-01"),
        status("System Performance", HealthStatus::Healthy, "Running optimally"),
        status("User Access", HealthStatus::Healthy, "No issues detected"),
    ]
}

pub fn patient_status_breakdown() -> Vec<StatusSlice> {
    [
        ("Completed", 45, "#10B981"),
        ("Administration", 30, "#3B82F6"),
        ("Pending", 15, "#F59E0B"),
        ("Incoming", 10, "#8B5CF6"),
    ]
    .into_iter()
    .map(|(name, value, color)| StatusSlice {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
}

pub fn waiting_patients() -> Vec<WaitingPatient> {
    [
        ("PA0004", "Clara Bennett", 52, "Female"),
        ("PA0005", "James Anderson", 24, "Male"),
        ("PA0006", "Sophie Turner", 31, "Female"),
        ("PA0008", "Olivia Martinez", 50, "Female"),
        ("PA0009", "Ethan Brown", 12, "Male"),
        ("PA0010", "Ava Davis", 8, "Male"),
        ("PA0011", "Ava Davis", 17, "Female"),
        ("PA0012", "Ava Davis", 17, "Female"),
        ("PA0013", "Ava Davis", 17, "Female"),
    ]
    .into_iter()
    .map(|(id, name, age, gender)| WaitingPatient {
        patient_id: id.to_string(),
        name: name.to_string(),
        age,
        gender: gender.to_string(),
        contact: "07067684532".to_string(),
    })
    .collect()
}
