//! Role-specific dashboard bodies rendered inside the shell.

pub mod admin;
pub mod doctor;

pub use admin::AdminDashboard;
pub use doctor::UserDashboard;
