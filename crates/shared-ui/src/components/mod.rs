// Building blocks
pub mod badge;
pub mod banner;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod input;
pub mod page_header;

// Primitive wrappers
pub mod alert_dialog;
pub mod avatar;
pub mod dialog;
pub mod toast;

// Depend on button or avatar
pub mod pagination;
pub mod sidebar;
pub mod top_nav;

// Dashboard and onboarding widgets
pub mod activity_table;
pub mod metric_card;
pub mod status_chart;
pub mod step_indicator;
pub mod system_status;

pub use activity_table::*;
pub use alert_dialog::*;
pub use avatar::*;
pub use badge::*;
pub use banner::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use form_select::*;
pub use input::*;
pub use metric_card::*;
pub use page_header::*;
pub use pagination::*;
pub use sidebar::*;
pub use status_chart::*;
pub use step_indicator::*;
pub use system_status::*;
pub use toast::*;
pub use top_nav::*;
