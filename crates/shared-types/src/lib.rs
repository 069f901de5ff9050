pub mod common;
pub mod dashboard;
pub mod error;
pub mod feature_flags;
pub mod models;
pub mod navigation;
pub mod onboarding;
pub mod requests;

pub use common::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;
pub use navigation::*;
pub use onboarding::*;
pub use requests::*;
