//! Console services shared by every screen: the hospital backend client
//! and the session flows built on it.

pub mod api;
pub mod config;
pub mod login;
pub mod onboarding;
pub mod session;
pub mod storage;
pub mod timing;
pub mod users;

pub use api::{ApiClient, ApiError};
pub use config::{load_config, ClientConfig};
pub use login::{login, LoginMode, LoginSuccess};
pub use onboarding::OnboardingWizard;
pub use session::{
    development_session, enter_dashboard, establish, establish_pending, guard, logout, rehydrate,
    session_portal, signed_in_redirect, AuthSession, GuardDecision, LogoutOutcome, SessionStore,
};
pub use storage::{DefaultTokenStore, MemoryTokenStore, TokenStore};
pub use users::{UserFilters, UserForm, UserPage};
