//! Sign-in for both portals, against the backend or the built-in
//! development credentials.

use std::time::Duration;

use shared_types::{
    initials_from_name, AdminLoginResponse, AppError, ErrorBody, HospitalSummary, LoginRequest,
    Portal, Role, StaffLoginResponse, User,
};

use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::session::{establish, AuthSession, SessionStore};
use crate::storage::TokenStore;
use crate::timing;

pub const MOCK_ADMIN_TOKEN: &str = "mock-jwt-token";
pub const MOCK_USER_TOKEN: &str = "mock-user-jwt-token";

/// Simulated round trip for development sign-ins.
pub const MOCK_LATENCY: Duration = Duration::from_millis(1500);

const INVALID_RESPONSE: &str = "Invalid login response from server";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    Live,
    /// Built-in credentials, answered after the given delay.
    Mock(Duration),
}

impl LoginMode {
    pub fn for_config(config: &ClientConfig) -> Self {
        if config.uses_mock_login() {
            LoginMode::Mock(MOCK_LATENCY)
        } else {
            LoginMode::Live
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, LoginMode::Mock(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    pub user: User,
    /// Toast text for the welcome notification.
    pub notice: String,
}

/// Authenticate on `portal`, persist its token and update the session.
///
/// Empty fields are rejected before any request is made.
pub async fn login<T, S>(
    api: &ApiClient,
    mode: LoginMode,
    tokens: &T,
    store: &mut S,
    portal: Portal,
    credentials: &LoginRequest,
) -> Result<LoginSuccess, AppError>
where
    T: TokenStore + ?Sized,
    S: SessionStore,
{
    if credentials.email.trim().is_empty() || credentials.password.is_empty() {
        return Err(AppError::bad_request("Please fill in all fields"));
    }

    let auth = match mode {
        LoginMode::Live => live_login(api, portal, credentials).await?,
        LoginMode::Mock(delay) => {
            timing::sleep(delay).await;
            mock_login(portal, credentials)?
        }
    };

    let user = establish(tokens, store, portal, auth);
    let mut notice = format!("Welcome back, {}!", user.name);
    if mode.is_mock() {
        notice.push_str(" (Mock Login)");
    }
    Ok(LoginSuccess { user, notice })
}

async fn live_login(
    api: &ApiClient,
    portal: Portal,
    credentials: &LoginRequest,
) -> Result<AuthSession, AppError> {
    let auth = match portal {
        Portal::Admin => api
            .admin_login(credentials)
            .await
            .map_err(|e| login_error(portal, e))?
            .into_auth_session(),
        Portal::User => api
            .staff_login(credentials)
            .await
            .map_err(|e| login_error(portal, e))?
            .into_auth_session(),
    };
    if let Err(e) = &auth {
        tracing::warn!(?portal, error = %e, "login response rejected");
    }
    auth
}

/// Adapter from a portal-specific login envelope to the common session.
pub trait LoginEnvelope {
    fn into_auth_session(self) -> Result<AuthSession, AppError>;
}

impl LoginEnvelope for AdminLoginResponse {
    fn into_auth_session(self) -> Result<AuthSession, AppError> {
        let (Some(token), Some(user)) = (self.token.filter(|t| !t.is_empty()), self.user) else {
            return Err(AppError::malformed(INVALID_RESPONSE));
        };

        let role = match user.role.as_deref() {
            None => Role::Admin,
            Some(code) => Role::from_code(code).unwrap_or(Role::Admin),
        };
        let initials = user
            .initials
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| initials_from_name(&user.name));

        Ok(AuthSession {
            token,
            user: User {
                id: user.id,
                name: user.name,
                email: user.email,
                initials,
                role,
                job_title: user.job_title,
                employee_id: None,
                hospital: user.hospital,
            },
        })
    }
}

impl LoginEnvelope for StaffLoginResponse {
    fn into_auth_session(self) -> Result<AuthSession, AppError> {
        let Some(data) = self.data else {
            return Err(AppError::malformed(INVALID_RESPONSE));
        };
        let (Some(token), Some(user)) = (data.token.filter(|t| !t.is_empty()), data.user) else {
            return Err(AppError::malformed(INVALID_RESPONSE));
        };
        let role = Role::from_code(&user.role)
            .ok_or_else(|| AppError::malformed(format!("Unknown role '{}'", user.role)))?;

        let name = user
            .full_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("{} {}", user.first_name, user.last_name));
        let initials: String = [&user.first_name, &user.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        Ok(AuthSession {
            token,
            user: User {
                id: user.id,
                name,
                email: user.email,
                initials,
                role,
                job_title: None,
                employee_id: user.employee_id,
                hospital: data.hospital,
            },
        })
    }
}

/// Turn a failed login call into the message shown to the operator.
pub fn login_error(portal: Portal, err: ApiError) -> AppError {
    match err {
        ApiError::Network(detail) => {
            tracing::warn!(?portal, %detail, "login backend unreachable");
            AppError::network("Unable to connect to server. Please check if the server is running.")
        }
        ApiError::NotJson { .. } => AppError::malformed("Server returned invalid response format"),
        ApiError::Malformed(_) => AppError::malformed("Invalid response from server"),
        ApiError::Status { status, body } => {
            AppError::from_status(status, login_status_message(status, &body))
        }
    }
}

fn login_status_message(status: u16, body: &ErrorBody) -> String {
    match status {
        423 => body.detail_or("Account is locked"),
        401 => match body.code() {
            Some("Account inactive") => {
                "Your account has been deactivated. Please contact support.".to_string()
            }
            Some("Account disabled") => {
                "Your account has been disabled. Please contact your administrator.".to_string()
            }
            Some("Email not verified") => {
                "Please verify your email address before logging in.".to_string()
            }
            Some("Hospital inactive") => {
                "Hospital account is not active. Please contact support.".to_string()
            }
            _ => body.detail_or("Invalid email or password. Please try again."),
        },
        400 => body.detail_or("Please check your input and try again"),
        404 => "Login service is not available. Please contact support.".to_string(),
        500 => "Server error. Please try again later.".to_string(),
        _ => body.detail_or("Login failed. Please try again."),
    }
}

// --- Development credentials ---

pub const MOCK_ADMIN_EMAIL: &str = "admin@dovacare.com";
const MOCK_ADMIN_PASSWORD: &str = "admin123";
pub const MOCK_USER_EMAIL: &str = "jamesasuelimen77@gmail.com";
const MOCK_USER_PASSWORD: &str = "sAi#Jj!%dI9B";

fn mock_login(portal: Portal, credentials: &LoginRequest) -> Result<AuthSession, AppError> {
    let email = credentials.email.trim();
    match portal {
        Portal::Admin if email == MOCK_ADMIN_EMAIL && credentials.password == MOCK_ADMIN_PASSWORD => {
            Ok(AuthSession {
                token: MOCK_ADMIN_TOKEN.to_string(),
                user: mock_admin(),
            })
        }
        Portal::User if email == MOCK_USER_EMAIL && credentials.password == MOCK_USER_PASSWORD => {
            Ok(AuthSession {
                token: MOCK_USER_TOKEN.to_string(),
                user: mock_doctor(),
            })
        }
        _ => Err(AppError::unauthorized("Invalid email or password")),
    }
}

fn mock_admin() -> User {
    User {
        id: "1".to_string(),
        name: "Shade Badmus".to_string(),
        email: MOCK_ADMIN_EMAIL.to_string(),
        initials: "SB".to_string(),
        role: Role::Admin,
        job_title: Some("System Administrator".to_string()),
        employee_id: None,
        hospital: Some(HospitalSummary {
            id: "1".to_string(),
            hospital_id: Some("HSP001".to_string()),
            name: "General Hospital".to_string(),
            status: Some("active".to_string()),
            setup_status: Some("completed".to_string()),
        }),
    }
}

fn mock_doctor() -> User {
    User {
        id: "68824c4a7dedd89b47860fb2".to_string(),
        name: "james james".to_string(),
        email: MOCK_USER_EMAIL.to_string(),
        initials: "JJ".to_string(),
        role: Role::Doctor,
        job_title: None,
        employee_id: Some("DR0001".to_string()),
        hospital: Some(HospitalSummary {
            id: "68824a1208d3eadd32086a18".to_string(),
            hospital_id: Some("HSP001".to_string()),
            name: "kingscare".to_string(),
            status: Some("active".to_string()),
            setup_status: None,
        }),
    }
}
