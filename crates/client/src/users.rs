//! Staff account management against `/api/users`.
//!
//! Filtering and paging are entirely server-side: the rows returned for a
//! query are shown as-is. Every successful write is followed by a refetch
//! of the current page by the caller.

use shared_types::{
    AppError, AppErrorKind, CreateUserRequest, Portal, Role, UpdateUserRequest, UserQuery,
    UserRecord, UserRow, UserStatus, REQUIRED_FIELDS_MESSAGE,
};

use crate::api::{ApiClient, ApiError};
use crate::storage::TokenStore;

pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

pub const CREATED: &str = "User created successfully! Invitation email sent.";
pub const UPDATED: &str = "User updated successfully";
pub const DELETED: &str = "User deleted successfully";

/// One page of the user table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPage {
    pub rows: Vec<UserRow>,
    pub total_pages: u32,
}

/// Filter inputs as typed. They reach the query together, once typing
/// pauses, and always restart from page 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub search: String,
    pub role: String,
    pub status: String,
}

impl UserFilters {
    pub fn apply_to(self, query: &mut UserQuery) {
        query.set_search(self.search);
        query.set_role(self.role);
        query.set_status(self.status);
    }
}

/// Add/edit dialog contents. Status is ignored on create.
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Admin,
            status: UserStatus::Active,
        }
    }
}

impl UserForm {
    pub fn from_row(row: &UserRow) -> Self {
        Self {
            name: row.name.clone(),
            email: row.email.clone(),
            role: row.role.unwrap_or(Role::Admin),
            status: row.status,
        }
    }

    pub fn check(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AppError::bad_request(REQUIRED_FIELDS_MESSAGE));
        }
        Ok(())
    }

    pub fn create_request(&self) -> CreateUserRequest {
        let (first_name, last_name) = split_name(&self.name);
        CreateUserRequest {
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            role: self.role.as_str().to_string(),
        }
    }

    pub fn update_request(&self) -> UpdateUserRequest {
        let (first_name, last_name) = split_name(&self.name);
        UpdateUserRequest {
            first_name,
            last_name,
            email: self.email.trim().to_string(),
            role: self.role.as_str().to_string(),
            is_active: self.status.is_active(),
        }
    }
}

/// First token becomes the first name, the rest the last name. A single
/// token is used for both.
pub fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    let last = if rest.is_empty() { first.clone() } else { rest };
    (first, last)
}

pub fn to_row(record: UserRecord) -> UserRow {
    let display_id = record
        .employee_id
        .clone()
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| record.id.clone());
    UserRow {
        display_id,
        name: format!("{} {}", record.first_name, record.last_name).trim().to_string(),
        email: record.email,
        role: Role::from_code(&record.role),
        role_code: record.role,
        status: UserStatus::from_active(record.is_active),
        record_id: record.id,
    }
}

/// True when the failure means the admin token is no longer accepted.
pub fn is_session_expired(err: &AppError) -> bool {
    err.kind == AppErrorKind::Unauthorized
}

fn admin_token<T: TokenStore + ?Sized>(tokens: &T) -> Result<String, AppError> {
    tokens
        .token(Portal::Admin)
        .ok_or_else(|| AppError::unauthorized(SESSION_EXPIRED))
}

fn directory_error(err: ApiError, fallback: &str) -> AppError {
    match err {
        ApiError::Status { status: 401, .. } => AppError::unauthorized(SESSION_EXPIRED),
        ApiError::Status { status, body } => AppError::from_status(status, body.detail_or(fallback)),
        ApiError::Network(detail) => {
            tracing::warn!(%detail, "user directory unreachable");
            AppError::network(fallback)
        }
        ApiError::NotJson { .. } | ApiError::Malformed(_) => AppError::malformed(fallback),
    }
}

fn declared(success: Option<bool>, message: Option<String>, fallback: &str) -> Result<(), AppError> {
    if success == Some(true) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            message.filter(|m| !m.is_empty()).unwrap_or_else(|| fallback.to_string()),
        ))
    }
}

/// Fetch the page described by `query`.
pub async fn fetch_users<T>(api: &ApiClient, tokens: &T, query: &UserQuery) -> Result<UserPage, AppError>
where
    T: TokenStore + ?Sized,
{
    const FALLBACK: &str = "Failed to fetch users";

    let token = admin_token(tokens)?;
    let response = api
        .list_users(&token, query)
        .await
        .map_err(|e| directory_error(e, FALLBACK))?;

    declared(Some(response.success), response.message, FALLBACK)?;
    let data = response.data.unwrap_or_default();
    let total_pages = match data.pagination {
        Some(p) if p.pages > 0 => p.pages,
        Some(p) if p.total > 0 && query.limit > 0 => {
            u32::try_from(p.total.div_ceil(u64::from(query.limit))).unwrap_or(u32::MAX)
        }
        _ => 1,
    };

    Ok(UserPage {
        rows: data.users.into_iter().map(to_row).collect(),
        total_pages,
    })
}

pub async fn create_user<T>(api: &ApiClient, tokens: &T, form: &UserForm) -> Result<&'static str, AppError>
where
    T: TokenStore + ?Sized,
{
    const FALLBACK: &str = "Failed to create user";

    form.check()?;
    let token = admin_token(tokens)?;
    let response = api
        .create_user(&token, &form.create_request())
        .await
        .map_err(|e| directory_error(e, FALLBACK))?;
    declared(response.success, response.message, FALLBACK)?;

    tracing::info!(email = %form.email, role = form.role.as_str(), "user created");
    Ok(CREATED)
}

pub async fn update_user<T>(
    api: &ApiClient,
    tokens: &T,
    record_id: &str,
    form: &UserForm,
) -> Result<&'static str, AppError>
where
    T: TokenStore + ?Sized,
{
    const FALLBACK: &str = "Failed to update user";

    form.check()?;
    let token = admin_token(tokens)?;
    let response = api
        .update_user(&token, record_id, &form.update_request())
        .await
        .map_err(|e| directory_error(e, FALLBACK))?;
    declared(response.success, response.message, FALLBACK)?;

    tracing::info!(record_id, "user updated");
    Ok(UPDATED)
}

pub async fn delete_user<T>(api: &ApiClient, tokens: &T, record_id: &str) -> Result<&'static str, AppError>
where
    T: TokenStore + ?Sized,
{
    const FALLBACK: &str = "Failed to delete user";

    let token = admin_token(tokens)?;
    let response = api
        .delete_user(&token, record_id)
        .await
        .map_err(|e| directory_error(e, FALLBACK))?;
    declared(response.success, response.message, FALLBACK)?;

    tracing::info!(record_id, "user deleted");
    Ok(DELETED)
}
