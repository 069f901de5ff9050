use serde::{Deserialize, Serialize};

use crate::models::{Role, UserStatus};

/// Rows per page on the user management screen.
pub const USERS_PER_PAGE: u32 = 10;

/// Map a role filter label to the backend code. Unknown labels are lowercased.
pub fn role_filter_code(label: &str) -> String {
    Role::from_label(label)
        .map(|r| r.as_str().to_string())
        .unwrap_or_else(|| label.to_lowercase())
}

/// Map a status filter label to the backend value.
pub fn status_filter_code(label: &str) -> String {
    label.to_lowercase()
}

/// Query sent to `GET /api/users`. Filters hold UI labels; empty means "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub page: u32,
    pub limit: u32,
    pub search: String,
    pub role: String,
    pub status: String,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: USERS_PER_PAGE,
            search: String::new(),
            role: String::new(),
            status: String::new(),
        }
    }
}

impl UserQuery {
    /// Query-string pairs with role and status mapped to backend codes.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("search", self.search.clone()),
            ("role", role_filter_code(&self.role)),
            ("status", status_filter_code(&self.status)),
        ]
    }

    /// Filter changes always restart from the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
        self.page = 1;
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.page = 1;
    }

    /// Clamp to `1..=total_pages` (a zero-page result stays on page 1).
    pub fn set_page(&mut self, page: u32, total_pages: u32) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Pull the page back inside a result that shrank under it. Returns
    /// `true` when the page moved and the list must be fetched again.
    pub fn fit_to(&mut self, total_pages: u32) -> bool {
        let before = self.page;
        self.set_page(before, total_pages);
        self.page != before
    }
}

/// Row shown in the user management table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    /// Backend record id used for update and delete.
    pub record_id: String,
    /// Employee number shown to the operator.
    pub display_id: String,
    pub name: String,
    pub email: String,
    pub role: Option<Role>,
    pub role_code: String,
    pub status: UserStatus,
}

impl UserRow {
    pub fn role_label(&self) -> &str {
        self.role.map(|r| r.label()).unwrap_or(&self.role_code)
    }
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    total.div_ceil(per_page)
}

/// Slice of `items` for 1-based `page`.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Page numbers to render as buttons: at most `max_visible`, centred on
/// `current` and shifted to stay inside `1..=total_pages`.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end + 1 - start < max_visible {
        start = (end + 1).saturating_sub(max_visible).max(1);
    }
    (start..=end).collect()
}
