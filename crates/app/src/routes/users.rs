use crate::auth::{use_auth, AuthState};
use crate::routes::Route;
use client::timing::{self, Debounce, BANNER_TIMEOUT, DEBOUNCE};
use client::users::{create_user, delete_user, fetch_users, is_session_expired, update_user};
use client::{ApiClient, UserFilters, UserForm};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdPlus, LdSearch, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{AppError, Portal, Role, UserQuery, UserRow, UserStatus};
use shared_ui::{
    same_value_options, AlertDialogAction, AlertDialogActions, AlertDialogCancel,
    AlertDialogContent, AlertDialogDescription, AlertDialogRoot, AlertDialogTitle, Badge,
    BadgeTone, Banner, BannerTone, Button, ButtonVariant, Card, DataTable, DataTableCell,
    DataTableMessage, DataTableRow, DialogContent, DialogDescription, DialogFooter, DialogRoot,
    DialogTitle, FormSelect, Input, PageHeader, Pagination,
};

const COLUMNS: [&str; 6] = ["ID", "Name", "Email", "Role", "Status", "Actions"];

/// Inline banner that clears itself after [`BANNER_TIMEOUT`]. A newer
/// message restarts the countdown.
#[derive(Clone, Copy, PartialEq)]
struct Flash {
    message: Signal<Option<String>>,
    ticket: Signal<Debounce>,
}

impl Flash {
    fn new() -> Self {
        Self {
            message: Signal::new(None),
            ticket: Signal::new(Debounce::default()),
        }
    }

    fn show(mut self, message: impl Into<String>) {
        let id = self.ticket.write().next();
        self.message.set(Some(message.into()));
        spawn(async move {
            timing::sleep(BANNER_TIMEOUT).await;
            if self.ticket.read().is_current(id) {
                self.message.set(None);
            }
        });
    }

    fn clear(mut self) {
        self.ticket.write().next();
        self.message.set(None);
    }
}

/// Sign the admin out after the backend rejected their token.
async fn expire_session(api: ApiClient, mut auth: AuthState) {
    let portal = client::session_portal(&auth, Portal::Admin);
    let tokens = auth.token_store();
    client::logout(&api, &tokens, &mut auth, portal).await;
    navigator().push(Route::login_for(portal));
}

fn role_options() -> Vec<(String, String)> {
    same_value_options(Role::ALL.iter().map(|r| r.label()))
}

fn status_options() -> Vec<(String, String)> {
    same_value_options([UserStatus::Active.label(), UserStatus::Inactive.label()])
}

fn status_tone(status: UserStatus) -> BadgeTone {
    match status {
        UserStatus::Active => BadgeTone::Success,
        UserStatus::Inactive => BadgeTone::Neutral,
    }
}

/// Staff directory for the hospital admin.
///
/// Filtering and paging happen on the backend; every successful write
/// refetches the current page.
#[component]
pub fn AdminUsers() -> Element {
    let auth = use_auth();
    let api = use_context::<ApiClient>();

    let mut query = use_signal(UserQuery::default);
    let mut search_input = use_signal(String::new);
    let mut role_filter = use_signal(String::new);
    let mut status_filter = use_signal(String::new);
    let mut debounce = use_signal(Debounce::default);

    let error = use_hook(Flash::new);
    let success = use_hook(Flash::new);

    let mut show_form = use_signal(|| false);
    let mut editing: Signal<Option<UserRow>> = use_signal(|| None);
    let mut form = use_signal(UserForm::default);
    let mut saving = use_signal(|| false);
    let mut pending_delete: Signal<Option<UserRow>> = use_signal(|| None);

    let api_for_list = api.clone();
    let mut users = use_resource(move || {
        let api = api_for_list.clone();
        let snapshot = query();
        let mut query = query;
        async move {
            let tokens = auth.token_store();
            match fetch_users(&api, &tokens, &snapshot).await {
                Ok(page) => {
                    // Deletes can shrink the result below the current page.
                    if query.with_mut(|q| q.fit_to(page.total_pages)) {
                        tracing::debug!(page = query.peek().page, "page moved back into range");
                    }
                    Some(page)
                }
                Err(e) => {
                    error.show(e.message.clone());
                    if is_session_expired(&e) {
                        expire_session(api, auth).await;
                    }
                    None
                }
            }
        }
    });

    // Filters apply together once typing pauses, always from page 1.
    let mut schedule_filters = move || {
        let ticket = debounce.write().next();
        spawn(async move {
            if !timing::debounced(DEBOUNCE, ticket, || debounce()).await {
                return;
            }
            let filters = UserFilters {
                search: search_input(),
                role: role_filter(),
                status: status_filter(),
            };
            tracing::debug!(?filters, "user filters applied");
            filters.apply_to(&mut query.write());
        });
    };

    let on_failure = {
        let api = api.clone();
        move |e: AppError| {
            let api = api.clone();
            async move {
                error.show(e.message.clone());
                if is_session_expired(&e) {
                    expire_session(api, auth).await;
                }
            }
        }
    };

    let open_create = move |_: MouseEvent| {
        editing.set(None);
        form.set(UserForm::default());
        show_form.set(true);
    };

    let api_for_save = api.clone();
    let fail_save = on_failure.clone();
    let handle_save = move |_: MouseEvent| {
        let api = api_for_save.clone();
        let fail = fail_save.clone();
        let draft = form();
        let target = editing();
        spawn(async move {
            saving.set(true);
            let tokens = auth.token_store();
            let result = match &target {
                Some(row) => update_user(&api, &tokens, &row.record_id, &draft).await,
                None => create_user(&api, &tokens, &draft).await,
            };
            saving.set(false);
            match result {
                Ok(message) => {
                    show_form.set(false);
                    editing.set(None);
                    error.clear();
                    success.show(message);
                    users.restart();
                }
                Err(e) => fail(e).await,
            }
        });
    };

    let handle_delete = move |_: MouseEvent| {
        let api = api.clone();
        let fail = on_failure.clone();
        let Some(row) = pending_delete() else {
            return;
        };
        spawn(async move {
            let tokens = auth.token_store();
            let result = delete_user(&api, &tokens, &row.record_id).await;
            pending_delete.set(None);
            match result {
                Ok(message) => {
                    error.clear();
                    success.show(message);
                    users.restart();
                }
                Err(e) => fail(e).await,
            }
        });
    };

    let total_pages = users
        .read()
        .as_ref()
        .and_then(|page| page.as_ref())
        .map(|page| page.total_pages)
        .unwrap_or(1);
    let current_page = query.read().page;
    let is_editing = editing.read().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        div { class: "users-page",
            PageHeader {
                title: "User Management",
                subtitle: "Manage hospital staff accounts and their roles",
                Button { onclick: open_create,
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Add User"
                }
            }

            if let Some(message) = error.message.read().clone() {
                Banner {
                    tone: BannerTone::Error,
                    message,
                    on_dismiss: move |_| error.clear(),
                }
            }
            if let Some(message) = success.message.read().clone() {
                Banner {
                    tone: BannerTone::Success,
                    message,
                    on_dismiss: move |_| success.clear(),
                }
            }

            Card {
                div { class: "users-filters",
                    div { class: "users-search",
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        Input {
                            placeholder: "Search by name or email...",
                            value: search_input(),
                            on_input: move |e: FormEvent| {
                                search_input.set(e.value());
                                schedule_filters();
                            },
                        }
                    }
                    FormSelect {
                        value: role_filter(),
                        placeholder: "All Roles",
                        options: role_options(),
                        onchange: move |v: String| {
                            role_filter.set(v);
                            schedule_filters();
                        },
                    }
                    FormSelect {
                        value: status_filter(),
                        placeholder: "All Status",
                        options: status_options(),
                        onchange: move |v: String| {
                            status_filter.set(v);
                            schedule_filters();
                        },
                    }
                }

                DataTable { columns: COLUMNS.map(String::from).to_vec(),
                    match &*users.read() {
                        None => rsx! {
                            DataTableMessage { span: COLUMNS.len(), "Loading users..." }
                        },
                        Some(None) => rsx! {
                            DataTableMessage { span: COLUMNS.len(), "Unable to load users." }
                        },
                        Some(Some(page)) if page.rows.is_empty() => rsx! {
                            DataTableMessage { span: COLUMNS.len(), "No users found." }
                        },
                        Some(Some(page)) => rsx! {
                            for row in page.rows.iter() {
                                UserTableRow {
                                    key: "{row.record_id}",
                                    row: row.clone(),
                                    on_edit: move |row: UserRow| {
                                        form.set(UserForm::from_row(&row));
                                        editing.set(Some(row));
                                        show_form.set(true);
                                    },
                                    on_delete: move |row: UserRow| pending_delete.set(Some(row)),
                                }
                            }
                        },
                    }
                }

                div { class: "table-footer",
                    span { class: "table-footer-summary", "Page {current_page} of {total_pages}" }
                    Pagination {
                        current: current_page as usize,
                        total_pages: total_pages as usize,
                        on_change: move |p: usize| {
                            let p = u32::try_from(p).unwrap_or(u32::MAX);
                            query.write().set_page(p, total_pages);
                        },
                    }
                }
            }

            DialogRoot {
                open: show_form(),
                on_open_change: move |open: bool| {
                    show_form.set(open);
                    if !open {
                        editing.set(None);
                    }
                },
                DialogContent {
                    DialogTitle {
                        if is_editing { "Edit User" } else { "Add New User" }
                    }
                    DialogDescription {
                        if is_editing {
                            "Update the staff member's details."
                        } else {
                            "An invitation email is sent to the new user."
                        }
                    }

                    div { class: "dialog-form",
                        Input {
                            label: "Full Name",
                            required: true,
                            placeholder: "Jane Doe",
                            value: form.read().name.clone(),
                            on_input: move |e: FormEvent| form.write().name = e.value(),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            required: true,
                            placeholder: "jane@hospital.com",
                            value: form.read().email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                        }
                        FormSelect {
                            label: "Role",
                            value: form.read().role.label().to_string(),
                            options: role_options(),
                            onchange: move |v: String| {
                                if let Some(role) = Role::from_label(&v) {
                                    form.write().role = role;
                                }
                            },
                        }
                        if is_editing {
                            FormSelect {
                                label: "Status",
                                value: form.read().status.label().to_string(),
                                options: status_options(),
                                onchange: move |v: String| {
                                    if let Some(status) = UserStatus::from_label(&v) {
                                        form.write().status = status;
                                    }
                                },
                            }
                        }
                    }

                    DialogFooter {
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                show_form.set(false);
                                editing.set(None);
                            },
                            "Cancel"
                        }
                        Button {
                            loading: saving(),
                            loading_text: "Saving...",
                            onclick: handle_save,
                            if is_editing { "Update User" } else { "Create User" }
                        }
                    }
                }
            }

            AlertDialogRoot {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                AlertDialogContent {
                    AlertDialogTitle { "Delete User" }
                    AlertDialogDescription {
                        {
                            let name = pending_delete
                                .read()
                                .as_ref()
                                .map(|row| row.name.clone())
                                .unwrap_or_default();
                            format!("Are you sure you want to delete {name}? This action cannot be undone.")
                        }
                    }
                    AlertDialogActions {
                        AlertDialogCancel { "Cancel" }
                        AlertDialogAction { on_click: handle_delete, "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserTableRow(row: UserRow, on_edit: EventHandler<UserRow>, on_delete: EventHandler<UserRow>) -> Element {
    let for_edit = row.clone();
    let for_delete = row.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                span { class: "cell-accent", "{row.display_id}" }
            }
            DataTableCell { "{row.name}" }
            DataTableCell { "{row.email}" }
            DataTableCell { {row.role_label().to_string()} }
            DataTableCell {
                Badge { tone: status_tone(row.status), {row.status.label()} }
            }
            DataTableCell {
                div { class: "row-actions",
                    button {
                        class: "icon-button",
                        "aria-label": "Edit user",
                        onclick: move |_| on_edit.call(for_edit.clone()),
                        Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                    }
                    button {
                        class: "icon-button danger",
                        "aria-label": "Delete user",
                        onclick: move |_| on_delete.call(for_delete.clone()),
                        Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                    }
                }
            }
        }
    }
}
