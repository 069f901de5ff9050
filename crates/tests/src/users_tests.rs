use axum::http::Method;
use client::users::{
    create_user, delete_user, fetch_users, is_session_expired, update_user, CREATED, DELETED,
    SESSION_EXPIRED, UPDATED,
};
use client::{MemoryTokenStore, TokenStore, UserForm};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Portal, Role, UserQuery, UserStatus};

use crate::common::MockBackend;

fn admin_tokens() -> MemoryTokenStore {
    let tokens = MemoryTokenStore::default();
    tokens.store_token(Portal::Admin, "admin-jwt");
    tokens
}

fn listing() -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "users": [
                {
                    "_id": "u1",
                    "employeeId": "DR0001",
                    "firstName": "James",
                    "lastName": "Okafor",
                    "email": "james@kingscare.example",
                    "role": "doctor",
                    "isActive": true
                },
                {
                    "_id": "u2",
                    "firstName": "Ada",
                    "lastName": "Obi",
                    "email": "ada@kingscare.example",
                    "role": "lab_technician",
                    "isActive": false
                }
            ],
            "pagination": {"page": 2, "limit": 10, "total": 42, "pages": 5}
        }
    })
}

#[tokio::test]
async fn test_fetch_users_maps_filters_and_rows() {
    let backend = MockBackend::start().await;
    backend.respond(Method::GET, "/api/users", 200, listing());

    let mut query = UserQuery::default();
    query.set_search("ada obi");
    query.set_role("Lab Staff");
    query.set_status("Inactive");
    query.page = 2;

    let page = fetch_users(&backend.api(), &admin_tokens(), &query)
        .await
        .unwrap();

    assert_eq!(page.total_pages, 5);
    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].display_id, "DR0001");
    assert_eq!(page.rows[0].name, "James Okafor");
    assert_eq!(page.rows[0].role, Some(Role::Doctor));
    assert_eq!(page.rows[1].display_id, "u2");
    assert_eq!(page.rows[1].role_label(), "Lab Staff");
    assert_eq!(page.rows[1].status, UserStatus::Inactive);

    let request = backend.only_request("/api/users");
    assert_eq!(request.method, "GET");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-jwt"));
    assert_eq!(request.query_param("page").as_deref(), Some("2"));
    assert_eq!(request.query_param("limit").as_deref(), Some("10"));
    assert_eq!(request.query_param("search").as_deref(), Some("ada obi"));
    assert_eq!(request.query_param("role").as_deref(), Some("lab_technician"));
    assert_eq!(request.query_param("status").as_deref(), Some("inactive"));
}

#[tokio::test]
async fn test_empty_filters_are_sent_blank() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/users",
        200,
        json!({"success": true, "data": {"users": []}}),
    );

    let page = fetch_users(&backend.api(), &admin_tokens(), &UserQuery::default())
        .await
        .unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.total_pages, 1);

    let request = backend.only_request("/api/users");
    assert_eq!(request.query_param("page").as_deref(), Some("1"));
    assert_eq!(request.query_param("role").as_deref(), Some(""));
    assert_eq!(request.query_param("status").as_deref(), Some(""));
}

#[tokio::test]
async fn test_rejected_token_expires_session() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/users",
        401,
        json!({"success": false, "message": "jwt expired"}),
    );

    let err = fetch_users(&backend.api(), &admin_tokens(), &UserQuery::default())
        .await
        .unwrap_err();
    assert!(is_session_expired(&err));
    assert_eq!(err.message, SESSION_EXPIRED);
}

#[tokio::test]
async fn test_server_error_surfaces_backend_message() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/api/users",
        500,
        json!({"success": false, "message": "Database unavailable"}),
    );

    let err = fetch_users(&backend.api(), &admin_tokens(), &UserQuery::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ServerError);
    assert_eq!(err.message, "Database unavailable");
    assert!(!is_session_expired(&err));
}

#[tokio::test]
async fn test_create_user_splits_name() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/users",
        201,
        json!({"success": true, "message": "User created"}),
    );

    let form = UserForm {
        name: "Mary Jane Watson".to_string(),
        email: "mary@kingscare.example".to_string(),
        role: Role::Nurse,
        status: UserStatus::Inactive,
    };
    let notice = create_user(&backend.api(), &admin_tokens(), &form)
        .await
        .unwrap();
    assert_eq!(notice, CREATED);

    let request = backend.only_request("/api/users");
    assert_eq!(request.method, "POST");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-jwt"));
    assert_eq!(
        request.body,
        json!({
            "firstName": "Mary",
            "lastName": "Jane Watson",
            "email": "mary@kingscare.example",
            "role": "nurse"
        })
    );
}

#[tokio::test]
async fn test_create_user_declined_by_backend() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/users",
        200,
        json!({"success": false, "message": "Email already in use"}),
    );

    let form = UserForm {
        name: "Ada Obi".to_string(),
        email: "ada@kingscare.example".to_string(),
        ..UserForm::default()
    };
    let err = create_user(&backend.api(), &admin_tokens(), &form)
        .await
        .unwrap_err();
    assert_eq!(err.message, "Email already in use");
}

#[tokio::test]
async fn test_update_user_puts_status() {
    let backend = MockBackend::start().await;
    backend.respond(Method::PUT, "/api/users/u2", 200, json!({"success": true}));

    let form = UserForm {
        name: "Ada Obi".to_string(),
        email: "ada@kingscare.example".to_string(),
        role: Role::Pharmacist,
        status: UserStatus::Active,
    };
    let notice = update_user(&backend.api(), &admin_tokens(), "u2", &form)
        .await
        .unwrap();
    assert_eq!(notice, UPDATED);

    let request = backend.only_request("/api/users/u2");
    assert_eq!(request.method, "PUT");
    assert_eq!(request.body["role"], "pharmacist");
    assert_eq!(request.body["isActive"], true);
}

#[tokio::test]
async fn test_delete_user_by_record_id() {
    let backend = MockBackend::start().await;
    backend.respond(Method::DELETE, "/api/users/u1", 200, json!({"success": true}));

    let notice = delete_user(&backend.api(), &admin_tokens(), "u1")
        .await
        .unwrap();
    assert_eq!(notice, DELETED);

    let request = backend.only_request("/api/users/u1");
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-jwt"));
}

#[tokio::test]
async fn test_blank_form_is_not_sent() {
    let backend = MockBackend::start().await;

    let err = create_user(&backend.api(), &admin_tokens(), &UserForm::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(backend.requests().is_empty());
}
