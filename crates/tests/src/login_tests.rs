use axum::http::Method;
use client::{login, LoginMode, MemoryTokenStore, TokenStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, LoginRequest, Portal, Role, Session};

use crate::common::MockBackend;

fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_admin_login_stores_token_and_session() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/admin/login",
        200,
        json!({
            "token": "admin-jwt",
            "user": {
                "id": 1,
                "name": "Shade Badmus",
                "email": "shade@kingscare.example",
                "jobTitle": "Medical Director",
                "hospital": {"id": 4, "hospitalId": "HSP004", "name": "Kingscare"}
            }
        }),
    );

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let success = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::Admin,
        &credentials("shade@kingscare.example", "secret1"),
    )
    .await
    .expect("admin login should succeed");

    assert_eq!(success.notice, "Welcome back, Shade Badmus!");
    assert_eq!(success.user.initials, "SB");
    assert_eq!(success.user.role, Role::Admin);
    assert_eq!(success.user.hospital.map(|h| h.name), Some("Kingscare".to_string()));
    assert!(session.is_authenticated());
    assert_eq!(tokens.get("adminToken").as_deref(), Some("admin-jwt"));
    assert_eq!(tokens.get("userToken"), None);

    let request = backend.only_request("/api/admin/login");
    assert_eq!(request.method, "POST");
    assert_eq!(
        request.body,
        json!({"email": "shade@kingscare.example", "password": "secret1"})
    );
}

#[tokio::test]
async fn test_staff_login_reads_nested_envelope() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/login",
        200,
        json!({
            "success": true,
            "data": {
                "token": "staff-jwt",
                "user": {
                    "id": "68824c4a7dedd89b47860fb2",
                    "firstName": "James",
                    "lastName": "Okafor",
                    "email": "james@kingscare.example",
                    "role": "doctor",
                    "employeeId": "DR0001"
                },
                "hospital": {"id": "68824a12", "name": "kingscare"}
            }
        }),
    );

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let success = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::User,
        &credentials("james@kingscare.example", "pw"),
    )
    .await
    .expect("staff login should succeed");

    assert_eq!(success.user.name, "James Okafor");
    assert_eq!(success.user.initials, "JO");
    assert_eq!(success.user.role, Role::Doctor);
    assert_eq!(success.user.employee_id.as_deref(), Some("DR0001"));
    assert_eq!(tokens.get("userToken").as_deref(), Some("staff-jwt"));
    assert_eq!(tokens.get("adminToken"), None);
}

#[tokio::test]
async fn test_unverified_email_message() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/admin/login",
        401,
        json!({"success": false, "error": "Email not verified", "message": "Verify first"}),
    );

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let err = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::Admin,
        &credentials("new@kingscare.example", "secret1"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Please verify your email address before logging in.");
    assert!(!session.is_authenticated());
    assert_eq!(tokens.token(Portal::Admin), None);
}

#[tokio::test]
async fn test_html_response_is_a_format_error() {
    let backend = MockBackend::start().await;
    backend.respond_raw(
        Method::POST,
        "/api/auth/login",
        502,
        "text/html",
        "<html><body>Bad Gateway</body></html>",
    );

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let err = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::User,
        &credentials("james@kingscare.example", "pw"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::MalformedResponse);
    assert_eq!(err.message, "Server returned invalid response format");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/admin/login",
        200,
        json!({"user": {"id": 1, "name": "No Token", "email": "n@t.example"}}),
    );

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let err = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::Admin,
        &credentials("n@t.example", "pw"),
    )
    .await
    .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::MalformedResponse);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_blank_fields_never_reach_backend() {
    let backend = MockBackend::start().await;

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let err = login(
        &backend.api(),
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::Admin,
        &credentials("  ", ""),
    )
    .await
    .unwrap_err();

    assert_eq!(err.message, "Please fill in all fields");
    assert!(backend.requests().is_empty());
}
