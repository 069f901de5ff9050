use axum::http::Method;
use client::{
    development_session, guard, login, logout, rehydrate, session_portal, GuardDecision,
    LoginMode, LogoutOutcome, MemoryTokenStore, TokenStore,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{LoginRequest, MenuRole, Portal, Role, Session, SessionPhase};

use crate::common::MockBackend;

#[tokio::test]
async fn test_logout_sends_bearer_and_clears_token() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/admin/logout",
        200,
        json!({"success": true, "message": "Logged out"}),
    );

    let tokens = MemoryTokenStore::default();
    tokens.store_token(Portal::Admin, "admin-jwt");
    tokens.store_token(Portal::User, "staff-jwt");
    let mut session = development_session();

    let outcome = logout(&backend.api(), &tokens, &mut session, Portal::Admin).await;
    assert_eq!(outcome, LogoutOutcome::Confirmed);
    assert_eq!(session, Session::anonymous());
    assert_eq!(tokens.token(Portal::Admin), None);
    assert_eq!(tokens.token(Portal::User).as_deref(), Some("staff-jwt"));

    let request = backend.only_request("/api/admin/logout");
    assert_eq!(request.authorization.as_deref(), Some("Bearer admin-jwt"));
}

#[tokio::test]
async fn test_failed_logout_still_clears_state() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/logout",
        500,
        json!({"success": false, "message": "boom"}),
    );

    let tokens = MemoryTokenStore::default();
    tokens.store_token(Portal::User, "staff-jwt");
    let mut session = development_session();

    let outcome = logout(&backend.api(), &tokens, &mut session, Portal::User).await;
    assert_eq!(outcome, LogoutOutcome::RemoteFailed);
    assert_eq!(tokens.token(Portal::User), None);
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_logged_out_console_is_guarded() {
    let backend = MockBackend::start().await;
    backend.respond(Method::POST, "/api/auth/logout", 200, json!({"success": true}));

    let tokens = MemoryTokenStore::default();
    tokens.store_token(Portal::User, "staff-jwt");
    let mut session = development_session();
    logout(&backend.api(), &tokens, &mut session, Portal::User).await;

    let phase = rehydrate(&tokens, &session, Portal::User);
    assert_eq!(phase, SessionPhase::Anonymous);
    assert_eq!(
        guard(false, phase, Portal::User),
        GuardDecision::RedirectToLogin(Portal::User)
    );
    assert_eq!(guard(true, phase, Portal::User), GuardDecision::Render);
}

#[tokio::test]
async fn test_staff_admin_logs_out_of_staff_portal() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/auth/login",
        200,
        json!({
            "data": {
                "token": "staff-jwt",
                "user": {
                    "id": 9,
                    "firstName": "Ngozi",
                    "lastName": "Eze",
                    "email": "ngozi@kingscare.example",
                    "role": "admin"
                }
            }
        }),
    );
    backend.respond(Method::POST, "/api/auth/logout", 200, json!({"success": true}));

    let api = backend.api();
    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let signed_in = login(
        &api,
        LoginMode::Live,
        &tokens,
        &mut session,
        Portal::User,
        &LoginRequest {
            email: "ngozi@kingscare.example".to_string(),
            password: "pw".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(signed_in.user.role, Role::Admin);

    let menu_role = MenuRole::for_session(Portal::User, &signed_in.user);
    assert_eq!(menu_role, MenuRole::Admin);

    let portal = session_portal(&session, menu_role.portal());
    assert_eq!(portal, Portal::User);

    let outcome = logout(&api, &tokens, &mut session, portal).await;
    assert_eq!(outcome, LogoutOutcome::Confirmed);
    assert_eq!(tokens.token(Portal::User), None);
    assert_eq!(session, Session::anonymous());

    let request = backend.only_request("/api/auth/logout");
    assert_eq!(request.authorization.as_deref(), Some("Bearer staff-jwt"));
}
