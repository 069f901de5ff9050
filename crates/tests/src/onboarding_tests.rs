use axum::http::Method;
use client::{MemoryTokenStore, OnboardingWizard, TokenStore};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AdminData, AppErrorKind, HospitalData, OnboardingStep, Portal, Session};

use crate::common::MockBackend;

fn filled_wizard() -> OnboardingWizard {
    OnboardingWizard {
        step: OnboardingStep::AdminAccount,
        hospital: HospitalData {
            name: "Kingscare Hospital".to_string(),
            registration_number: "RC-1029".to_string(),
            license_number: "LIC-88".to_string(),
            hospital_number: "HN-7".to_string(),
            email: "info@kingscare.example".to_string(),
        },
        admin: AdminData {
            full_name: "Shade Badmus".to_string(),
            job_title: "Medical Director".to_string(),
            email: "shade@kingscare.example".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        },
        ..OnboardingWizard::default()
    }
}

#[tokio::test]
async fn test_register_sends_hospital_and_admin() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/hospital/register-with-verification",
        201,
        json!({"success": true, "message": "Verification email sent"}),
    );

    let mut wizard = filled_wizard();
    let notice = wizard.submit_admin(&backend.api()).await.unwrap();
    assert_eq!(notice, "Verification code sent to your email!");
    assert_eq!(wizard.step, OnboardingStep::EmailVerification);

    let request = backend.only_request("/api/hospital/register-with-verification");
    assert_eq!(request.body["hospitalData"]["name"], "Kingscare Hospital");
    assert_eq!(request.body["hospitalData"]["registrationNumber"], "RC-1029");
    assert_eq!(request.body["adminData"]["fullName"], "Shade Badmus");
    assert_eq!(request.body["adminData"]["password"], "secret1");
    assert!(request.body["adminData"].get("confirmPassword").is_none());
}

#[tokio::test]
async fn test_register_conflict_keeps_step() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/hospital/register-with-verification",
        409,
        json!({"success": false, "error": "Admin email already exists"}),
    );

    let mut wizard = filled_wizard();
    let err = wizard.submit_admin(&backend.api()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.message, "An admin with this email already exists");
    assert_eq!(wizard.step, OnboardingStep::AdminAccount);
}

#[tokio::test]
async fn test_invalid_admin_never_reaches_backend() {
    let backend = MockBackend::start().await;

    let mut wizard = filled_wizard();
    wizard.admin.confirm_password = "different".to_string();
    let err = wizard.submit_admin(&backend.api()).await.unwrap_err();

    assert_eq!(err.message, "Passwords do not match");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_verify_builds_pending_admin() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/hospital/verify-email",
        200,
        json!({
            "success": true,
            "token": "verified-jwt",
            "admin": {"id": 12, "name": "Shade Badmus", "email": "shade@kingscare.example"},
            "hospital": {"id": 4, "name": "Kingscare Hospital", "setupStatus": "pending"}
        }),
    );

    let mut wizard = filled_wizard();
    wizard.step = OnboardingStep::EmailVerification;
    wizard.verification.set_code("123456");

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let notice = wizard
        .submit_code(&backend.api(), &tokens, &mut session)
        .await
        .unwrap();

    assert_eq!(notice, "Email verified successfully!");
    assert_eq!(wizard.step, OnboardingStep::Welcome);
    assert_eq!(tokens.token(Portal::Admin).as_deref(), Some("verified-jwt"));
    assert!(!session.is_authenticated());

    let user = session.user().cloned().expect("pending admin");
    assert_eq!(user.id, "12");
    assert_eq!(user.initials, "SB");
    assert_eq!(user.job_title.as_deref(), Some("Medical Director"));

    let request = backend.only_request("/api/hospital/verify-email");
    assert_eq!(
        request.body,
        json!({"email": "shade@kingscare.example", "token": "123456"})
    );

    assert_eq!(wizard.access_dashboard(&mut session).unwrap(), "Welcome to HMS!");
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn test_expired_code_message() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/hospital/verify-email",
        400,
        json!({"success": false, "error": "Token expired"}),
    );

    let mut wizard = filled_wizard();
    wizard.step = OnboardingStep::EmailVerification;
    wizard.verification.set_code("654321");

    let tokens = MemoryTokenStore::default();
    let mut session = Session::anonymous();
    let err = wizard
        .submit_code(&backend.api(), &tokens, &mut session)
        .await
        .unwrap_err();

    assert_eq!(
        err.message,
        "Verification code has expired. Please request a new one"
    );
    assert_eq!(wizard.step, OnboardingStep::EmailVerification);
    assert_eq!(tokens.token(Portal::Admin), None);
}

#[tokio::test]
async fn test_resend_clears_typed_code() {
    let backend = MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/api/hospital/resend-verification",
        200,
        json!({"success": true, "message": "Sent"}),
    );

    let mut wizard = filled_wizard();
    wizard.step = OnboardingStep::EmailVerification;
    wizard.verification.set_code("12");

    let notice = wizard.resend_code(&backend.api()).await.unwrap();
    assert_eq!(notice, "Verification code resent to your email!");
    assert_eq!(wizard.verification.token, "");

    let request = backend.only_request("/api/hospital/resend-verification");
    assert_eq!(request.body, json!({"email": "shade@kingscare.example"}));
}
