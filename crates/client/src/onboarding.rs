//! The four-step hospital onboarding wizard.
//!
//! Each `submit_*` either advances exactly one step and returns the success
//! notice, or leaves the step untouched and returns the error to show.

use shared_types::{
    initials_from_name, AdminData, AppError, ErrorBody, HospitalData, OnboardingStep, Portal,
    RegistrationRequest, Role, User, VerificationData, VerifyEmailRequest,
};

use crate::api::{ApiClient, ApiError};
use crate::session::{enter_dashboard, establish_pending, AuthSession, SessionStore};
use crate::storage::TokenStore;

const NETWORK_UNREACHABLE: &str =
    "Network error. Please check your connection and ensure the backend is running.";
const NETWORK_GENERIC: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnboardingWizard {
    pub step: OnboardingStep,
    pub hospital: HospitalData,
    pub admin: AdminData,
    pub verification: VerificationData,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            tracing::debug!(from = ?self.step, to = ?next, "onboarding step advanced");
            self.step = next;
        }
    }

    /// Step 1: local checks only.
    pub fn submit_hospital(&mut self) -> Result<&'static str, AppError> {
        self.hospital.check()?;
        self.advance();
        Ok("Hospital details saved!")
    }

    /// Step 2: validate the admin account, then register hospital and admin
    /// together, which sends the verification email.
    pub async fn submit_admin(&mut self, api: &ApiClient) -> Result<&'static str, AppError> {
        self.admin.check()?;

        let request = RegistrationRequest {
            hospital_data: self.hospital.clone(),
            admin_data: self.admin.clone(),
        };
        api.register_hospital(&request)
            .await
            .map_err(registration_error)?;

        tracing::info!(email = %self.admin.email, "registration accepted, verification email sent");
        self.advance();
        Ok("Verification code sent to your email!")
    }

    /// Step 3: exchange the emailed code for an admin token. The session is
    /// left pending until the welcome step.
    pub async fn submit_code<T, S>(
        &mut self,
        api: &ApiClient,
        tokens: &T,
        store: &mut S,
    ) -> Result<&'static str, AppError>
    where
        T: TokenStore + ?Sized,
        S: SessionStore,
    {
        self.verification.check()?;

        let request = VerifyEmailRequest {
            email: self.admin.email.clone(),
            token: self.verification.token.clone(),
        };
        let response = api.verify_email(&request).await.map_err(verification_error)?;

        let (Some(token), Some(admin)) = (response.token.filter(|t| !t.is_empty()), response.admin)
        else {
            return Err(AppError::malformed("Invalid response from server"));
        };

        let name = if admin.name.trim().is_empty() {
            self.admin.full_name.clone()
        } else {
            admin.name
        };
        let user = User {
            id: admin.id,
            initials: initials_from_name(&name),
            name,
            email: if admin.email.is_empty() {
                self.admin.email.clone()
            } else {
                admin.email
            },
            role: Role::Admin,
            job_title: admin.job_title.or_else(|| Some(self.admin.job_title.clone())),
            employee_id: None,
            hospital: response.hospital,
        };

        establish_pending(tokens, store, Portal::Admin, AuthSession { token, user });
        self.advance();
        Ok("Email verified successfully!")
    }

    /// Ask for a fresh code. Clears whatever was typed on success.
    pub async fn resend_code(&mut self, api: &ApiClient) -> Result<&'static str, AppError> {
        match api.resend_verification(&self.admin.email).await {
            Ok(_) => {
                self.verification.token.clear();
                Ok("Verification code resent to your email!")
            }
            Err(ApiError::Status { status, body }) => Err(AppError::from_status(
                status,
                body.detail_or("Failed to resend code"),
            )),
            Err(e) => {
                tracing::warn!(error = %e, "resend verification failed");
                Err(AppError::network(NETWORK_GENERIC))
            }
        }
    }

    /// Step 4: enter the dashboard with the verified admin.
    pub fn access_dashboard<S: SessionStore>(&self, store: &mut S) -> Result<&'static str, AppError> {
        if self.step != OnboardingStep::Welcome || !enter_dashboard(store) {
            return Err(AppError::unauthorized("Please verify your email first"));
        }
        Ok("Welcome to HMS!")
    }

    /// Carry the outcome of a request made on `settled`, a copy taken
    /// before the await, into the live wizard. Form fields edited in the
    /// meantime are kept; only the step and a cleared code come across.
    pub fn settle(&mut self, settled: &OnboardingWizard) {
        self.step = settled.step;
        if settled.verification.token.is_empty() {
            self.verification.token.clear();
        }
    }

    /// Move back one step. Does nothing on the first step.
    pub fn back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }
}

fn transport_error(err: &ApiError) -> AppError {
    match err {
        ApiError::Network(_) => AppError::network(NETWORK_UNREACHABLE),
        _ => AppError::network(NETWORK_GENERIC),
    }
}

pub fn registration_error(err: ApiError) -> AppError {
    let ApiError::Status { status, body } = &err else {
        tracing::warn!(error = %err, "registration request failed");
        return transport_error(&err);
    };
    AppError::from_status(*status, registration_message(body))
}

fn registration_message(body: &ErrorBody) -> String {
    match body.code() {
        Some("Hospital already exists") => "A hospital with this information already exists".to_string(),
        Some("Admin email already exists") => "An admin with this email already exists".to_string(),
        Some("Validation failed") => "Please check your input and try again".to_string(),
        Some("Email service unavailable") => {
            "Unable to send verification email. Please try again later.".to_string()
        }
        _ => body.detail_or("Registration failed"),
    }
}

pub fn verification_error(err: ApiError) -> AppError {
    let ApiError::Status { status, body } = &err else {
        tracing::warn!(error = %err, "verification request failed");
        return transport_error(&err);
    };
    AppError::from_status(*status, verification_message(body))
}

fn verification_message(body: &ErrorBody) -> String {
    match body.code() {
        Some("Token already used") => "This verification code has already been used".to_string(),
        Some("Token expired") => "Verification code has expired. Please request a new one".to_string(),
        Some("Invalid token") => "Invalid verification code. Please try again".to_string(),
        Some("Too many attempts") => {
            "Too many verification attempts. Please request a new code".to_string()
        }
        _ => body.detail_or("Verification failed"),
    }
}
