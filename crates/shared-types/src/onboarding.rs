//! Forms collected by the hospital onboarding wizard and their checks.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be at least 6 characters long";
pub const INVALID_CODE_MESSAGE: &str = "Please enter a valid 6-digit verification code";

pub const CODE_LEN: usize = 6;

const REQUIRED: &str = "required";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Wizard steps in order. `Back` only ever moves one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OnboardingStep {
    #[default]
    HospitalDetails,
    AdminAccount,
    EmailVerification,
    Welcome,
}

impl OnboardingStep {
    pub const COUNT: u8 = 4;

    pub const ALL: [OnboardingStep; 4] = [
        OnboardingStep::HospitalDetails,
        OnboardingStep::AdminAccount,
        OnboardingStep::EmailVerification,
        OnboardingStep::Welcome,
    ];

    /// 1-based position shown as "Step N of 4".
    pub fn number(&self) -> u8 {
        match self {
            OnboardingStep::HospitalDetails => 1,
            OnboardingStep::AdminAccount => 2,
            OnboardingStep::EmailVerification => 3,
            OnboardingStep::Welcome => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            OnboardingStep::HospitalDetails => "Hospital Details",
            OnboardingStep::AdminAccount => "Admin Account",
            OnboardingStep::EmailVerification => "Email Verification",
            OnboardingStep::Welcome => "Welcome",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            OnboardingStep::HospitalDetails => Some(OnboardingStep::AdminAccount),
            OnboardingStep::AdminAccount => Some(OnboardingStep::EmailVerification),
            OnboardingStep::EmailVerification => Some(OnboardingStep::Welcome),
            OnboardingStep::Welcome => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            OnboardingStep::HospitalDetails => None,
            OnboardingStep::AdminAccount => Some(OnboardingStep::HospitalDetails),
            OnboardingStep::EmailVerification => Some(OnboardingStep::AdminAccount),
            OnboardingStep::Welcome => Some(OnboardingStep::EmailVerification),
        }
    }
}

/// Hospital identity captured on the first step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HospitalData {
    #[validate(custom(function = "not_blank", message = "Hospital name is required"))]
    pub name: String,
    #[validate(custom(function = "not_blank", message = "Registration number is required"))]
    pub registration_number: String,
    #[validate(custom(function = "not_blank", message = "License number is required"))]
    pub license_number: String,
    #[validate(custom(function = "not_blank", message = "Hospital number is required"))]
    pub hospital_number: String,
    #[validate(custom(function = "not_blank", message = "Hospital email is required"))]
    pub email: String,
}

impl HospitalData {
    /// Every field must be filled in.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()
            .map_err(|errors| AppError::from(errors).with_message(REQUIRED_FIELDS_MESSAGE))
    }
}

/// First administrator account, captured on the second step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AdminData {
    #[validate(custom(function = "not_blank", message = "Full name is required"))]
    pub full_name: String,
    #[validate(custom(function = "not_blank", message = "Job title is required"))]
    pub job_title: String,
    #[validate(custom(function = "not_blank", message = "Email is required"))]
    pub email: String,
    #[validate(
        custom(function = "not_blank", message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters long")
    )]
    pub password: String,
    #[serde(skip_serializing, default)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl AdminData {
    /// Required fields first, then confirmation, then password length.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(|errors| {
            let message = admin_failure_message(&errors);
            AppError::from(errors).with_message(message)
        })
    }
}

fn admin_failure_message(errors: &ValidationErrors) -> &'static str {
    let has_code = |code: &str| {
        errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == code)
    };

    if has_code(REQUIRED) {
        REQUIRED_FIELDS_MESSAGE
    } else if has_code("must_match") {
        PASSWORD_MISMATCH_MESSAGE
    } else {
        PASSWORD_LENGTH_MESSAGE
    }
}

/// Code entered on the verification step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationData {
    pub token: String,
}

impl VerificationData {
    /// Store keyboard input, keeping digits only.
    pub fn set_code(&mut self, input: &str) {
        self.token = sanitize_code(input);
    }

    pub fn check(&self) -> Result<(), AppError> {
        if self.token.len() != CODE_LEN {
            return Err(AppError::bad_request(INVALID_CODE_MESSAGE));
        }
        Ok(())
    }
}

/// Digits only, at most six of them.
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CODE_LEN)
        .collect()
}
