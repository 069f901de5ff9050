//! Wire shapes for the hospital backend. Field names follow its camelCase JSON.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::HospitalSummary;
use crate::onboarding::{AdminData, HospitalData};

/// Accept ids sent either as strings (`"65f1…"`) or numbers (`1`).
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<IdRepr>::deserialize(deserializer)? {
        Some(IdRepr::Text(s)) => s,
        Some(IdRepr::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

/// Body of `POST /api/hospital/register-with-verification`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub hospital_data: HospitalData,
    pub admin_data: AdminData,
}

/// Body of `POST /api/hospital/verify-email`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub token: String,
}

/// Body of `POST /api/hospital/resend-verification`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResendVerificationRequest {
    pub email: String,
}

/// Administrator record returned after a successful verification.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedAdmin {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub job_title: Option<String>,
}

/// Response of `POST /api/hospital/verify-email`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VerifyEmailResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub admin: Option<VerifiedAdmin>,
    #[serde(default)]
    pub hospital: Option<HospitalSummary>,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Credentials posted to either login endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin user as returned by `POST /api/admin/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserPayload {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub initials: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub hospital: Option<HospitalSummary>,
}

/// Envelope of `POST /api/admin/login`: `{token, user}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminLoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AdminUserPayload>,
}

/// Staff user as returned by `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaffUserPayload {
    #[serde(default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub role_id: Option<u8>,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Inner `data` object of the staff login envelope.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaffLoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<StaffUserPayload>,
    #[serde(default)]
    pub hospital: Option<HospitalSummary>,
}

/// Envelope of `POST /api/auth/login`: `{data: {token, user, hospital}}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StaffLoginResponse {
    #[serde(default)]
    pub data: Option<StaffLoginData>,
}

// ---------------------------------------------------------------------------
// User management
// ---------------------------------------------------------------------------

/// A staff account as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(rename = "_id", default, deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Pagination block of the user list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PaginationInfo {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub pages: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserListData {
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub pagination: Option<PaginationInfo>,
}

/// Response of `GET /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<UserListData>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

/// Body of `PUT /api/users/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_accept_numbers_and_strings() {
        let numeric: VerifiedAdmin = serde_json::from_str(r#"{"id":7,"name":"A"}"#).unwrap();
        assert_eq!(numeric.id, "7");
        let text: VerifiedAdmin =
            serde_json::from_str(r#"{"id":"65f1c0ffee","name":"A"}"#).unwrap();
        assert_eq!(text.id, "65f1c0ffee");
        let missing: VerifiedAdmin = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(missing.id, "");
    }

    #[test]
    fn user_record_reads_mongo_id() {
        let record: UserRecord = serde_json::from_str(
            r#"{"_id":"abc123","employeeId":"DR0001","firstName":"James","lastName":"Okafor",
                "email":"j@example.org","role":"doctor","isActive":true}"#,
        )
        .unwrap();
        assert_eq!(record.id, "abc123");
        assert_eq!(record.employee_id.as_deref(), Some("DR0001"));
        assert!(record.is_active);
    }

    #[test]
    fn staff_login_envelope_nests_under_data() {
        let resp: StaffLoginResponse = serde_json::from_str(
            r#"{"data":{"token":"t","user":{"id":3,"firstName":"Ada","lastName":"Obi","email":"a@b.c","role":"nurse","roleId":2},"hospital":{"id":1,"name":"Kingscare"}}}"#,
        )
        .unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.token.as_deref(), Some("t"));
        let user = data.user.unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.role_id, Some(2));
        assert_eq!(data.hospital.unwrap().name, "Kingscare");
    }

    #[test]
    fn update_request_serializes_camel_case() {
        let body = UpdateUserRequest {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "a@b.c".to_string(),
            role: "nurse".to_string(),
            is_active: false,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "Obi",
                "email": "a@b.c",
                "role": "nurse",
                "isActive": false
            })
        );
    }
}
