use serde::{Deserialize, Serialize};

/// Staff role within a hospital.
///
/// The backend speaks in codes (`lab_technician`), the console shows
/// labels ("Lab Staff"). Both directions go through this enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Doctor,
    Nurse,
    Receptionist,
    Pharmacist,
    LabTechnician,
    Accountant,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::Doctor,
        Role::Nurse,
        Role::Receptionist,
        Role::Pharmacist,
        Role::LabTechnician,
        Role::Accountant,
    ];

    /// Backend code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Nurse => "nurse",
            Role::Receptionist => "receptionist",
            Role::Pharmacist => "pharmacist",
            Role::LabTechnician => "lab_technician",
            Role::Accountant => "accountant",
        }
    }

    /// Label shown in tables, filters and forms.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Doctor => "Doctor",
            Role::Nurse => "Nurse",
            Role::Receptionist => "Receptionist",
            Role::Pharmacist => "Pharmacist",
            Role::LabTechnician => "Lab Staff",
            Role::Accountant => "Billing Staff",
        }
    }

    /// Parse a backend code (case-insensitive).
    pub fn from_code(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Role::ALL.into_iter().find(|r| r.as_str() == s)
    }

    /// Parse a UI label.
    pub fn from_label(s: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|r| r.label() == s.trim())
    }
}

/// Account status as shown in the user table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn from_active(is_active: bool) -> Self {
        if is_active {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, UserStatus::Active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Active" => Some(UserStatus::Active),
            "Inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }
}

/// Hospital summary attached to a logged-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalSummary {
    #[serde(default, deserialize_with = "crate::requests::de_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_status: Option<String>,
}

/// The signed-in person as the console knows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub initials: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital: Option<HospitalSummary>,
}

impl User {
    /// Identity used when route protection is bypassed for development.
    pub fn development() -> Self {
        Self {
            id: "1".to_string(),
            name: "Development User".to_string(),
            email: "dev@dovacare.com".to_string(),
            initials: "DU".to_string(),
            role: Role::Admin,
            job_title: None,
            employee_id: None,
            hospital: None,
        }
    }
}

/// Upper-cased first letter of every whitespace-separated name token.
pub fn initials_from_name(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Which of the three session phases the console is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    /// A token is persisted but nobody is signed in.
    Tokened,
    Authenticated,
}

/// In-memory record of whether someone is signed in and who they are.
///
/// Fields are private: an authenticated session always carries a user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    authenticated: bool,
    user: Option<User>,
    /// Portal whose token key holds this session's bearer token.
    portal: Option<Portal>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            portal: None,
        }
    }

    /// A verified user who has not entered the dashboard yet.
    pub fn pending(user: User) -> Self {
        Self {
            authenticated: false,
            user: Some(user),
            portal: None,
        }
    }

    /// Record the portal the session was signed in through.
    pub fn with_portal(mut self, portal: Portal) -> Self {
        self.portal = Some(portal);
        self
    }

    pub fn portal(&self) -> Option<Portal> {
        self.portal
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated && self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Promote a pending session. Returns `false` when there is no user.
    pub fn authenticate(&mut self) -> bool {
        self.authenticated = self.user.is_some();
        self.authenticated
    }

    pub fn phase(&self, has_token: bool) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else if has_token {
            SessionPhase::Tokened
        } else {
            SessionPhase::Anonymous
        }
    }
}

/// Login surface: hospital administrators or clinical staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Portal {
    Admin,
    User,
}

impl Portal {
    /// Browser storage key holding this portal's bearer token.
    pub fn token_key(&self) -> &'static str {
        match self {
            Portal::Admin => "adminToken",
            Portal::User => "userToken",
        }
    }

    pub fn login_path(&self) -> &'static str {
        match self {
            Portal::Admin => "/admin/login",
            Portal::User => "/user/login",
        }
    }

    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Portal::Admin => "/admin/dashboard",
            Portal::User => "/user/dashboard",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Portal::Admin => "Admin Login",
            Portal::User => "Staff Login",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "42".to_string(),
            name: "Jane Q Doe".to_string(),
            email: "jane@example.org".to_string(),
            initials: "JQD".to_string(),
            role: Role::Admin,
            job_title: Some("Director".to_string()),
            employee_id: None,
            hospital: None,
        }
    }

    #[test]
    fn role_codes_and_labels_are_bijective() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.as_str()), Some(role));
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
        assert_eq!(Role::from_label("Lab Staff"), Some(Role::LabTechnician));
        assert_eq!(Role::from_label("Billing Staff"), Some(Role::Accountant));
        assert_eq!(Role::from_code("LAB_TECHNICIAN"), Some(Role::LabTechnician));
        assert_eq!(Role::from_code("janitor"), None);
    }

    #[test]
    fn role_serde_uses_backend_codes() {
        let json = serde_json::to_string(&Role::LabTechnician).unwrap();
        assert_eq!(json, r#""lab_technician""#);
    }

    #[test]
    fn initials_from_each_token() {
        assert_eq!(initials_from_name("Jane Q Doe"), "JQD");
        assert_eq!(initials_from_name("shade badmus"), "SB");
        assert_eq!(initials_from_name("  Ada   Lovelace "), "AL");
        assert_eq!(initials_from_name(""), "");
    }

    #[test]
    fn status_labels() {
        assert_eq!(UserStatus::from_active(true).label(), "Active");
        assert_eq!(UserStatus::from_active(false).label(), "Inactive");
        assert_eq!(UserStatus::from_label("Inactive"), Some(UserStatus::Inactive));
        assert_eq!(UserStatus::from_label("Suspended"), None);
    }

    #[test]
    fn anonymous_session_has_no_user() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert_eq!(session.phase(false), SessionPhase::Anonymous);
        assert_eq!(session.phase(true), SessionPhase::Tokened);
    }

    #[test]
    fn pending_session_needs_explicit_authenticate() {
        let mut session = Session::pending(sample_user());
        assert!(!session.is_authenticated());
        assert!(session.authenticate());
        assert!(session.is_authenticated());
        assert_eq!(session.phase(true), SessionPhase::Authenticated);
    }

    #[test]
    fn authenticate_without_user_is_refused() {
        let mut session = Session::anonymous();
        assert!(!session.authenticate());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn portal_survives_authenticate() {
        let mut session = Session::pending(sample_user()).with_portal(Portal::User);
        assert!(session.authenticate());
        assert_eq!(session.portal(), Some(Portal::User));
        assert_eq!(Session::anonymous().portal(), None);
    }

    #[test]
    fn portal_keys_and_paths() {
        assert_eq!(Portal::Admin.token_key(), "adminToken");
        assert_eq!(Portal::User.token_key(), "userToken");
        assert_eq!(Portal::Admin.login_path(), "/admin/login");
        assert_eq!(Portal::User.login_path(), "/user/login");
        assert_eq!(Portal::User.dashboard_path(), "/user/dashboard");
    }
}
