//! Sidebar menus keyed by role.

use crate::models::{Portal, Role, User};

/// Which sidebar menu a session gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRole {
    /// Role id 0.
    Admin,
    /// Role id 1.
    Doctor,
    /// Any other staff role: only the logout entry.
    Staff,
}

impl MenuRole {
    pub fn from_role_id(id: u8) -> Self {
        match id {
            0 => MenuRole::Admin,
            1 => MenuRole::Doctor,
            _ => MenuRole::Staff,
        }
    }

    /// Admin portal sessions always get the admin menu; staff sessions are
    /// keyed by the user's role.
    pub fn for_session(portal: Portal, user: &User) -> Self {
        match (portal, user.role) {
            (Portal::Admin, _) => MenuRole::Admin,
            (Portal::User, Role::Admin) => MenuRole::Admin,
            (Portal::User, Role::Doctor) => MenuRole::Doctor,
            (Portal::User, _) => MenuRole::Staff,
        }
    }

    /// Portal whose token and login path logout should use.
    pub fn portal(&self) -> Portal {
        match self {
            MenuRole::Admin => Portal::Admin,
            MenuRole::Doctor | MenuRole::Staff => Portal::User,
        }
    }
}

/// What clicking a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(&'static str),
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

impl MenuItem {
    const fn link(id: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label,
            action: MenuAction::Navigate(path),
        }
    }

    pub fn path(&self) -> Option<&'static str> {
        match self.action {
            MenuAction::Navigate(path) => Some(path),
            MenuAction::Logout => None,
        }
    }

    pub fn is_logout(&self) -> bool {
        matches!(self.action, MenuAction::Logout)
    }

    /// Exact path match, as the sidebar highlights only the current page.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path().is_some_and(|p| p == current_path)
    }
}

const LOGOUT: MenuItem = MenuItem {
    id: "logout",
    label: "Logout",
    action: MenuAction::Logout,
};

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem::link("dashboard", "Dashboard", "/admin/dashboard"),
    MenuItem::link("user", "User", "/admin/users"),
    MenuItem::link("patients", "Patients", "/admin/patients"),
    MenuItem::link("laboratory", "Laboratory", "/admin/laboratory"),
    MenuItem::link("reception", "Reception", "/admin/reception"),
    MenuItem::link("pharmacy", "Pharmacy", "/admin/pharmacy"),
    MenuItem::link("audit", "Audit Logs", "/admin/audit"),
    MenuItem::link("billing", "Billing", "/admin/billing"),
    MenuItem::link("providers", "Providers", "/admin/providers"),
    MenuItem::link("access", "Access Control", "/admin/access"),
    MenuItem::link("settings", "System Settings", "/admin/settings"),
    LOGOUT,
];

const DOCTOR_MENU: &[MenuItem] = &[
    MenuItem::link("dashboard", "Dashboard", "/user/dashboard"),
    MenuItem::link("patients", "Patients", "/user/patients"),
    MenuItem::link("lab-request", "Lab Request", "/user/lab-request"),
    MenuItem::link("prescription", "Prescription", "/user/prescription"),
    LOGOUT,
];

const STAFF_MENU: &[MenuItem] = &[LOGOUT];

pub fn menu_for(role: MenuRole) -> &'static [MenuItem] {
    match role {
        MenuRole::Admin => ADMIN_MENU,
        MenuRole::Doctor => DOCTOR_MENU,
        MenuRole::Staff => STAFF_MENU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(role: Role) -> User {
        User {
            role,
            ..User::development()
        }
    }

    #[test]
    fn admin_menu_has_eleven_links_then_logout() {
        let menu = menu_for(MenuRole::Admin);
        assert_eq!(menu.len(), 12);
        assert_eq!(menu.iter().filter(|i| !i.is_logout()).count(), 11);
        assert!(menu.last().unwrap().is_logout());
        assert_eq!(menu[1].path(), Some("/admin/users"));
    }

    #[test]
    fn doctor_menu_has_four_links_then_logout() {
        let menu = menu_for(MenuRole::Doctor);
        assert_eq!(menu.len(), 5);
        assert!(menu[..4].iter().all(|i| i.path().unwrap().starts_with("/user/")));
        assert!(menu[4].is_logout());
    }

    #[test]
    fn other_roles_only_log_out() {
        assert_eq!(menu_for(MenuRole::from_role_id(4)), &[LOGOUT]);
        assert_eq!(
            MenuRole::for_session(Portal::User, &user_with(Role::Pharmacist)),
            MenuRole::Staff
        );
    }

    #[test]
    fn session_role_selection() {
        assert_eq!(
            MenuRole::for_session(Portal::Admin, &user_with(Role::Doctor)),
            MenuRole::Admin
        );
        assert_eq!(
            MenuRole::for_session(Portal::User, &user_with(Role::Doctor)),
            MenuRole::Doctor
        );
        assert_eq!(MenuRole::from_role_id(0), MenuRole::Admin);
        assert_eq!(MenuRole::from_role_id(1), MenuRole::Doctor);
    }

    #[test]
    fn logout_portal_follows_role() {
        assert_eq!(MenuRole::Admin.portal(), Portal::Admin);
        assert_eq!(MenuRole::Doctor.portal(), Portal::User);
        assert_eq!(MenuRole::Staff.portal(), Portal::User);
    }

    #[test]
    fn active_item_matches_exact_path() {
        let users = menu_for(MenuRole::Admin)[1];
        assert!(users.is_active("/admin/users"));
        assert!(!users.is_active("/admin/users/new"));
        assert!(!LOGOUT.is_active("/admin/users"));
    }
}
