pub mod dashboard;
pub mod landing;
pub mod login;
pub mod onboarding;
pub mod users;

use crate::auth::use_auth;
use client::{guard, rehydrate, ApiClient, ClientConfig, GuardDecision};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding2, LdClipboardList, LdCreditCard, LdFileText, LdFlaskConical, LdHeartPulse,
    LdLayoutDashboard, LdLogOut, LdPill, LdSettings, LdShieldCheck, LdStethoscope, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{menu_for, MenuAction, MenuItem, MenuRole, Portal, User};
use shared_ui::{
    toggle_sidebar, use_sidebar, use_toast, Sidebar, SidebarBrand, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarProvider, ToastOptions, TopNav,
};

use dashboard::{AdminDashboard, UserDashboard};
use landing::Landing;
use login::{AdminLogin, UserLogin};
use onboarding::Onboarding;
use users::AdminUsers;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/onboarding")]
    Onboarding {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/user/login")]
    UserLogin {},
    #[layout(AuthGuard)]
        #[layout(DashboardShell)]
            #[route("/admin/dashboard")]
            AdminDashboard {},
            #[route("/admin/users")]
            AdminUsers {},
            #[route("/user/dashboard")]
            UserDashboard {},
        #[end_layout]
    #[end_layout]
    #[redirect("/admin", || Route::AdminDashboard {})]
    #[redirect("/user", || Route::UserDashboard {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Portal owning a protected route.
    pub fn portal(&self) -> Option<Portal> {
        match self {
            Route::AdminDashboard {} | Route::AdminUsers {} => Some(Portal::Admin),
            Route::UserDashboard {} => Some(Portal::User),
            _ => None,
        }
    }

    pub fn login_for(portal: Portal) -> Self {
        match portal {
            Portal::Admin => Route::AdminLogin {},
            Portal::User => Route::UserLogin {},
        }
    }

    pub fn dashboard_for(portal: Portal) -> Self {
        match portal {
            Portal::Admin => Route::AdminDashboard {},
            Portal::User => Route::UserDashboard {},
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            Route::AdminDashboard {} => "Hello Admin",
            Route::AdminUsers {} => "User Management",
            Route::UserDashboard {} => "Doctor Dashboard",
            _ => "",
        }
    }
}

/// Unknown paths, and menu entries without a screen, land on the home page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unknown route, redirecting home");
    navigator().replace(Route::Landing {});
    rsx! {}
}

/// Send an already signed-in visitor of an entry screen to their dashboard.
pub(crate) fn use_signed_in_redirect(portal: Portal) {
    let auth = use_auth();
    use_effect(move || {
        if let Some(target) = client::signed_in_redirect(&auth, portal) {
            navigator().replace(Route::dashboard_for(target));
        }
    });
}

/// Renders protected routes only for a signed-in session.
///
/// A stored token alone is not enough: the backend cannot return the user
/// behind it, so a reload always goes back through the login screen.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let config = use_context::<ClientConfig>();
    let route: Route = use_route();
    let portal = route.portal().unwrap_or(Portal::Admin);

    let phase = rehydrate(&auth.token_store(), &auth, portal);
    match guard(config.bypasses_auth(), phase, portal) {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectToLogin(portal) => {
            navigator().replace(Route::login_for(portal));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

fn menu_icon(item: &MenuItem) -> Element {
    match item.id {
        "dashboard" => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        "user" => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        "patients" => rsx! { Icon::<LdHeartPulse> { icon: LdHeartPulse, width: 18, height: 18 } },
        "laboratory" | "lab-request" => rsx! { Icon::<LdFlaskConical> { icon: LdFlaskConical, width: 18, height: 18 } },
        "reception" => rsx! { Icon::<LdClipboardList> { icon: LdClipboardList, width: 18, height: 18 } },
        "pharmacy" | "prescription" => rsx! { Icon::<LdPill> { icon: LdPill, width: 18, height: 18 } },
        "audit" => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        "billing" => rsx! { Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 } },
        "providers" => rsx! { Icon::<LdBuilding2> { icon: LdBuilding2, width: 18, height: 18 } },
        "access" => rsx! { Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 18, height: 18 } },
        "settings" => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        "logout" => rsx! { Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 } },
        _ => rsx! { Icon::<LdStethoscope> { icon: LdStethoscope, width: 18, height: 18 } },
    }
}

/// Sidebar, top navigation and the routed dashboard body.
#[component]
fn DashboardShell() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let portal = route.portal().unwrap_or(Portal::Admin);
    // Only a bypassed console reaches here without a user.
    let user = auth.current_user().unwrap_or_else(User::development);
    let menu_role = MenuRole::for_session(portal, &user);
    let current_path = route.to_string();

    let on_select = use_callback(move |item: MenuItem| match item.action {
        MenuAction::Navigate(path) => {
            let target = path.parse::<Route>().unwrap_or(Route::Landing {});
            navigator().push(target);
        }
        MenuAction::Logout => {
            let api = api.clone();
            let portal = client::session_portal(&auth, menu_role.portal());
            spawn(async move {
                let tokens = auth.token_store();
                client::logout(&api, &tokens, &mut auth, portal).await;
                toast.success("Logged out successfully".to_string(), ToastOptions::new());
                navigator().push(Route::login_for(portal));
            });
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarBrand { title: "DovaCare", subtitle: "Hospital Management" }
                SidebarMenu {
                    for item in menu_for(menu_role).iter().copied() {
                        SidebarMenuButton {
                            key: "{item.id}",
                            active: item.is_active(&current_path),
                            danger: item.is_logout(),
                            onclick: move |_| on_select.call(item),
                            {menu_icon(&item)}
                            span { "{item.label}" }
                        }
                    }
                }
            }

            SidebarInset {
                ShellTopNav { title: route.heading().to_string(), user }
                main { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Top bar bound to the surrounding sidebar's drawer state.
#[component]
fn ShellTopNav(title: String, user: User) -> Element {
    let sidebar = use_sidebar();
    let today = chrono::Local::now().format("%B %-d, %Y").to_string();

    rsx! {
        TopNav {
            title,
            subtitle: format!("Today is {today}"),
            name: user.name.clone(),
            email: user.email.clone(),
            initials: user.initials.clone(),
            on_menu_toggle: move |_| toggle_sidebar(sidebar),
        }
    }
}
