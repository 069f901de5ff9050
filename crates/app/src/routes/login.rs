use crate::auth::use_auth;
use crate::routes::{use_signed_in_redirect, Route};
use client::{ApiClient, ClientConfig, LoginMode};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;
use shared_types::{LoginRequest, Portal};
use shared_ui::{use_toast, Button, Card, CardContent, CardFooter, CardHeader, Input, ToastOptions};

#[component]
pub fn AdminLogin() -> Element {
    rsx! { LoginScreen { portal: Portal::Admin } }
}

#[component]
pub fn UserLogin() -> Element {
    rsx! { LoginScreen { portal: Portal::User } }
}

/// Email and password sign-in for one portal.
///
/// On success the portal's token is stored, the session is populated and
/// the browser moves to the portal's dashboard.
#[component]
pub fn LoginScreen(portal: Portal) -> Element {
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let config = use_context::<ClientConfig>();
    let toast = use_toast();
    use_signed_in_redirect(portal);

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let mode = LoginMode::for_config(&config);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            loading.set(true);
            error_msg.set(None);

            let tokens = auth.token_store();
            let credentials = LoginRequest {
                email: email(),
                password: password(),
            };
            match client::login(&api, mode, &tokens, &mut auth, portal, &credentials).await {
                Ok(success) => {
                    toast.success(success.notice, ToastOptions::new());
                    navigator().push(Route::dashboard_for(portal));
                }
                Err(e) => {
                    toast.error(e.message.clone(), ToastOptions::new());
                    error_msg.set(Some(e.message));
                }
            }
            loading.set(false);
        }
    };

    let subtitle = match portal {
        Portal::Admin => "Sign in to manage your hospital",
        Portal::User => "Sign in to your staff account",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            if mode.is_mock() {
                div { class: "auth-mode-badge", "Mock Login Mode" }
            }

            Card { class: "auth-card",
                CardHeader { title: portal.title().to_string(), subtitle: subtitle.to_string() }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", role: "alert", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        Input {
                            label: "Email Address",
                            input_type: "email",
                            id: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        div { class: "auth-password",
                            Input {
                                label: "Password",
                                input_type: if show_password() { "text".to_string() } else { "password".to_string() },
                                id: "password",
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            button {
                                r#type: "button",
                                class: "auth-password-toggle",
                                "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 18, height: 18 }
                                } else {
                                    Icon::<LdEye> { icon: LdEye, width: 18, height: 18 }
                                }
                            }
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            loading_text: "Signing in...",
                            "Sign In"
                        }
                    }
                }

                CardFooter {
                    match portal {
                        Portal::Admin => rsx! {
                            p { class: "auth-link",
                                "New hospital? "
                                Link { to: Route::Onboarding {}, "Register your hospital" }
                            }
                        },
                        Portal::User => rsx! {
                            p { class: "auth-link",
                                "Hospital administrator? "
                                Link { to: Route::AdminLogin {}, "Admin login" }
                            }
                        },
                    }
                    p { class: "auth-link",
                        Link { to: Route::Landing {}, "Back to home" }
                    }
                }
            }
        }
    }
}
