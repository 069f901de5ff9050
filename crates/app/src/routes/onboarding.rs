use std::collections::HashMap;

use crate::auth::use_auth;
use crate::routes::{use_signed_in_redirect, Route};
use client::{ApiClient, OnboardingWizard};
use dioxus::prelude::*;
use shared_types::{AppError, OnboardingStep, Portal, CODE_LEN};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, Input,
    StepIndicator, ToastOptions, Toasts,
};

/// Toast the outcome of a wizard action and keep per-field messages for
/// the form that produced it.
fn report(
    toast: Toasts,
    mut field_errors: Signal<HashMap<String, String>>,
    result: Result<&'static str, AppError>,
) -> bool {
    match result {
        Ok(notice) => {
            field_errors.set(HashMap::new());
            toast.success(notice.to_string(), ToastOptions::new());
            true
        }
        Err(e) => {
            field_errors.set(e.field_errors.clone());
            toast.error(e.message, ToastOptions::new());
            false
        }
    }
}

/// Hospital registration: details, admin account, email code, welcome.
#[component]
pub fn Onboarding() -> Element {
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let toast = use_toast();
    use_signed_in_redirect(Portal::Admin);

    let mut wizard = use_signal(OnboardingWizard::new);
    let field_errors = use_signal(HashMap::<String, String>::new);
    let mut busy = use_signal(|| false);

    let step = wizard.read().step;

    let submit_hospital = move |evt: FormEvent| {
        evt.prevent_default();
        let result = wizard.write().submit_hospital();
        report(toast, field_errors, result);
    };

    let api_for_admin = api.clone();
    let submit_admin = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api_for_admin.clone();
        async move {
            busy.set(true);
            let mut draft = wizard();
            let result = draft.submit_admin(&api).await;
            wizard.write().settle(&draft);
            busy.set(false);
            report(toast, field_errors, result);
        }
    };

    let api_for_code = api.clone();
    let submit_code = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api_for_code.clone();
        async move {
            busy.set(true);
            let tokens = auth.token_store();
            let mut draft = wizard();
            let result = draft.submit_code(&api, &tokens, &mut auth).await;
            wizard.write().settle(&draft);
            busy.set(false);
            report(toast, field_errors, result);
        }
    };

    let resend_code = move |_: MouseEvent| {
        let api = api.clone();
        async move {
            busy.set(true);
            let mut draft = wizard();
            let result = draft.resend_code(&api).await;
            wizard.write().settle(&draft);
            busy.set(false);
            report(toast, field_errors, result);
        }
    };

    let access_dashboard = move |_: MouseEvent| {
        let draft = wizard();
        if report(toast, field_errors, draft.access_dashboard(&mut auth)) {
            navigator().push(Route::AdminDashboard {});
        }
    };

    let go_back = move |_: MouseEvent| wizard.write().back();

    let field_error = move |name: &str| field_errors.read().get(name).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./onboarding.css") }

        div { class: "onboarding-page",
            div { class: "onboarding-brand",
                Link { to: Route::Landing {}, "HMS" }
            }

            StepIndicator { current: step }

            Card { class: "onboarding-card",
                CardHeader { title: step.title().to_string() }

                match step {
                    OnboardingStep::HospitalDetails => rsx! {
                        form { onsubmit: submit_hospital,
                            CardContent {
                                Input {
                                    label: "Hospital Name",
                                    required: true,
                                    placeholder: "General Hospital",
                                    value: wizard.read().hospital.name.clone(),
                                    on_input: move |e: FormEvent| wizard.write().hospital.name = e.value(),
                                    hint: field_error("name"),
                                }
                                Input {
                                    label: "Registration Number",
                                    required: true,
                                    value: wizard.read().hospital.registration_number.clone(),
                                    on_input: move |e: FormEvent| wizard.write().hospital.registration_number = e.value(),
                                    hint: field_error("registration_number"),
                                }
                                Input {
                                    label: "License Number",
                                    required: true,
                                    value: wizard.read().hospital.license_number.clone(),
                                    on_input: move |e: FormEvent| wizard.write().hospital.license_number = e.value(),
                                    hint: field_error("license_number"),
                                }
                                Input {
                                    label: "Hospital Number",
                                    required: true,
                                    value: wizard.read().hospital.hospital_number.clone(),
                                    on_input: move |e: FormEvent| wizard.write().hospital.hospital_number = e.value(),
                                    hint: field_error("hospital_number"),
                                }
                                Input {
                                    label: "Hospital Email",
                                    input_type: "email",
                                    required: true,
                                    placeholder: "info@hospital.com",
                                    value: wizard.read().hospital.email.clone(),
                                    on_input: move |e: FormEvent| wizard.write().hospital.email = e.value(),
                                    hint: field_error("email"),
                                }
                            }
                            CardFooter {
                                Button { button_type: "submit", "Continue" }
                            }
                        }
                    },
                    OnboardingStep::AdminAccount => rsx! {
                        form { onsubmit: submit_admin,
                            CardContent {
                                Input {
                                    label: "Full Name",
                                    required: true,
                                    value: wizard.read().admin.full_name.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().admin.full_name = e.value(),
                                    hint: field_error("full_name"),
                                }
                                Input {
                                    label: "Job Title",
                                    required: true,
                                    placeholder: "Hospital Administrator",
                                    value: wizard.read().admin.job_title.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().admin.job_title = e.value(),
                                    hint: field_error("job_title"),
                                }
                                Input {
                                    label: "Email Address",
                                    input_type: "email",
                                    required: true,
                                    value: wizard.read().admin.email.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().admin.email = e.value(),
                                    hint: field_error("email"),
                                }
                                Input {
                                    label: "Password",
                                    input_type: "password",
                                    required: true,
                                    value: wizard.read().admin.password.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().admin.password = e.value(),
                                    hint: field_error("password").or_else(|| Some("At least 6 characters".to_string())),
                                }
                                Input {
                                    label: "Confirm Password",
                                    input_type: "password",
                                    required: true,
                                    value: wizard.read().admin.confirm_password.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().admin.confirm_password = e.value(),
                                    hint: field_error("confirm_password"),
                                }
                            }
                            CardFooter {
                                Button { variant: ButtonVariant::Outline, disabled: busy(), onclick: go_back, "Back" }
                                Button {
                                    button_type: "submit",
                                    loading: busy(),
                                    loading_text: "Creating account...",
                                    "Create Account"
                                }
                            }
                        }
                    },
                    OnboardingStep::EmailVerification => rsx! {
                        form { onsubmit: submit_code,
                            CardContent {
                                p { class: "onboarding-note",
                                    "We sent a {CODE_LEN}-digit code to "
                                    strong { {wizard.read().admin.email.clone()} }
                                }
                                Input {
                                    label: "Verification Code",
                                    class: "onboarding-code",
                                    placeholder: "000000",
                                    value: wizard.read().verification.token.clone(),
                                    disabled: busy(),
                                    on_input: move |e: FormEvent| wizard.write().verification.set_code(&e.value()),
                                }
                                p { class: "onboarding-resend",
                                    "Didn't receive the code? "
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        disabled: busy(),
                                        onclick: resend_code,
                                        "Resend code"
                                    }
                                }
                            }
                            CardFooter {
                                Button { variant: ButtonVariant::Outline, disabled: busy(), onclick: go_back, "Back" }
                                Button {
                                    button_type: "submit",
                                    loading: busy(),
                                    loading_text: "Verifying...",
                                    "Verify Email"
                                }
                            }
                        }
                    },
                    OnboardingStep::Welcome => rsx! {
                        CardContent {
                            div { class: "onboarding-welcome",
                                h2 { "Welcome to HMS!" }
                                p {
                                    "Your hospital "
                                    strong { {wizard.read().hospital.name.clone()} }
                                    " has been registered and your email is verified."
                                }
                            }
                        }
                        CardFooter {
                            Button { onclick: access_dashboard, "Access Dashboard" }
                        }
                    },
                }
            }

            p { class: "onboarding-login",
                "Already registered? "
                Link { to: Route::AdminLogin {}, "Sign in" }
            }
        }
    }
}
