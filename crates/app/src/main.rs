use client::{development_session, ApiClient, ClientConfig};
use dioxus::prelude::*;
use shared_types::Session;

mod auth;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let config = client::load_config();
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("failed to initialize logger: {e}");
    }
    tracing::info!(
        api_url = %config.api_url,
        environment = ?config.environment,
        bypass_auth = config.flags.bypass_auth,
        mock_login = config.uses_mock_login(),
        "starting hospital console"
    );

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| client::load_config().clone());
    use_context_provider(|| ApiClient::from_config(&config));

    let bypass = config.bypasses_auth();
    use_context_provider(move || {
        let initial = if bypass {
            development_session()
        } else {
            Session::anonymous()
        };
        AuthState::new(initial)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        if bypass {
            DevModeBanner { config: config.clone() }
        }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn DevModeBanner(config: ClientConfig) -> Element {
    rsx! {
        div { class: "dev-banner", role: "status",
            "Development mode: authentication bypassed ({config.api_url})"
        }
    }
}
