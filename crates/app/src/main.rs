use dioxus::prelude::*;
use shared_types::SessionStore;
use std::rc::Rc;

mod auth;
mod config;
mod provider;
mod routes;

use auth::AuthState;
use provider::DemoProvider;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Composition root: owns the session store and the identity provider and
/// hands both to the routes through context.
#[component]
fn App() -> Element {
    let config = config::app_config();

    use_context_provider(|| config.features.clone());

    let auth = use_context_provider(|| {
        tracing::info!(platform = client_platform(), "Starting {}", config.app.name);
        let store = SessionStore::default();
        let provider = Rc::new(DemoProvider::new(store.clone(), config));
        AuthState::connect(store, provider)
    });

    // The store starts resolving; the provider settles it once.
    use_effect(move || auth.restore());

    rsx! {
        document::Title { "{config.app.name}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
