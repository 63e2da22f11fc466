use crate::auth::use_auth;
use crate::routes::login::LoginForm;
use crate::routes::sign_up::SignUpForm;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{AuthMode, AuthView, FeatureFlags};
use shared_ui::Spinner;

/// Auth gate page: spinner while the session resolves, redirect home once
/// signed in, otherwise the login or sign-up form.
#[component]
pub fn AuthPage() -> Element {
    rsx! { AuthScreen { initial_mode: AuthMode::default() } }
}

/// Stateful body of [`AuthPage`]; owns the login/sign-up toggle.
#[component]
pub fn AuthScreen(initial_mode: AuthMode) -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut mode = use_signal(|| initial_mode);

    let effective_mode = if flags.signup { mode() } else { AuthMode::Login };
    let view = AuthView::resolve(&auth.snapshot.read().session, effective_mode);

    if let AuthView::Redirect(_) = view {
        navigator().replace(Route::Dashboard {});
    }

    rsx! {
        AuthGate {
            view,
            on_toggle_mode: move |_| mode.set(mode().toggled()),
        }
    }
}

/// Renders exactly one of the three gate states for a resolved view.
#[component]
pub fn AuthGate(view: AuthView, on_toggle_mode: EventHandler<()>) -> Element {
    match view {
        AuthView::Loading => rsx! { Spinner {} },
        AuthView::Redirect(_) => rsx! {},
        AuthView::Form(mode) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./login.css") }
            div { class: "auth-page",
                div { class: "auth-container",
                    match mode {
                        AuthMode::Login => rsx! { LoginForm { on_toggle_mode } },
                        AuthMode::SignUp => rsx! { SignUpForm { on_toggle_mode } },
                    }
                }
            }
        },
    }
}
