pub mod auth_page;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod sign_up;

use crate::auth::use_auth;
use dioxus::prelude::*;
use shared_ui::Spinner;

use auth_page::AuthPage;
use dashboard::Dashboard;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/auth")]
    AuthPage {},
    #[layout(AuthGuard)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout: spinner while the session resolves, `/auth` when
/// signed out, otherwise the guarded route.
///
/// Nothing below this layout renders until the session holds a user, so
/// role-gated views never see a loading or anonymous session.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let session = auth.snapshot.read().session.clone();

    if session.loading {
        return rsx! { Spinner { label: "Checking session" } };
    }

    if session.user.is_none() {
        navigator().replace(Route::AuthPage {});
        return rsx! { Spinner { label: "Redirecting to sign in" } };
    }

    rsx! { Outlet::<Route> {} }
}
