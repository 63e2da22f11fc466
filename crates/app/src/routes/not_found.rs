use crate::routes::Route;
use dioxus::prelude::*;

/// Catch-all for unknown paths. Signed-out visitors following the link home
/// are sent on to `/auth` by the guard.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        NotFoundView { path,
            Link { to: Route::Dashboard {}, class: "not-found-link", "Back to Dashboard" }
        }
    }
}

/// 404 card. `children` is the way back, usually a router link.
#[component]
pub fn NotFoundView(path: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Page Not Found" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    "."
                }
                {children}
            }
        }
    }
}
