use crate::auth::{use_auth, AuthState};
use dioxus::prelude::*;
use shared_types::{AppError, FeatureFlags, LoginRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, Input, Label,
};
use std::collections::HashMap;
use validator::Validate;

/// Validate the credentials, then hand them to the session provider.
fn submit_login(auth: &AuthState, request: &LoginRequest) -> Result<(), AppError> {
    request.validate().map_err(AppError::from)?;
    auth.sign_in(request)
}

/// Clear the typed password, then route the error to the banner or to
/// per-field messages.
pub(crate) fn report_failure(
    err: AppError,
    mut password: Signal<String>,
    mut banner: Signal<Option<String>>,
    mut fields: Signal<HashMap<String, String>>,
) {
    password.set(String::new());
    if err.field_errors.is_empty() {
        banner.set(Some(err.friendly_message()));
    } else {
        fields.set(err.field_errors);
    }
}

/// Email/password sign-in form.
///
/// On success the provider publishes the new session and the auth page
/// redirects; this form only reports failures.
#[component]
pub fn LoginForm(on_toggle_mode: EventHandler<()>) -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_login = move |_: FormEvent| {
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        if let Err(e) = submit_login(&auth, &request) {
            report_failure(e, password, error_msg, field_errors);
        }
    };

    rsx! {
        Card {
            class: "auth-card",

            CardHeader {
                CardTitle { "Sign In" }
                CardDescription { "Enter your credentials to access your account" }
            }

            CardContent {
                Form { onsubmit: handle_login, error: error_msg(),
                    div { class: "auth-field",
                        Label { html_for: "email", "Email" }
                        Input {
                            input_type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors().get("email").cloned(),
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "password", "Password" }
                        Input {
                            input_type: "password",
                            id: "password",
                            placeholder: "Enter your password",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors().get("password").cloned(),
                        }
                    }
                    Button { button_type: "submit", full_width: true, "Sign In" }
                }
            }

            if flags.signup {
                CardFooter {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Button {
                            variant: ButtonVariant::Link,
                            onclick: move |_| on_toggle_mode.call(()),
                            "Sign up"
                        }
                    }
                }
            }
        }
    }
}
