use crate::auth::{use_auth, AuthState};
use crate::routes::login::report_failure;
use dioxus::prelude::*;
use shared_types::{AppError, SignUpRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Form, Input, Label,
};
use std::collections::HashMap;
use validator::Validate;

fn submit_sign_up(auth: &AuthState, request: &SignUpRequest) -> Result<(), AppError> {
    request.validate().map_err(AppError::from)?;
    auth.sign_up(request)
}

/// Account creation form. New accounts start without roles.
#[component]
pub fn SignUpForm(on_toggle_mode: EventHandler<()>) -> Element {
    let auth = use_auth();
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_sign_up = move |_: FormEvent| {
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = SignUpRequest {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            password: password(),
        };
        if let Err(e) = submit_sign_up(&auth, &request) {
            report_failure(e, password, error_msg, field_errors);
        }
    };

    rsx! {
        Card {
            class: "auth-card",

            CardHeader {
                CardTitle { "Create Account" }
                CardDescription { "Create an account to get started" }
            }

            CardContent {
                Form { onsubmit: handle_sign_up, error: error_msg(),
                    div { class: "auth-field-row",
                        div { class: "auth-field",
                            Label { html_for: "first_name", required: true, "First name" }
                            Input {
                                id: "first_name",
                                placeholder: "Ada",
                                value: first_name(),
                                on_input: move |e: FormEvent| first_name.set(e.value()),
                                error: field_errors().get("first_name").cloned(),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "last_name", required: true, "Last name" }
                            Input {
                                id: "last_name",
                                placeholder: "Lovelace",
                                value: last_name(),
                                on_input: move |e: FormEvent| last_name.set(e.value()),
                                error: field_errors().get("last_name").cloned(),
                            }
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "signup_email", required: true, "Email" }
                        Input {
                            input_type: "email",
                            id: "signup_email",
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors().get("email").cloned(),
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "signup_password", required: true, "Password" }
                        Input {
                            input_type: "password",
                            id: "signup_password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors().get("password").cloned(),
                        }
                    }
                    Button { button_type: "submit", full_width: true, "Create Account" }
                }
            }

            CardFooter {
                p { class: "auth-link",
                    "Already have an account? "
                    Button {
                        variant: ButtonVariant::Link,
                        onclick: move |_| on_toggle_mode.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
