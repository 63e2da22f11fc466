use dioxus::prelude::*;

/// A form wrapper that prevents default submission.
///
/// `error` renders as a banner above the fields, for failures that do not
/// belong to a single input.
#[component]
pub fn Form(
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default)] error: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt| {
                evt.prevent_default();
                onsubmit.call(evt);
            },
            ..merged,
            if let Some(err) = error {
                div { class: "form-error", role: "alert", "{err}" }
            }
            {children}
        }
    }
}
