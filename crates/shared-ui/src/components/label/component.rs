use dioxus::prelude::*;

/// Form field label. `required` appends a marker hidden from screen readers;
/// the input itself carries the requirement.
#[component]
pub fn Label(
    html_for: String,
    #[props(default)] required: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: "{html_for}",
            ..merged,
            {children}
            if required {
                span { class: "label-required", aria_hidden: "true", " *" }
            }
        }
    }
}
