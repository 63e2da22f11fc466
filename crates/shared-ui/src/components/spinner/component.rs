use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use dioxus_free_icons::Icon;

/// Full-height centered loading indicator with an animated icon.
#[component]
pub fn Spinner(
    #[props(default = 32)] size: u32,
    #[props(default = "Loading".to_string())] label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "spinner", None, false),
        Attribute::new("role", "status", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "spinner-icon",
                Icon::<LdLoader> { icon: LdLoader, width: size, height: size }
            }
            span { class: "spinner-label", "{label}" }
        }
    }
}
