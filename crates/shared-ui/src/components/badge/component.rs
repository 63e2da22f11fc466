use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// A badge for inline labels such as role chips.
///
/// `color` overrides the variant palette with one of the stylesheet's
/// named colors (`red`, `green`, `blue`, `gray`).
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] color: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    if let Some(color) = color {
        base.push(Attribute::new("data-color", color, None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
