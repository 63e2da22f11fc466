use dioxus::prelude::*;

/// Page header container: title block on the left, actions on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            {children}
        }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Muted line under the page title.
#[component]
pub fn PageSubtitle(children: Element) -> Element {
    rsx! {
        p { class: "page-subtitle", {children} }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_title_subtitle_and_actions() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                PageHeader {
                    div {
                        PageTitle { "Welcome to CostIntel" }
                        PageSubtitle { "Your comprehensive cost intelligence platform" }
                    }
                    PageActions { button { "Sign Out" } }
                }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        let title = html.find("page-title").unwrap();
        let subtitle = html.find("page-subtitle").unwrap();
        let actions = html.find("page-actions").unwrap();
        assert!(title < subtitle && subtitle < actions, "{html}");
        assert!(html.contains("<h1"), "{html}");
    }
}
