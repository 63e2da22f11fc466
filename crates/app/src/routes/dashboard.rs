use crate::auth::{use_auth, use_role_flags};
use crate::config::app_config;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdDollarSign, LdLogOut, LdSettings, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    capability_cards, guide_entries, role_badge, AuthSnapshot, Panel, RoleBadge, RoleFlags,
};
use shared_ui::{
    Badge, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    PageActions, PageHeader, PageSubtitle, PageTitle,
};

/// Home dashboard. Only reachable through the auth guard.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let config = app_config();
    let snapshot = auth.snapshot.read().clone();
    let flags = use_role_flags();

    rsx! {
        DashboardView {
            snapshot,
            flags,
            app_name: config.app.name.clone(),
            tagline: config.app.tagline.clone(),
            on_sign_out: move |_| {
                tracing::info!("Signing out");
                auth.sign_out();
            },
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DashboardViewProps {
    pub snapshot: AuthSnapshot,
    pub flags: RoleFlags,
    pub app_name: String,
    pub tagline: String,
    #[props(default)]
    pub on_sign_out: Option<EventHandler<MouseEvent>>,
}

/// Profile summary, role-gated capability cards and the role guide.
#[component]
pub fn DashboardView(props: DashboardViewProps) -> Element {
    let snapshot = &props.snapshot;
    let cards = capability_cards(props.flags);
    let guide = guide_entries(props.flags);
    // Labels can repeat (`admin` and a raw `Admin` tag); tags cannot.
    let badges: Vec<(String, RoleBadge)> = snapshot
        .roles
        .iter()
        .map(|role| (role.as_tag().to_string(), role_badge(role)))
        .collect();

    let name = snapshot
        .profile
        .as_ref()
        .map(|p| p.display_name())
        .unwrap_or_default();
    let (email, user_id) = snapshot
        .session
        .user
        .as_ref()
        .map(|u| (u.email.clone(), u.id.to_string()))
        .unwrap_or_default();
    let on_sign_out = props.on_sign_out;
    let app_name = props.app_name.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                div {
                    PageTitle { "Welcome to {props.app_name}" }
                    PageSubtitle { "{props.tagline}" }
                }
                PageActions {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |e| {
                            if let Some(handler) = on_sign_out {
                                handler.call(e);
                            }
                        },
                        Icon { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            Card { class: "dashboard-profile",
                CardHeader {
                    CardTitle {
                        span { class: "dashboard-card-title",
                            Icon { icon: LdUser, width: 20, height: 20 }
                            "User Profile"
                        }
                    }
                    CardDescription { "Your account information and roles" }
                }
                CardContent {
                    div { class: "dashboard-profile-grid",
                        div {
                            h3 { class: "dashboard-section-title", "Personal Information" }
                            dl { class: "dashboard-facts",
                                dt { "Name:" }
                                dd { "{name}" }
                                dt { "Email:" }
                                dd { "{email}" }
                                dt { "User ID:" }
                                dd { "{user_id}" }
                            }
                        }
                        div {
                            h3 { class: "dashboard-section-title", "Roles & Permissions" }
                            div { class: "dashboard-roles",
                                for (tag, badge) in badges {
                                    Badge {
                                        key: "{tag}",
                                        color: badge.color.as_str().to_string(),
                                        "{badge.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if !cards.is_empty() {
                div { class: "dashboard-cards",
                    for card in cards {
                        Card { key: "{card.title}", class: "dashboard-capability",
                            CardHeader {
                                CardTitle {
                                    span { class: "dashboard-card-title",
                                        PanelIcon { panel: card.panel }
                                        "{card.title}"
                                    }
                                }
                                CardDescription { "{card.description}" }
                            }
                            CardContent {
                                Button { full_width: true, "{card.action_label}" }
                            }
                        }
                    }
                }
            }

            Card { class: "dashboard-guide",
                CardHeader {
                    CardTitle { "Getting Started" }
                    CardDescription {
                        "Welcome to {app_name}! Here's what you can do based on your role."
                    }
                }
                CardContent {
                    div { class: "dashboard-guide-list",
                        for entry in guide {
                            div { key: "{entry.title}", class: "dashboard-guide-entry",
                                h4 {
                                    class: "dashboard-guide-title",
                                    "data-color": entry.color.as_str(),
                                    "{entry.title}"
                                }
                                p { class: "dashboard-guide-body", "{entry.body}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PanelIcon(panel: Panel) -> Element {
    match panel {
        Panel::Admin => rsx! { Icon { icon: LdShield, width: 20, height: 20 } },
        Panel::FinancialAnalytics => rsx! { Icon { icon: LdDollarSign, width: 20, height: 20 } },
        Panel::ItOperations => rsx! { Icon { icon: LdSettings, width: 20, height: 20 } },
    }
}
