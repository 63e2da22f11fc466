use crate::role::{BadgeColor, RoleFlags};

/// Visibility rule for a dashboard section, evaluated against [`RoleFlags`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Admin,
    Finance,
    ItOps,
    FinanceOrAdmin,
    ItOpsOrAdmin,
}

impl Gate {
    pub fn allows(&self, flags: RoleFlags) -> bool {
        match self {
            Gate::Admin => flags.is_admin,
            Gate::Finance => flags.is_finance_manager,
            Gate::ItOps => flags.is_it_ops,
            Gate::FinanceOrAdmin => flags.is_finance_manager || flags.is_admin,
            Gate::ItOpsOrAdmin => flags.is_it_ops || flags.is_admin,
        }
    }
}

/// Capability panels shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Admin,
    FinancialAnalytics,
    ItOperations,
}

/// Static content and gate for one capability card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub panel: Panel,
    pub title: &'static str,
    pub description: &'static str,
    pub action_label: &'static str,
    pub gate: Gate,
}

/// Capability cards in display order.
pub const PANELS: &[PanelSpec] = &[
    PanelSpec {
        panel: Panel::Admin,
        title: "Admin Panel",
        description: "Manage users, roles, and system settings",
        action_label: "Access Admin Panel",
        gate: Gate::Admin,
    },
    PanelSpec {
        panel: Panel::FinancialAnalytics,
        title: "Financial Analytics",
        description: "View cost reports and financial insights",
        action_label: "View Reports",
        gate: Gate::FinanceOrAdmin,
    },
    PanelSpec {
        panel: Panel::ItOperations,
        title: "IT Operations",
        description: "Monitor infrastructure and operational costs",
        action_label: "View Dashboard",
        gate: Gate::ItOpsOrAdmin,
    },
];

/// One entry in the "Getting Started" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideSpec {
    pub panel: Panel,
    pub title: &'static str,
    pub body: &'static str,
    pub color: BadgeColor,
    pub gate: Gate,
}

/// Getting-started entries in display order. These follow the plain role
/// flags: an admin reads only the admin entry.
pub const GUIDE: &[GuideSpec] = &[
    GuideSpec {
        panel: Panel::Admin,
        title: "Admin Access",
        body: "You have full administrative access to manage users, configure settings, and oversee all operations.",
        color: BadgeColor::Red,
        gate: Gate::Admin,
    },
    GuideSpec {
        panel: Panel::FinancialAnalytics,
        title: "Finance Manager Access",
        body: "You can access financial reports, cost analytics, and budget management tools.",
        color: BadgeColor::Green,
        gate: Gate::Finance,
    },
    GuideSpec {
        panel: Panel::ItOperations,
        title: "IT Operations Access",
        body: "You can monitor infrastructure costs, system performance, and operational metrics.",
        color: BadgeColor::Blue,
        gate: Gate::ItOps,
    },
];

/// Pair every item with its visibility, then keep the visible ones.
fn visible<T: Copy>(items: &[T], gate: impl Fn(&T) -> Gate, flags: RoleFlags) -> Vec<T> {
    items
        .iter()
        .map(|item| (gate(item).allows(flags), *item))
        .filter_map(|(shown, item)| shown.then_some(item))
        .collect()
}

/// Capability cards the given flags unlock, in display order.
pub fn capability_cards(flags: RoleFlags) -> Vec<PanelSpec> {
    visible(PANELS, |item| item.gate, flags)
}

/// Getting-started entries the given flags unlock, in display order.
pub fn guide_entries(flags: RoleFlags) -> Vec<GuideSpec> {
    visible(GUIDE, |item| item.gate, flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleSet;
    use pretty_assertions::assert_eq;

    fn flags(tags: &[&str]) -> RoleFlags {
        RoleFlags::from_roles(&RoleSet::from_tags(tags.iter().copied()))
    }

    fn card_panels(tags: &[&str]) -> Vec<Panel> {
        capability_cards(flags(tags)).iter().map(|c| c.panel).collect()
    }

    fn guide_panels(tags: &[&str]) -> Vec<Panel> {
        guide_entries(flags(tags)).iter().map(|g| g.panel).collect()
    }

    #[test]
    fn no_roles_unlock_nothing() {
        assert!(card_panels(&[]).is_empty());
        assert!(guide_panels(&[]).is_empty());
    }

    #[test]
    fn unlabeled_roles_unlock_nothing() {
        assert!(card_panels(&["auditor", "viewer"]).is_empty());
        assert!(guide_panels(&["auditor"]).is_empty());
    }

    #[test]
    fn finance_manager_sees_only_financial_analytics() {
        assert_eq!(card_panels(&["finance_manager"]), vec![Panel::FinancialAnalytics]);
        assert_eq!(guide_panels(&["finance_manager"]), vec![Panel::FinancialAnalytics]);
    }

    #[test]
    fn it_ops_sees_only_it_operations() {
        assert_eq!(card_panels(&["it_ops"]), vec![Panel::ItOperations]);
        assert_eq!(guide_panels(&["it_ops"]), vec![Panel::ItOperations]);
    }

    #[test]
    fn admin_sees_every_card_but_only_admin_guide() {
        assert_eq!(
            card_panels(&["admin"]),
            vec![Panel::Admin, Panel::FinancialAnalytics, Panel::ItOperations]
        );
        assert_eq!(guide_panels(&["admin"]), vec![Panel::Admin]);
    }

    #[test]
    fn finance_and_it_ops_see_both_non_admin_cards() {
        assert_eq!(
            card_panels(&["it_ops", "finance_manager"]),
            vec![Panel::FinancialAnalytics, Panel::ItOperations]
        );
    }

    #[test]
    fn gate_truth_table_for_or_gates() {
        let none = RoleFlags::default();
        let admin = RoleFlags { is_admin: true, ..none };
        let finance = RoleFlags { is_finance_manager: true, ..none };
        let ops = RoleFlags { is_it_ops: true, ..none };

        assert!(Gate::FinanceOrAdmin.allows(admin));
        assert!(Gate::FinanceOrAdmin.allows(finance));
        assert!(!Gate::FinanceOrAdmin.allows(ops));
        assert!(Gate::ItOpsOrAdmin.allows(admin));
        assert!(Gate::ItOpsOrAdmin.allows(ops));
        assert!(!Gate::ItOpsOrAdmin.allows(finance));
        assert!(!Gate::Finance.allows(admin));
        assert!(!Gate::ItOps.allows(admin));
    }

    #[test]
    fn guide_colors_match_role_badges() {
        use crate::role::{role_badge, Role};
        let by_panel = [
            (Panel::Admin, Role::Admin),
            (Panel::FinancialAnalytics, Role::FinanceManager),
            (Panel::ItOperations, Role::ItOps),
        ];
        for (panel, role) in by_panel {
            let entry = GUIDE.iter().find(|g| g.panel == panel).unwrap();
            assert_eq!(entry.color, role_badge(&role).color);
        }
    }
}
