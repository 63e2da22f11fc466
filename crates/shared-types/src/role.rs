use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A permission category assigned to a user by the identity provider.
///
/// - `Admin`: full access; satisfies the finance and IT panel gates too.
/// - `FinanceManager`: cost reports and financial analytics.
/// - `ItOps`: infrastructure and operational cost monitoring.
/// - `Other`: any tag the dashboard has no label for; passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    FinanceManager,
    ItOps,
    Other(String),
}

impl Role {
    /// Parse a provider role tag. Unknown tags are kept verbatim.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "admin" => Role::Admin,
            "finance_manager" => Role::FinanceManager,
            "it_ops" => Role::ItOps,
            other => Role::Other(other.to_string()),
        }
    }

    /// The raw tag as stored by the provider.
    pub fn as_tag(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::FinanceManager => "finance_manager",
            Role::ItOps => "it_ops",
            Role::Other(tag) => tag,
        }
    }
}

impl From<String> for Role {
    fn from(tag: String) -> Self {
        Role::from_tag(&tag)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_tag().to_string()
    }
}

/// The set of roles held by the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from provider tags, collapsing duplicates.
    pub fn from_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> Self {
        tags.into_iter().map(Role::from_tag).collect()
    }

    pub fn contains(&self, role: &Role) -> bool {
        self.0.contains(role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::collections::btree_set::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Boolean capabilities derived from role membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_finance_manager: bool,
    pub is_it_ops: bool,
}

impl RoleFlags {
    pub fn from_roles(roles: &RoleSet) -> Self {
        Self {
            is_admin: roles.contains(&Role::Admin),
            is_finance_manager: roles.contains(&Role::FinanceManager),
            is_it_ops: roles.contains(&Role::ItOps),
        }
    }
}

/// Badge palette used for role chips and guide headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Red,
    Green,
    Blue,
    Gray,
}

impl BadgeColor {
    /// Value for the `data-color` attribute read by the badge stylesheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeColor::Red => "red",
            BadgeColor::Green => "green",
            BadgeColor::Blue => "blue",
            BadgeColor::Gray => "gray",
        }
    }
}

/// Label and color for a single role badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBadge {
    pub label: String,
    pub color: BadgeColor,
}

/// Known role tags with their display label and badge color.
pub const ROLE_STYLES: &[(&str, &str, BadgeColor)] = &[
    ("admin", "Admin", BadgeColor::Red),
    ("finance_manager", "Finance Manager", BadgeColor::Green),
    ("it_ops", "IT Operations", BadgeColor::Blue),
];

/// Color for roles missing from [`ROLE_STYLES`].
pub const DEFAULT_BADGE_COLOR: BadgeColor = BadgeColor::Gray;

/// Resolve the badge for a role. Unlabeled tags render gray with the raw tag.
pub fn role_badge(role: &Role) -> RoleBadge {
    let tag = role.as_tag();
    ROLE_STYLES
        .iter()
        .find(|(known, _, _)| *known == tag)
        .map(|(_, label, color)| RoleBadge {
            label: (*label).to_string(),
            color: *color,
        })
        .unwrap_or_else(|| RoleBadge {
            label: tag.to_string(),
            color: DEFAULT_BADGE_COLOR,
        })
}
