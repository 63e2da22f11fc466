use crate::role::{RoleFlags, RoleSet};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of the signed-in user as reported by the session provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

/// Authentication status owned by the session provider.
///
/// The default value is the resolving state: `loading` is set and no user
/// is known yet. Views treat that as "render nothing but a spinner".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::resolving()
    }
}

impl Session {
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// True once the provider has resolved the session to a user.
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

/// Profile details attached 1:1 to an authenticated user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Profile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Everything the views read from shared state, published as one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub session: Session,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub roles: RoleSet,
}

impl AuthSnapshot {
    pub fn signed_out() -> Self {
        Self {
            session: Session::signed_out(),
            profile: None,
            roles: RoleSet::new(),
        }
    }

    pub fn signed_in(user: SessionUser, profile: Option<Profile>, roles: RoleSet) -> Self {
        Self {
            session: Session::signed_in(user),
            profile,
            roles,
        }
    }

    /// Role flags for gating views.
    ///
    /// Always all-false unless the session is resolved to a user, so stale
    /// roles left over from a previous session can never unlock a panel.
    pub fn flags(&self) -> RoleFlags {
        if self.session.is_authenticated() {
            RoleFlags::from_roles(&self.roles)
        } else {
            RoleFlags::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::RoleSet;
    use pretty_assertions::assert_eq;

    fn user() -> SessionUser {
        SessionUser {
            id: Uuid::nil(),
            email: "ada@costintel.dev".into(),
        }
    }

    #[test]
    fn default_session_is_resolving() {
        let session = Session::default();
        assert!(session.loading);
        assert!(session.user.is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn loading_with_user_is_not_authenticated() {
        let session = Session {
            user: Some(user()),
            loading: true,
        };
        assert!(!session.is_authenticated());
    }

    #[test]
    fn display_name_joins_and_trims() {
        let profile = Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        };
        assert_eq!(profile.display_name(), "Ada Lovelace");

        let first_only = Profile {
            first_name: "Ada".into(),
            last_name: String::new(),
        };
        assert_eq!(first_only.display_name(), "Ada");
        assert_eq!(Profile::default().display_name(), "");
    }

    #[test]
    fn flags_hidden_while_loading() {
        let snapshot = AuthSnapshot {
            session: Session {
                user: Some(user()),
                loading: true,
            },
            profile: None,
            roles: RoleSet::from_tags(["admin"]),
        };
        assert_eq!(snapshot.flags(), RoleFlags::default());
    }

    #[test]
    fn flags_hidden_when_signed_out() {
        let snapshot = AuthSnapshot {
            session: Session::signed_out(),
            profile: None,
            roles: RoleSet::from_tags(["admin", "it_ops"]),
        };
        assert_eq!(snapshot.flags(), RoleFlags::default());
    }

    #[test]
    fn flags_visible_when_signed_in() {
        let snapshot =
            AuthSnapshot::signed_in(user(), None, RoleSet::from_tags(["it_ops"]));
        assert!(snapshot.flags().is_it_ops);
        assert!(!snapshot.flags().is_admin);
    }

    #[test]
    fn snapshot_deserializes_with_missing_optional_fields() {
        let snapshot: AuthSnapshot =
            serde_json::from_str(r#"{"session":{"loading":false}}"#).unwrap();
        assert_eq!(snapshot, AuthSnapshot::signed_out());
    }
}
