use shared_types::{
    normalize_email, AppConfig, AppError, AuthSnapshot, DemoAccount, FeatureFlags, LoginRequest,
    Profile, RoleSet, SessionStore, SessionUser, SignUpRequest,
};
use std::cell::RefCell;
use uuid::Uuid;

/// Boundary to the identity provider.
///
/// Implementations own every transition of the session and report it by
/// publishing into the [`SessionStore`] they were built with. Callers only
/// learn about success or failure; the new state arrives through the store.
pub trait SessionProvider {
    /// Resolve the session on app start. Clears the loading flag.
    fn restore(&self) -> Result<(), AppError>;
    fn sign_in(&self, request: &LoginRequest) -> Result<(), AppError>;
    fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError>;
    fn sign_out(&self) -> Result<(), AppError>;
}

struct Account {
    user: SessionUser,
    password: String,
    profile: Profile,
    roles: RoleSet,
}

impl Account {
    fn from_demo(demo: &DemoAccount) -> Self {
        Self {
            user: SessionUser {
                id: Uuid::new_v4(),
                email: normalize_email(&demo.email),
            },
            password: demo.password.clone(),
            profile: Profile {
                first_name: demo.first_name.clone(),
                last_name: demo.last_name.clone(),
            },
            roles: RoleSet::from_tags(demo.roles.iter().map(String::as_str)),
        }
    }

    fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot::signed_in(
            self.user.clone(),
            Some(self.profile.clone()),
            self.roles.clone(),
        )
    }
}

/// In-memory identity provider seeded from `config.toml`.
///
/// Accounts live for the lifetime of the page; nothing is persisted, so a
/// reload always restores to signed out.
pub struct DemoProvider {
    store: SessionStore,
    features: FeatureFlags,
    accounts: RefCell<Vec<Account>>,
}

impl DemoProvider {
    pub fn new(store: SessionStore, config: &AppConfig) -> Self {
        let mut accounts: Vec<Account> = Vec::with_capacity(config.demo_accounts.len());
        for demo in &config.demo_accounts {
            let account = Account::from_demo(demo);
            if accounts.iter().any(|a| a.user.email == account.user.email) {
                tracing::warn!(email = %account.user.email, "Duplicate demo account ignored");
                continue;
            }
            accounts.push(account);
        }
        tracing::debug!(count = accounts.len(), "Demo accounts loaded");

        Self {
            store,
            features: config.features.clone(),
            accounts: RefCell::new(accounts),
        }
    }
}

impl DemoProvider {
    fn accounts(&self) -> Result<std::cell::Ref<'_, Vec<Account>>, AppError> {
        self.accounts
            .try_borrow()
            .map_err(|_| AppError::internal("Account list is being modified"))
    }

    fn accounts_mut(&self) -> Result<std::cell::RefMut<'_, Vec<Account>>, AppError> {
        self.accounts
            .try_borrow_mut()
            .map_err(|_| AppError::internal("Account list is in use"))
    }
}

impl SessionProvider for DemoProvider {
    fn restore(&self) -> Result<(), AppError> {
        tracing::info!("Session restored: no stored session");
        self.store.publish(AuthSnapshot::signed_out());
        Ok(())
    }

    fn sign_in(&self, request: &LoginRequest) -> Result<(), AppError> {
        let email = normalize_email(&request.email);
        let snapshot = {
            let accounts = self.accounts()?;
            accounts
                .iter()
                .find(|a| a.user.email == email && a.password == request.password)
                .map(Account::snapshot)
        };

        match snapshot {
            Some(snapshot) => {
                tracing::info!(%email, roles = snapshot.roles.len(), "Signed in");
                self.store.publish(snapshot);
                Ok(())
            }
            None => {
                tracing::warn!(%email, "Sign-in rejected");
                Err(AppError::unauthorized("Invalid email or password"))
            }
        }
    }

    fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError> {
        if !self.features.signup {
            return Err(AppError::bad_request("Sign-up is disabled"));
        }

        let email = normalize_email(&request.email);
        let snapshot = {
            let mut accounts = self.accounts_mut()?;
            if accounts.iter().any(|a| a.user.email == email) {
                return Err(AppError::conflict("An account with this email already exists"));
            }
            let account = Account {
                user: SessionUser {
                    id: Uuid::new_v4(),
                    email: email.clone(),
                },
                password: request.password.clone(),
                profile: Profile {
                    first_name: request.first_name.trim().to_string(),
                    last_name: request.last_name.trim().to_string(),
                },
                roles: RoleSet::new(),
            };
            let snapshot = account.snapshot();
            accounts.push(account);
            snapshot
        };

        tracing::info!(%email, "Account created");
        self.store.publish(snapshot);
        Ok(())
    }

    fn sign_out(&self) -> Result<(), AppError> {
        let previous = self.store.snapshot();
        if let Some(user) = &previous.session.user {
            tracing::info!(email = %user.email, "Signed out");
        }
        self.store.publish(AuthSnapshot::signed_out());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, Role, Session};
    use std::cell::Cell;
    use std::rc::Rc;

    fn config() -> AppConfig {
        AppConfig::parse(
            r#"
            [[demo_accounts]]
            email = "Admin@CostIntel.dev"
            password = "admin-pass"
            first_name = "Ada"
            last_name = "Lovelace"
            roles = ["admin", "auditor"]

            [[demo_accounts]]
            email = "finance@costintel.dev"
            password = "finance-pass"
            roles = ["finance_manager"]
            "#,
        )
        .unwrap()
    }

    fn provider() -> (SessionStore, DemoProvider) {
        let store = SessionStore::default();
        let provider = DemoProvider::new(store.clone(), &config());
        (store, provider)
    }

    fn login(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn restore_clears_loading_without_user() {
        let (store, provider) = provider();
        assert!(store.snapshot().session.loading);
        provider.restore().unwrap();
        assert_eq!(store.snapshot(), AuthSnapshot::signed_out());
    }

    #[test]
    fn sign_in_publishes_user_profile_and_roles() {
        let (store, provider) = provider();
        provider.restore().unwrap();
        provider
            .sign_in(&login(" admin@costintel.dev ", "admin-pass"))
            .unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot.session.is_authenticated());
        assert_eq!(
            snapshot.session.user.as_ref().map(|u| u.email.as_str()),
            Some("admin@costintel.dev")
        );
        assert_eq!(
            snapshot.profile.as_ref().map(Profile::display_name),
            Some("Ada Lovelace".to_string())
        );
        assert!(snapshot.roles.contains(&Role::Admin));
        assert!(snapshot.roles.contains(&Role::Other("auditor".into())));
        assert!(snapshot.flags().is_admin);
    }

    #[test]
    fn wrong_password_is_unauthorized_and_leaves_session_signed_out() {
        let (store, provider) = provider();
        provider.restore().unwrap();
        let err = provider
            .sign_in(&login("finance@costintel.dev", "nope"))
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(store.snapshot().session, Session::signed_out());
    }

    #[test]
    fn unknown_email_gets_same_message_as_wrong_password() {
        let (_, provider) = provider();
        let unknown = provider.sign_in(&login("who@costintel.dev", "x")).unwrap_err();
        let wrong = provider
            .sign_in(&login("finance@costintel.dev", "x"))
            .unwrap_err();
        assert_eq!(unknown, wrong);
    }

    #[test]
    fn sign_out_clears_profile_and_roles() {
        let (store, provider) = provider();
        provider
            .sign_in(&login("finance@costintel.dev", "finance-pass"))
            .unwrap();
        provider.sign_out().unwrap();
        let snapshot = store.snapshot();
        assert_eq!(snapshot, AuthSnapshot::signed_out());
        assert!(snapshot.roles.is_empty());
    }

    #[test]
    fn sign_up_creates_roleless_account_and_signs_in() {
        let (store, provider) = provider();
        provider.restore().unwrap();
        provider
            .sign_up(&SignUpRequest {
                first_name: " Grace ".into(),
                last_name: "Hopper".into(),
                email: "grace@costintel.dev".into(),
                password: "compilers".into(),
            })
            .unwrap();

        let snapshot = store.snapshot();
        assert!(snapshot.session.is_authenticated());
        assert!(snapshot.roles.is_empty());
        assert_eq!(snapshot.profile.unwrap().first_name, "Grace");

        provider.sign_out().unwrap();
        provider
            .sign_in(&login("grace@costintel.dev", "compilers"))
            .unwrap();
        assert!(store.snapshot().session.is_authenticated());
    }

    #[test]
    fn sign_up_with_existing_email_conflicts() {
        let (_, provider) = provider();
        let err = provider
            .sign_up(&SignUpRequest {
                first_name: "Ada".into(),
                last_name: "Again".into(),
                email: "ADMIN@costintel.dev".into(),
                password: "another-pass".into(),
            })
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
    }

    #[test]
    fn sign_up_rejected_when_disabled() {
        let store = SessionStore::default();
        let mut config = config();
        config.features.signup = false;
        let provider = DemoProvider::new(store, &config);
        let err = provider
            .sign_up(&SignUpRequest {
                first_name: "New".into(),
                last_name: "User".into(),
                email: "new@costintel.dev".into(),
                password: "password1".into(),
            })
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::BadRequest);
    }

    #[test]
    fn duplicate_demo_accounts_keep_first() {
        let config = AppConfig::parse(
            r#"
            [[demo_accounts]]
            email = "dup@costintel.dev"
            password = "first"

            [[demo_accounts]]
            email = "DUP@costintel.dev"
            password = "second"
            "#,
        )
        .unwrap();
        let provider = DemoProvider::new(SessionStore::default(), &config);
        assert!(provider.sign_in(&login("dup@costintel.dev", "first")).is_ok());
        assert!(provider.sign_in(&login("dup@costintel.dev", "second")).is_err());
    }

    #[test]
    fn busy_account_list_is_an_internal_error_not_a_panic() {
        let (store, provider) = provider();
        provider.restore().unwrap();
        let _held = provider.accounts.borrow_mut();

        let err = provider
            .sign_in(&login("finance@costintel.dev", "finance-pass"))
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InternalError);
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
        assert_eq!(store.snapshot(), AuthSnapshot::signed_out());
    }

    #[test]
    fn subscribers_see_each_transition() {
        let (store, provider) = provider();
        let notified = Rc::new(Cell::new(0));
        let n = Rc::clone(&notified);
        store.subscribe(move |_| n.set(n.get() + 1));

        provider.restore().unwrap();
        provider
            .sign_in(&login("finance@costintel.dev", "finance-pass"))
            .unwrap();
        provider.sign_out().unwrap();
        assert_eq!(notified.get(), 3);
    }
}
