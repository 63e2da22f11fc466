use crate::provider::SessionProvider;
use dioxus::prelude::*;
use shared_types::{AppError, AuthSnapshot, LoginRequest, RoleFlags, SessionStore, SignUpRequest};
use std::rc::Rc;

/// Authentication state shared with every route.
///
/// `snapshot` mirrors the [`SessionStore`]: the store publishes, a
/// subscription copies each change into the signal, and components reading
/// the signal re-render. Components never write the signal directly; all
/// transitions go through the provider.
#[derive(Clone)]
pub struct AuthState {
    pub snapshot: Signal<AuthSnapshot>,
    store: SessionStore,
    provider: Rc<dyn SessionProvider>,
}

impl AuthState {
    /// Bridge `store` into a signal. Must run inside a component scope.
    pub fn connect(store: SessionStore, provider: Rc<dyn SessionProvider>) -> Self {
        let snapshot = Signal::new(store.snapshot());
        store.subscribe(move |next| {
            let mut snapshot = snapshot;
            snapshot.set(next.clone());
        });
        Self {
            snapshot,
            store,
            provider,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn flags(&self) -> RoleFlags {
        self.snapshot.read().flags()
    }

    pub fn restore(&self) {
        if let Err(e) = self.provider.restore() {
            tracing::error!("Session restore failed: {e}");
        }
    }

    pub fn sign_in(&self, request: &LoginRequest) -> Result<(), AppError> {
        self.provider.sign_in(request)
    }

    pub fn sign_up(&self, request: &SignUpRequest) -> Result<(), AppError> {
        self.provider.sign_up(request)
    }

    pub fn sign_out(&self) {
        if let Err(e) = self.provider.sign_out() {
            tracing::error!("Sign-out failed: {e}");
        }
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook for the role flags of the current session.
pub fn use_role_flags() -> RoleFlags {
    use_auth().flags()
}
