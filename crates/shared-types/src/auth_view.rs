use crate::session::Session;

/// Path authenticated users are sent to from the auth page.
pub const HOME_PATH: &str = "/";

/// Which form the auth page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }
}

/// The single thing the auth page renders for a given session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    Loading,
    Redirect(&'static str),
    Form(AuthMode),
}

impl AuthView {
    /// Loading wins over everything; a known user is sent home; otherwise
    /// the form selected by `mode` is shown.
    pub fn resolve(session: &Session, mode: AuthMode) -> Self {
        if session.loading {
            AuthView::Loading
        } else if session.user.is_some() {
            AuthView::Redirect(HOME_PATH)
        } else {
            AuthView::Form(mode)
        }
    }
}
