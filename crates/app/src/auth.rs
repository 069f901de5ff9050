use client::{DefaultTokenStore, SessionStore};
use dioxus::prelude::*;
use shared_types::{Session, User};

/// Console-wide session: the signed-in user plus the token storage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session>,
    pub tokens: Signal<DefaultTokenStore>,
}

impl AuthState {
    pub fn new(initial: Session) -> Self {
        Self {
            session: Signal::new(initial),
            tokens: Signal::new(DefaultTokenStore::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().user().cloned()
    }

    /// Handle to the token storage, detached from the signal so it can be
    /// held across awaits.
    pub fn token_store(&self) -> DefaultTokenStore {
        self.tokens.read().clone()
    }
}

impl SessionStore for AuthState {
    fn session(&self) -> Session {
        self.session.read().clone()
    }

    fn replace(&mut self, session: Session) {
        self.session.set(session);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
