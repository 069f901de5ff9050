//! Session lifecycle: establishing, restoring, guarding and ending it.
//!
//! The in-memory [`Session`] lives behind a [`SessionStore`] so the same
//! rules drive the UI's reactive state and plain values in tests.

use shared_types::{Portal, Session, SessionPhase, User};

use crate::api::ApiClient;
use crate::storage::TokenStore;

/// Holder of the current in-memory session.
pub trait SessionStore {
    fn session(&self) -> Session;
    fn replace(&mut self, session: Session);
}

impl SessionStore for Session {
    fn session(&self) -> Session {
        self.clone()
    }

    fn replace(&mut self, session: Session) {
        *self = session;
    }
}

/// Token and user produced by any successful sign-in path.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Persist the token under the portal's key and mark the session signed in.
pub fn establish<T, S>(tokens: &T, store: &mut S, portal: Portal, auth: AuthSession) -> User
where
    T: TokenStore + ?Sized,
    S: SessionStore,
{
    tokens.store_token(portal, &auth.token);
    tracing::info!(?portal, email = %auth.user.email, role = auth.user.role.as_str(), "session established");
    store.replace(Session::authenticated(auth.user.clone()).with_portal(portal));
    auth.user
}

/// Store the token of a freshly verified admin without entering the
/// dashboard yet. The welcome step promotes it with [`enter_dashboard`].
pub fn establish_pending<T, S>(tokens: &T, store: &mut S, portal: Portal, auth: AuthSession)
where
    T: TokenStore + ?Sized,
    S: SessionStore,
{
    tokens.store_token(portal, &auth.token);
    store.replace(Session::pending(auth.user).with_portal(portal));
}

/// Promote a pending session. Returns `false` when nobody is pending.
pub fn enter_dashboard<S: SessionStore>(store: &mut S) -> bool {
    let mut session = store.session();
    let entered = session.authenticate();
    store.replace(session);
    entered
}

/// Where a restored console stands for `portal`.
///
/// A persisted token alone never signs anyone in: the backend has no
/// endpoint that returns the current user, so a reload lands in
/// [`SessionPhase::Tokened`] and the guard asks for credentials again.
pub fn rehydrate<T, S>(tokens: &T, store: &S, portal: Portal) -> SessionPhase
where
    T: TokenStore + ?Sized,
    S: SessionStore,
{
    let has_token = tokens.token(portal).is_some();
    let phase = store.session().phase(has_token);
    if phase == SessionPhase::Tokened {
        tracing::info!(?portal, "stored token without a session, sign-in required");
    }
    phase
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin(Portal),
}

/// Protected screens render only for an authenticated session, unless the
/// bypass flag is on.
pub fn guard(bypass_auth: bool, phase: SessionPhase, portal: Portal) -> GuardDecision {
    if bypass_auth || phase == SessionPhase::Authenticated {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToLogin(portal)
    }
}

/// Session a bypassed console starts with.
pub fn development_session() -> Session {
    Session::authenticated(User::development()).with_portal(Portal::Admin)
}

/// Portal the current session signed in through, or `fallback` when the
/// session does not know (bypassed consoles, anonymous sessions).
///
/// Logout and session expiry go through this so the token that is cleared
/// is the one that was stored, whatever menu the user's role selects.
pub fn session_portal<S: SessionStore>(store: &S, fallback: Portal) -> Portal {
    store.session().portal().unwrap_or(fallback)
}

/// Dashboard portal to send a signed-in visitor of a login or onboarding
/// screen to. `None` lets the screen render.
pub fn signed_in_redirect<S: SessionStore>(store: &S, screen: Portal) -> Option<Portal> {
    let session = store.session();
    if !session.is_authenticated() {
        return None;
    }
    Some(session.portal().unwrap_or(screen))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The backend acknowledged the logout.
    Confirmed,
    /// Nothing was stored, so the backend was not called.
    NoToken,
    /// The backend call failed; local state was cleared anyway.
    RemoteFailed,
}

/// End the session for `portal`.
///
/// The backend call is best effort. The stored token and the in-memory
/// session are cleared whatever it returns.
pub async fn logout<T, S>(api: &ApiClient, tokens: &T, store: &mut S, portal: Portal) -> LogoutOutcome
where
    T: TokenStore + ?Sized,
    S: SessionStore,
{
    let outcome = match tokens.token(portal) {
        None => LogoutOutcome::NoToken,
        Some(token) => match api.logout(portal, &token).await {
            Ok(()) => LogoutOutcome::Confirmed,
            Err(e) => {
                tracing::warn!(?portal, error = %e, "logout request failed, clearing local session");
                LogoutOutcome::RemoteFailed
            }
        },
    };

    tokens.clear_token(portal);
    store.replace(Session::anonymous());
    tracing::info!(?portal, ?outcome, "logged out");
    outcome
}
