//! # Session store
//!
//! Owns the bearer token and the signed-in user. The token is mirrored into a
//! [`TokenStore`] so it survives reloads; the user lives in memory only and is
//! re-fetched from `GET /api/auth/me` once at startup.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`login`](SessionStore::login) | Persist the token, remember the user. Used for both login and registration responses. |
//! | [`refresh`](SessionStore::refresh) | Apply a profile fetch. Any failure ends the session. |
//! | [`logout`](SessionStore::logout) | Forget the token (persisted and in memory) and the user. |
//!
//! A session counts as authenticated once a user is known. A restored token
//! alone is not enough: it still has to pass [`refresh`](SessionStore::refresh).

use api::{ApiError, AuthResponse, UserInfo};
use store::{KeyValueStore, TokenStore};

use crate::route::Viewer;

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    tokens: TokenStore<S>,
    token: Option<String>,
    user: Option<UserInfo>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Open the session, picking up a token left by a previous visit.
    pub fn new(store: S) -> Self {
        let tokens = TokenStore::new(store);
        let token = tokens.load();
        if token.is_some() {
            tracing::debug!("restored session token, profile check pending");
        }
        Self {
            tokens,
            token,
            user: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Token for a bearer-authenticated call.
    pub fn bearer(&self) -> Result<String, ApiError> {
        self.token.clone().ok_or(ApiError::Unauthenticated)
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from_user(self.user.as_ref())
    }

    /// Token still waiting for its startup profile check.
    pub fn pending_refresh(&self) -> Option<String> {
        match (&self.token, &self.user) {
            (Some(token), None) => Some(token.clone()),
            _ => None,
        }
    }

    pub fn login(&mut self, auth: AuthResponse) {
        self.tokens.save(&auth.access_token);
        self.token = Some(auth.access_token);
        self.user = Some(auth.user);
    }

    /// Apply the outcome of a profile fetch. Returns whether the session is
    /// still alive.
    pub fn refresh(&mut self, profile: Result<UserInfo, ApiError>) -> bool {
        match profile {
            Ok(user) if self.token.is_some() => {
                self.user = Some(user);
                true
            }
            Ok(_) => false,
            Err(e) => {
                tracing::info!("session rejected ({e}), signing out");
                self.logout();
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.tokens.clear();
        self.token = None;
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use store::{MemoryStore, TOKEN_KEY};

    use super::*;

    fn auth(token: &str) -> AuthResponse {
        AuthResponse {
            access_token: token.to_string(),
            token_type: Some("bearer".to_string()),
            user: UserInfo {
                name: "A".to_string(),
                ..UserInfo::default()
            },
        }
    }

    #[test]
    fn test_login_persists_token() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), Err(ApiError::Unauthenticated));

        session.login(auth("t1"));

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
        assert_eq!(session.viewer(), Viewer::Client);
    }

    #[test]
    fn test_restored_token_needs_refresh() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "old");

        let mut session = SessionStore::new(store);
        assert_eq!(session.token(), Some("old"));
        assert!(!session.is_authenticated());
        assert_eq!(session.pending_refresh().as_deref(), Some("old"));

        assert!(session.refresh(Ok(UserInfo::default())));
        assert!(session.is_authenticated());
        assert_eq!(session.pending_refresh(), None);
    }

    #[test]
    fn test_failed_refresh_logs_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "expired");

        let mut session = SessionStore::new(store.clone());
        let alive = session.refresh(Err(ApiError::Status {
            status: 401,
            detail: Some("Invalid authentication credentials".to_string()),
        }));

        assert!(!alive);
        assert_eq!(session.token(), None);
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn test_network_failure_on_refresh_logs_out() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "t1");

        let mut session = SessionStore::new(store);
        assert!(!session.refresh(Err(ApiError::Network("offline".to_string()))));
        assert_eq!(session.viewer(), Viewer::Anonymous);
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        let mut session = SessionStore::new(store.clone());
        session.login(auth("t1"));

        session.logout();

        assert_eq!(session.token(), None);
        assert!(session.user().is_none());
        assert!(store.is_empty());
    }
}
