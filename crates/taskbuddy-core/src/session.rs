//! Observable in-memory session store
//!
//! Holds the signed-in user and their profile behind a `parking_lot::RwLock`
//! and announces every change on an [`EventBus`]. Implements the auth and
//! profile capabilities the header reads from.

use crate::error::AuthError;
use crate::event::{EventBus, SessionEvent};
use crate::models::{AuthUser, UserProfile};
use crate::services::{AuthSource, ProfileSource};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Default)]
struct SessionState {
    user: Option<AuthUser>,
    profile: Option<UserProfile>,
}

/// Shared session state. Clones see the same user, profile and events.
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    events: EventBus,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<AuthUser> {
        self.state.read().user.clone()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.state.read().profile.clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.read().user.is_some()
    }

    /// Replace the current user
    pub fn sign_in(&self, user: AuthUser) {
        let uid = user.uid.clone();
        self.state.write().user = Some(user);

        info!(uid = %uid, "User signed in");
        self.events.publish(SessionEvent::SignedIn { uid });
    }

    pub fn set_profile(&self, profile: UserProfile) {
        self.state.write().profile = Some(profile);

        debug!("Profile updated");
        self.events.publish(SessionEvent::ProfileUpdated);
    }

    pub fn clear_profile(&self) {
        let had_profile = self.state.write().profile.take().is_some();
        if had_profile {
            debug!("Profile cleared");
            self.events.publish(SessionEvent::ProfileCleared);
        }
    }

    /// Drop the user and their profile.
    /// Fails with [`AuthError::NotSignedIn`] when nobody is signed in.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let uid = {
            let mut state = self.state.write();
            let user = state.user.take().ok_or(AuthError::NotSignedIn)?;
            state.profile = None;
            user.uid
        };

        info!(uid = %uid, "User signed out");
        self.events.publish(SessionEvent::SignedOut);
        Ok(())
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.events
    }
}

impl AuthSource for SessionStore {
    fn current_user(&self) -> Option<AuthUser> {
        self.user()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.sign_out().await
    }
}

impl ProfileSource for SessionStore {
    fn current_profile(&self) -> Option<UserProfile> {
        self.profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_out() {
        let store = SessionStore::new();
        assert!(!store.is_signed_in());
        assert!(store.current_user().is_none());
        assert!(store.current_profile().is_none());
    }

    #[tokio::test]
    async fn test_sign_in_publishes_event() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.sign_in(AuthUser::new("u-42").with_email("a@b.com"));

        assert_eq!(
            rx.recv().await.unwrap(),
            SessionEvent::SignedIn {
                uid: "u-42".to_string()
            }
        );
        assert_eq!(store.user().unwrap().email.as_deref(), Some("a@b.com"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_user_and_profile() {
        let store = SessionStore::new();
        store.sign_in(AuthUser::new("u-1"));
        store.set_profile(UserProfile::default().with_display_name("Jane"));
        let mut rx = store.subscribe();

        store.logout().await.unwrap();

        assert!(store.user().is_none());
        assert!(store.profile().is_none());
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::SignedOut);
    }

    #[tokio::test]
    async fn test_sign_out_without_user_fails() {
        let store = SessionStore::new();
        let err = store.logout().await.unwrap_err();
        assert_eq!(err, AuthError::NotSignedIn);
    }

    #[tokio::test]
    async fn test_clear_profile_only_publishes_when_present() {
        let store = SessionStore::new();
        let mut rx = store.subscribe();

        store.clear_profile();
        store.set_profile(UserProfile::default());
        store.clear_profile();

        assert_eq!(rx.recv().await.unwrap(), SessionEvent::ProfileUpdated);
        assert_eq!(rx.recv().await.unwrap(), SessionEvent::ProfileCleared);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();

        other.sign_in(AuthUser::new("shared"));
        assert_eq!(store.user().unwrap().uid, "shared");
        assert_eq!(store.event_bus().subscriber_count(), 0);
    }
}
