//! Reactive view of the session store
//!
//! Mirrors the store's user and profile into signals and refreshes them on
//! every [`SessionEvent`](taskbuddy_core::SessionEvent), so components re-render
//! when auth or profile state changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use taskbuddy_core::{AuthError, AuthSource, AuthUser, ProfileSource, SessionStore, UserProfile};
use tokio::sync::broadcast::error::RecvError;

/// Session state provided as Leptos context
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    user: RwSignal<Option<AuthUser>>,
    profile: RwSignal<Option<UserProfile>>,
}

impl SessionContext {
    /// Create the signals and start following store events
    pub fn new(store: SessionStore) -> Self {
        let user = RwSignal::new(store.user());
        let profile = RwSignal::new(store.profile());

        let mut events = store.subscribe();
        let source = store.clone();
        spawn_local(async move {
            loop {
                match events.recv().await {
                    Ok(event) => leptos::logging::log!("Session event: {:?}", event),
                    Err(RecvError::Lagged(skipped)) => {
                        leptos::logging::warn!("Session events lagged, {} skipped", skipped)
                    }
                    Err(RecvError::Closed) => break,
                }

                // Stop once the owning scope is gone
                if user.try_set(source.user()).is_some()
                    || profile.try_set(source.profile()).is_some()
                {
                    break;
                }
            }
        });

        Self {
            store,
            user,
            profile,
        }
    }

    pub fn user(&self) -> RwSignal<Option<AuthUser>> {
        self.user
    }

    pub fn profile(&self) -> RwSignal<Option<UserProfile>> {
        self.profile
    }
}

impl AuthSource for SessionContext {
    fn current_user(&self) -> Option<AuthUser> {
        self.user.get()
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.store.logout().await
    }
}

impl ProfileSource for SessionContext {
    fn current_profile(&self) -> Option<UserProfile> {
        self.profile.get()
    }
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
