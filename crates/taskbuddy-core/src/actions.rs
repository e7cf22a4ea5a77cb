//! Handlers for the dropdown's "View Profile" and "Logout" entries
//!
//! Each handler talks to the collaborators and returns the [`MenuEvent`] the
//! caller folds into its [`MenuState`](crate::menu::MenuState). Logout errors
//! stop here: they are reported, never returned.

use crate::config::HeaderConfig;
use crate::menu::MenuEvent;
use crate::services::{AuthSource, Diagnostics, Navigator, Notifier, TracingDiagnostics};
use std::sync::Arc;
use tracing::{debug, info};

/// Collaborators behind the dropdown actions
#[derive(Clone)]
pub struct HeaderActions<A, N, T, D = TracingDiagnostics> {
    auth: A,
    navigator: N,
    notifier: T,
    diagnostics: D,
    config: Arc<HeaderConfig>,
}

impl<A, N, T> HeaderActions<A, N, T> {
    pub fn new(auth: A, navigator: N, notifier: T) -> Self {
        Self {
            auth,
            navigator,
            notifier,
            diagnostics: TracingDiagnostics,
            config: Arc::new(HeaderConfig::default()),
        }
    }
}

impl<A, N, T, D> HeaderActions<A, N, T, D> {
    pub fn with_diagnostics<E>(self, diagnostics: E) -> HeaderActions<A, N, T, E> {
        HeaderActions {
            auth: self.auth,
            navigator: self.navigator,
            notifier: self.notifier,
            diagnostics,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: Arc<HeaderConfig>) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }
}

impl<A, N, T, D> HeaderActions<A, N, T, D>
where
    A: AuthSource,
    N: Navigator,
    T: Notifier,
    D: Diagnostics,
{
    /// Navigate to the profile page. Always closes the menu.
    pub fn view_profile(&self) -> MenuEvent {
        debug!(route = %self.config.profile_route, "Navigating to profile");
        self.navigator.navigate_to(&self.config.profile_route);
        MenuEvent::ProfileSelected
    }

    /// Log out and notify. The menu closes only on success.
    pub async fn logout(&self) -> MenuEvent {
        let messages = &self.config.messages;
        match self.auth.logout().await {
            Ok(()) => {
                info!("Logout completed");
                self.notifier.notify_success(&messages.logout_success);
                MenuEvent::LogoutSucceeded
            }
            Err(e) => {
                self.diagnostics
                    .error(&format!("{} {}", messages.logout_error_prefix, e));
                self.notifier.notify_failure(&messages.logout_failure);
                MenuEvent::LogoutFailed
            }
        }
    }
}
