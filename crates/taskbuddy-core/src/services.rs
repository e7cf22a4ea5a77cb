//! Capabilities the header needs from its collaborators
//!
//! The header never talks to a concrete auth backend, router or toast library.
//! It is handed implementations of these traits instead.

use crate::error::AuthError;
use crate::models::{AuthUser, UserProfile};

/// Current user and the logout command
#[allow(async_fn_in_trait)]
pub trait AuthSource {
    fn current_user(&self) -> Option<AuthUser>;

    async fn logout(&self) -> Result<(), AuthError>;
}

/// Read-only profile record
pub trait ProfileSource {
    fn current_profile(&self) -> Option<UserProfile>;
}

/// Client-side navigation
pub trait Navigator {
    fn navigate_to(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, route: &str) {
        self(route)
    }
}

/// User-facing notifications
pub trait Notifier {
    fn notify_success(&self, message: &str);

    fn notify_failure(&self, message: &str);
}

/// Operator-visible diagnostic output
pub trait Diagnostics {
    fn error(&self, message: &str);
}

/// Writes diagnostics through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}
