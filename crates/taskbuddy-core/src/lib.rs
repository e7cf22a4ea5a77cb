//! taskbuddy-core - Core library for the TaskBuddy header
//!
//! Framework-free pieces of the header: user models, derived display fields,
//! the user-menu state machine, collaborator capabilities, action handlers,
//! and an observable in-memory session store.

pub mod actions;
pub mod config;
pub mod error;
pub mod event;
pub mod header;
pub mod identity;
pub mod menu;
pub mod models;
pub mod services;
pub mod session;

pub use actions::HeaderActions;
pub use config::{HeaderConfig, HeaderMessages};
pub use error::AuthError;
pub use event::{EventBus, SessionEvent};
pub use header::{HeaderModel, TriggerModel};
pub use identity::{Avatar, Identity};
pub use menu::{MenuEvent, MenuState};
pub use models::{AuthUser, UserProfile};
pub use services::{
    AuthSource, Diagnostics, Navigator, Notifier, ProfileSource, TracingDiagnostics,
};
pub use session::SessionStore;
