//! taskbuddy-web - Leptos front end for the TaskBuddy header

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod context;
pub mod diagnostics;
pub mod hooks;
pub mod pages;

pub use app::App;
pub use context::SessionContext;
pub use diagnostics::ConsoleDiagnostics;
