//! Browser console diagnostics

use taskbuddy_core::Diagnostics;

/// Writes diagnostics with `console.error`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn error(&self, message: &str) {
        leptos::logging::error!("{}", message);
    }
}
