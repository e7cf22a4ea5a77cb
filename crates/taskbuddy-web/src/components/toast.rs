//! Toast notification system

use leptos::prelude::*;
use std::time::Duration;
use taskbuddy_core::Notifier;

/// Toast kind (determines styling and lifetime)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    /// Errors stay up twice as long
    pub fn auto_dismiss(&self) -> Duration {
        match self {
            ToastKind::Success => Duration::from_millis(2000),
            ToastKind::Error => Duration::from_millis(4000),
        }
    }
}

/// Single toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

/// Toast context for managing global toast state
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<usize>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Add a toast and schedule its removal
    pub fn show(&self, message: String, kind: ToastKind) {
        let id = self.next_id.get_untracked();
        self.next_id.update(|n| *n += 1);

        self.toasts.update(|toasts| {
            toasts.push(Toast { id, message, kind });
        });

        let toasts = self.toasts;
        set_timeout(
            move || {
                toasts.update(|toasts| toasts.retain(|t| t.id != id));
            },
            kind.auto_dismiss(),
        );
    }

    pub fn success(&self, message: String) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: String) {
        self.show(message, ToastKind::Error);
    }

    /// Manually dismiss a toast
    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|toasts| {
            toasts.retain(|t| t.id != id);
        });
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastContext {
    fn notify_success(&self, message: &str) {
        self.success(message.to_string());
    }

    fn notify_failure(&self, message: &str) {
        self.error(message.to_string());
    }
}

/// Toast provider component (wraps app root)
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context(ToastContext::new());

    view! {
        {children()}
        <ToastContainer />
    }
}

/// Renders all active toasts
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toast_context = use_toast();

    view! {
        <div class="toast-container" role="status" aria-live="polite">
            <For
                each=move || toast_context.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <ToastItem toast=toast /> }
                }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toast_context = use_toast();
    let id = toast.id;

    view! {
        <div class=format!("toast {}", toast.kind.class())>
            <div class="toast-content">
                <span class="toast-icon">{toast.kind.icon()}</span>
                <span class="toast-message">{toast.message}</span>
            </div>
            <button
                class="toast-close"
                on:click=move |_| toast_context.dismiss(id)
                aria-label="Dismiss"
            >
                "×"
            </button>
        </div>
    }
}

/// Hook to access toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
