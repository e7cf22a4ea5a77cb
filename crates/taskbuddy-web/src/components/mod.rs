//! Leptos UI components

mod avatar;
mod header;
mod icons;
mod toast;

pub use avatar::AvatarBadge;
pub use header::HeaderView;
pub use icons::{ChevronDownIcon, DocumentIcon, LogoutIcon, UserIcon};
pub use toast::{use_toast, Toast, ToastContainer, ToastContext, ToastKind, ToastProvider};
