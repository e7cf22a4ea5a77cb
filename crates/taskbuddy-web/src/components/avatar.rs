//! Avatar image or initials circle

use leptos::prelude::*;
use taskbuddy_core::Avatar;

#[component]
pub fn AvatarBadge(avatar: Avatar, #[prop(default = "avatar")] class: &'static str) -> impl IntoView {
    match avatar {
        Avatar::Photo(src) => view! { <img class=class src=src alt="Profile" /> }.into_any(),
        Avatar::Initial(text) => view! {
            <div class=format!("{} avatar-initial", class)>
                <span>{text}</span>
            </div>
        }
        .into_any(),
    }
}
