//! Profile page component

use crate::components::AvatarBadge;
use crate::context::use_session;
use leptos::prelude::*;
use taskbuddy_core::Identity;

/// Shows who is signed in, using the same name and avatar rules as the header
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let profile = session.profile();

    view! {
        <div class="page profile-page">
            <h2>"Profile"</h2>
            <div class="page-content">
                {move || match user.get() {
                    Some(user) => {
                        let identity = Identity::resolve(&user, profile.get().as_ref());
                        let email = user.email.unwrap_or_default();
                        view! {
                            <div class="profile-card">
                                <AvatarBadge avatar=identity.avatar class="avatar avatar-large" />
                                <div class="profile-details">
                                    <p class="profile-name">{identity.display_name}</p>
                                    <p class="profile-email">{email}</p>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p class="hint">"You are signed out."</p> }.into_any(),
                }}
            </div>
        </div>
    }
}
