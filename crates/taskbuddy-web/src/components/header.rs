//! Site header with branding and the user menu

use crate::components::avatar::AvatarBadge;
use crate::components::icons::{ChevronDownIcon, DocumentIcon, LogoutIcon, UserIcon};
use crate::components::toast::use_toast;
use crate::context::use_session;
use crate::diagnostics::ConsoleDiagnostics;
use crate::hooks::use_pointer_down;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use std::sync::Arc;
use taskbuddy_core::{HeaderActions, HeaderConfig, HeaderModel, MenuEvent, MenuState};

/// Header with logo link and, for a signed-in user, the avatar dropdown.
///
/// Reads [`SessionContext`](crate::context::SessionContext) and the toast
/// context; uses `Arc<HeaderConfig>` from context when one is provided.
#[component]
pub fn HeaderView() -> impl IntoView {
    let config = use_context::<Arc<HeaderConfig>>().unwrap_or_default();
    let session = use_session();
    let user = session.user();
    let profile = session.profile();

    let menu = RwSignal::new(MenuState::new());
    let dispatch = move |event: MenuEvent| {
        let mut next = menu.get_untracked();
        next.apply(event);
        if next != menu.get_untracked() {
            menu.set(next);
        }
    };

    let root = NodeRef::<Div>::new();
    use_pointer_down(root, move |inside| {
        dispatch(MenuEvent::PointerDown { inside })
    });

    let navigate = use_navigate();
    let actions = HeaderActions::new(
        session,
        move |route: &str| navigate(route, Default::default()),
        use_toast(),
    )
    .with_diagnostics(ConsoleDiagnostics)
    .with_config(Arc::clone(&config));
    let actions = StoredValue::new_local(actions);

    let view_profile = move || actions.with_value(|actions| dispatch(actions.view_profile()));
    let logout = move || {
        let actions = actions.get_value();
        spawn_local(async move {
            dispatch(actions.logout().await);
        });
    };

    let model = move || {
        HeaderModel::derive(user.get().as_ref(), profile.get().as_ref(), menu.get())
    };

    view! {
        <header class="header">
            <div class="header-inner">
                <A href=config.home_route.clone() attr:class="brand">
                    <DocumentIcon />
                    <h1 class="brand-title">{config.brand_title.clone()}</h1>
                </A>

                <div class="header-actions">
                    {move || {
                        model()
                            .trigger
                            .map(|trigger| {
                                view! {
                                    <div class="user-menu" node_ref=root>
                                        <button
                                            class="user-menu-trigger"
                                            aria-haspopup="menu"
                                            aria-expanded=trigger.expanded.to_string()
                                            on:click=move |_| dispatch(MenuEvent::TriggerClicked)
                                        >
                                            <AvatarBadge avatar=trigger.identity.avatar />
                                            <span class="user-menu-name">
                                                {trigger.identity.display_name}
                                            </span>
                                            <ChevronDownIcon class="user-menu-chevron" />
                                        </button>
                                        {trigger
                                            .expanded
                                            .then(|| {
                                                view! {
                                                    <MenuPanel
                                                        on_view_profile=view_profile
                                                        on_logout=logout
                                                    />
                                                }
                                            })}
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </header>
    }
}

/// Dropdown action list
#[component]
fn MenuPanel(
    on_view_profile: impl Fn() + Copy + Send + Sync + 'static,
    on_logout: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="user-menu-panel" role="menu">
            <button class="user-menu-item" role="menuitem" on:click=move |_| on_view_profile()>
                <UserIcon class="user-menu-icon" />
                <span>"View Profile"</span>
            </button>
            <button class="user-menu-item" role="menuitem" on:click=move |_| on_logout()>
                <LogoutIcon class="user-menu-icon" />
                <span>"Logout"</span>
            </button>
        </div>
    }
}
