//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};
use std::sync::Arc;
use taskbuddy_core::{HeaderConfig, SessionStore};

use crate::components::{HeaderView, ToastProvider};
use crate::context::SessionContext;
use crate::pages::{DashboardPage, ProfilePage};

/// Header configuration compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../header.json");

fn header_config() -> HeaderConfig {
    HeaderConfig::from_json(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        leptos::logging::warn!("Invalid header.json, using defaults: {:#}", e);
        HeaderConfig::default()
    })
}

/// Main App component
#[component]
pub fn App(store: SessionStore) -> impl IntoView {
    provide_context(SessionContext::new(store));
    provide_context(Arc::new(header_config()));

    view! {
        <ToastProvider>
            <Router>
                <div class="app">
                    <HeaderView />
                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route
                                path=path!("/")
                                view=|| view! { <Redirect path="/dashboard" /> }
                            />
                            <Route path=path!("/dashboard") view=DashboardPage />
                            <Route path=path!("/profile") view=ProfilePage />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ToastProvider>
    }
}
