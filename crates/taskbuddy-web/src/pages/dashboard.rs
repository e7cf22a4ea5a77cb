//! Dashboard page component

use leptos::prelude::*;

/// Landing page the branding link points at
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="page dashboard-page">
            <h2>"Dashboard"</h2>
            <div class="page-content">
                <p>"Your tasks will show up here."</p>
            </div>
        </div>
    }
}
