//! WASM entry point for the Leptos CSR app

use leptos::mount::mount_to_body;
use leptos::prelude::*;
use taskbuddy_core::{AuthUser, SessionStore};
use taskbuddy_web::App;

fn main() {
    console_error_panic_hook::set_once();

    // Sign-in lives outside the header; start with a guest session
    let store = SessionStore::new();
    store.sign_in(AuthUser::new("guest").with_email("guest@taskbuddy.app"));

    mount_to_body(move || view! { <App store /> });
}
