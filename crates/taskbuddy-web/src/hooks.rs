//! DOM hooks

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};

/// Report every window `mousedown` with whether it landed inside `root`.
///
/// The listener lives as long as the calling component; it is removed on
/// cleanup. Events are ignored while `root` is not mounted.
pub fn use_pointer_down(
    root: NodeRef<Div>,
    on_pointer_down: impl Fn(bool) + Send + Sync + 'static,
) {
    let handle = window_event_listener(ev::mousedown, move |event: MouseEvent| {
        let Some(root) = root.get_untracked() else {
            return;
        };

        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        on_pointer_down(root.contains(target.as_ref()));
    });

    on_cleanup(move || handle.remove());
}
