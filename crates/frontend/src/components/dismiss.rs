//! Document-level dismissal for the drawer and the user menu.
//!
//! Listeners are attached to the document, not the overlay, so Escape
//! works wherever focus sits. They live only while the overlay is open.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Node};
use yew::prelude::*;

/// Whether `key` (a `KeyboardEvent.key` value) dismisses an overlay.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Emit `on_dismiss` when Escape is pressed anywhere while `active`.
#[hook]
pub fn use_escape_dismiss(active: bool, on_dismiss: Callback<()>) {
    use_effect_with(active, move |active| {
        let listener = if *active {
            document().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let key = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key);
                    if key.as_deref().is_some_and(is_dismiss_key) {
                        on_dismiss.emit(());
                    }
                })
            })
        } else {
            None
        };

        move || drop(listener)
    });
}

/// Emit `on_dismiss` on a click outside the element behind `inside`
/// while `active`.
#[hook]
pub fn use_outside_click(active: bool, inside: NodeRef, on_dismiss: Callback<()>) {
    use_effect_with(active, move |active| {
        let listener = if *active {
            document().map(|document| {
                EventListener::new(&document, "click", move |event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let outside = inside
                        .cast::<Node>()
                        .is_some_and(|container| !container.contains(target.as_ref()));
                    if outside {
                        on_dismiss.emit(());
                    }
                })
            })
        } else {
            None
        };

        move || drop(listener)
    });
}
