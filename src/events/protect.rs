use crate::core::{is_blocked_shortcut, Modifiers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Suppress the context menu and the usual "view source / dev tools / save"
/// shortcuts.
pub fn wire_page_protection(document: &web::Document) {
    let context_menu = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = document
        .add_event_listener_with_callback("contextmenu", context_menu.as_ref().unchecked_ref());
    context_menu.forget();

    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let mods = Modifiers {
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            shift: ev.shift_key(),
        };
        if is_blocked_shortcut(&ev.key(), mods) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();
}
