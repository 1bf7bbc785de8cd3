use crate::core::{wheel_delta_px, Gesture};
use crate::input::TouchState;
use crate::navigator::PageNavigator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel and touch paging. `swipe_threshold_px` filters short swipes.
pub fn wire_navigation(window: &web::Window, nav: Rc<PageNavigator>, swipe_threshold_px: f64) {
    wire_wheel(window, nav.clone());
    wire_touch(window, nav, swipe_threshold_px);
}

fn wire_wheel(window: &web::Window, nav: Rc<PageNavigator>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        if nav.is_transitioning() {
            return;
        }
        let viewport_h = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let delta = wheel_delta_px(ev.delta_y(), ev.delta_mode(), viewport_h);
        if let Some(gesture) = Gesture::from_wheel(delta) {
            nav.handle_gesture(gesture);
        }
    }) as Box<dyn FnMut(_)>);
    // No preventDefault: inner page scrolling must keep working.
    _ = window.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touch(window: &web::Window, nav: Rc<PageNavigator>, swipe_threshold_px: f64) {
    let touch = Rc::new(RefCell::new(TouchState::default()));
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);

    let touch_start = touch.clone();
    let start = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().item(0) {
            touch_start.borrow_mut().start_y = t.client_y() as f64;
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        start.as_ref().unchecked_ref(),
        &opts,
    );
    start.forget();

    let end = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if nav.is_transitioning() {
            return;
        }
        let Some(t) = ev.changed_touches().item(0) else {
            return;
        };
        let start_y = touch.borrow().start_y;
        if let Some(gesture) = Gesture::from_touch(start_y, t.client_y() as f64, swipe_threshold_px)
        {
            nav.handle_gesture(gesture);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        end.as_ref().unchecked_ref(),
        &opts,
    );
    end.forget();
}

/// Cancel the navigator's pending timer when the page session ends.
pub fn wire_teardown(window: &web::Window, nav: Rc<PageNavigator>) {
    let closure = Closure::wrap(Box::new(move || {
        nav.cancel_pending();
        log::debug!("[pager] teardown");
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
