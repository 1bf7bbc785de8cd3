use crate::dom;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub pointer: Rc<RefCell<PointerState>>,
    pub glow: Option<web::HtmlElement>,
    pub max_pixel_ratio: f64,
}

/// Parallax target and cursor glow. Only wired for fine pointers; coarse
/// touch devices keep a centred, static background.
pub fn wire_pointer(window: &web::Window, w: PointerWiring) {
    if !dom::supports_fine_pointer(window) {
        log::info!("[pointer] coarse pointer, parallax and glow disabled");
        return;
    }
    wire_mousemove(&w);
    wire_mouseleave(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
        if let Some(wnd) = web::window() {
            let vp = dom::viewport(&wnd, w.max_pixel_ratio);
            w.pointer.borrow_mut().offset = vp.offset_from_center(x, y);
        }
        if let Some(glow) = &w.glow {
            let style = glow.style();
            _ = style.set_property("opacity", "1");
            _ = style.set_property("left", &format!("{}px", x));
            _ = style.set_property("top", &format!("{}px", y));
        }
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &PointerWiring) {
    let Some(root) = w.document.document_element() else {
        return;
    };
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(glow) = &w.glow {
            _ = glow.style().set_property("opacity", "0");
        }
    }) as Box<dyn FnMut()>);
    _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
