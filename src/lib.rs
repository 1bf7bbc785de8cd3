#![cfg(target_arch = "wasm32")]
use crate::core::{PageTheme, Starfield};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod navigator;
mod render;

use constants::{CANVAS_ID, GLOW_ID, PAGES_SELECTOR, WRAPPER_ID};
use navigator::PageNavigator;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-pager starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page protection does not depend on any markup.
    events::wire_page_protection(&document);

    let wrapper = dom::html_element_by_id(&document, WRAPPER_ID)?;
    let settings = dom::read_settings(&wrapper);
    let pages = dom::query_html_elements(&document, PAGES_SELECTOR)?;
    if pages.is_empty() {
        anyhow::bail!("#{} has no pages", WRAPPER_ID);
    }
    log::info!("[pager] {} pages", pages.len());

    // ---------------- Page navigator ----------------
    let nav = Rc::new(PageNavigator::new(wrapper, pages, settings.lock_ms));
    events::wire_navigation(&window, nav.clone(), settings.swipe_threshold_px);
    events::wire_teardown(&window, nav.clone());

    // ---------------- Pointer glow + parallax input ----------------
    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let glow = match dom::html_element_by_id(&document, GLOW_ID) {
        Ok(el) => Some(el),
        Err(e) => {
            log::warn!("[pointer] {}, glow disabled", e);
            None
        }
    };
    events::wire_pointer(
        &window,
        events::PointerWiring {
            document: document.clone(),
            pointer: pointer.clone(),
            glow,
            max_pixel_ratio: settings.max_pixel_ratio,
        },
    );

    // ---------------- Background animator ----------------
    let canvas = dom::html_element_by_id(&document, CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let vp = dom::viewport(&window, settings.max_pixel_ratio);
    dom::sync_canvas_backing_size(&canvas, &vp);

    let mut rng = StdRng::from_entropy();
    let starfield = Starfield::new(&settings, PageTheme::default(), &vp, &mut rng);
    if starfield.theme().len() < nav.pager().borrow().page_count() {
        log::info!(
            "[theme] {} themes for {} pages, extra pages reuse the last theme",
            starfield.theme().len(),
            nav.pager().borrow().page_count()
        );
    }

    let gpu = frame::init_gpu(&canvas, starfield.field().positions()).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        starfield,
        pager: nav.pager(),
        pointer,
        canvas,
        gpu,
        max_pixel_ratio: settings.max_pixel_ratio,
        started: Instant::now(),
    }));
    frame::wire_resize(frame_ctx.clone());
    frame::start_loop(frame_ctx);

    Ok(())
}
