use crate::constants::{FINE_POINTER_QUERY, SETTINGS_ATTR_PREFIX};
use crate::core::{ScrollMetrics, Settings, Viewport, SETTING_KEYS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// All elements matching `selector`, in document order.
pub fn query_html_elements(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list
            .item(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        {
            out.push(el);
        }
    }
    Ok(out)
}

/// Live scroll metrics of a page element.
#[inline]
pub fn scroll_metrics(el: &web::Element) -> ScrollMetrics {
    ScrollMetrics::new(
        el.scroll_height() as f64,
        el.client_height() as f64,
        el.scroll_top() as f64,
    )
}

pub fn viewport(window: &web::Window, max_pixel_ratio: f64) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(w, h, window.device_pixel_ratio(), max_pixel_ratio)
}

/// Size the canvas like a full-viewport renderer: CSS size follows the
/// viewport, the backing store uses the capped pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, vp: &Viewport) {
    let (w_px, h_px) = vp.backing_size();
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", vp.width));
    _ = style.set_property("height", &format!("{}px", vp.height));
}

pub fn supports_fine_pointer(window: &web::Window) -> bool {
    window
        .match_media(FINE_POINTER_QUERY)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Read `data-*` overrides from `el`; rejected values are logged and skipped.
pub fn read_settings(el: &web::Element) -> Settings {
    let attrs: Vec<(&str, String)> = SETTING_KEYS
        .iter()
        .filter_map(|key| {
            el.get_attribute(&format!("{}{}", SETTINGS_ATTR_PREFIX, key))
                .map(|v| (*key, v))
        })
        .collect();
    let (settings, errors) = Settings::from_pairs(attrs.iter().map(|(k, v)| (*k, v.as_str())));
    for e in &errors {
        log::warn!("[settings] {}", e);
    }
    if !attrs.is_empty() {
        log::info!("[settings] {:?}", settings);
    }
    settings
}
