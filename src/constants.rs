/// DOM contract and web-side tuning constants.
///
/// These keep selector strings and CSS snippets out of the wiring code.
// Expected markup
pub const WRAPPER_ID: &str = "fullpage-wrapper";
pub const PAGES_SELECTOR: &str = "#fullpage-wrapper > div";
pub const CANVAS_ID: &str = "bg-canvas";
pub const GLOW_ID: &str = "cursor-glow";

// Settings overrides are read from `data-*` attributes on the wrapper
pub const SETTINGS_ATTR_PREFIX: &str = "data-";

// Only precise pointers (mouse, trackpad) get parallax and glow
pub const FINE_POINTER_QUERY: &str = "(pointer: fine)";

// Background clear; transparent so the page's own backdrop shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
