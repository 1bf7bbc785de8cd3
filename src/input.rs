use glam::Vec2;

/// Latest pointer sample, written by the pointer handler and read once per
/// frame by the animator.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    /// Position relative to the viewport centre, CSS px.
    pub offset: Vec2,
}

/// Touch swipe tracking between `touchstart` and `touchend`.
#[derive(Default, Clone, Copy, Debug)]
pub struct TouchState {
    pub start_y: f64,
}
