use glam::Vec2;

/// Browser viewport in CSS px plus the (capped) device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    /// `device_pixel_ratio` is clamped into `[1, max_pixel_ratio]` so high
    /// density screens do not multiply the GPU fill cost unboundedly.
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64, max_pixel_ratio: f64) -> Self {
        let max = max_pixel_ratio.max(1.0);
        let pixel_ratio = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.clamp(1.0, max)
        } else {
            1.0
        };
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        (self.width / self.height.max(1.0)) as f32
    }

    /// Backing-store size of the canvas in physical pixels, never 0.
    #[inline]
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.pixel_ratio).round() as u32;
        let h = (self.height * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width * 0.5) as f32, (self.height * 0.5) as f32)
    }

    /// Pointer position relative to the viewport centre, in CSS px.
    #[inline]
    pub fn offset_from_center(&self, client_x: f64, client_y: f64) -> Vec2 {
        Vec2::new(client_x as f32, client_y as f32) - self.center()
    }
}
