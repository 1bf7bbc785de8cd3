// Background animator state: particle field, camera and the per-frame
// smoothing that drives idle drift, pointer parallax and the page theme
// cross-fade.

use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::Rng;

use super::camera::Camera;
use super::constants::{
    IDLE_SPIN_X, IDLE_SPIN_Y, PARALLAX_SCALE, PARALLAX_SMOOTHING, THEME_SMOOTHING,
};
use super::particles::ParticleField;
use super::settings::Settings;
use super::theme::PageTheme;
use super::viewport::Viewport;

pub struct Starfield {
    field: ParticleField,
    theme: PageTheme,
    camera: Camera,
    // x = pitch, y = yaw (radians)
    idle: Vec2,
    parallax: Vec2,
    color: Vec3,
    pub point_size: f32,
    pub opacity: f32,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(
        settings: &Settings,
        theme: PageTheme,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Self {
        let field = ParticleField::generate(settings.particle_count, settings.particle_spread, rng);
        let start = theme.entry(0);
        let mut camera = Camera::new(viewport.aspect());
        camera.set_depth(start.depth);
        Self {
            field,
            theme,
            camera,
            idle: Vec2::ZERO,
            parallax: Vec2::ZERO,
            color: start.color,
            point_size: settings.particle_size,
            opacity: settings.particle_opacity,
        }
    }

    /// Advance one frame.
    ///
    /// `elapsed_sec` is time since the animation started, `pointer_offset`
    /// the latest pointer position relative to the viewport centre (px) and
    /// `page` the navigator's current index.
    pub fn step(&mut self, elapsed_sec: f32, pointer_offset: Vec2, page: usize) {
        self.idle = Vec2::new(elapsed_sec * IDLE_SPIN_X, elapsed_sec * IDLE_SPIN_Y);

        // horizontal pointer offset yaws the field, vertical offset pitches it
        let target = Vec2::new(pointer_offset.y, pointer_offset.x) * PARALLAX_SCALE;
        self.parallax += (target - self.parallax) * PARALLAX_SMOOTHING;

        let theme = self.theme.entry(page);
        self.color = self.color.lerp(theme.color, THEME_SMOOTHING);
        let z = self.camera.depth();
        self.camera.set_depth(z + (theme.depth - z) * THEME_SMOOTHING);
    }

    /// Viewport changed: only the projection follows, the scene is untouched.
    pub fn resize(&mut self, viewport: &Viewport) {
        self.camera.set_aspect(viewport.aspect());
    }

    /// Whole-field rotation, x = pitch, y = yaw.
    #[inline]
    pub fn rotation(&self) -> Vec2 {
        self.idle + self.parallax
    }

    #[inline]
    pub fn parallax(&self) -> Vec2 {
        self.parallax
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation();
        Mat4::from_euler(EulerRot::XYZ, r.x, r.y, 0.0)
    }

    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn theme(&self) -> &PageTheme {
        &self.theme
    }
}
