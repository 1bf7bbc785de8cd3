// Shared paging/animation tuning constants. Every value here is a default
// that `Settings` may override at runtime.

// Paging
pub const TRANSITION_VISUAL_MS: u32 = 800; // CSS transform transition
pub const TRANSITION_LOCK_MS: u32 = 1000; // lock held a bit longer than the visual transition
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // shorter touch swipes are noise
pub const BOTTOM_SLACK_PX: f64 = 1.0; // sub-pixel tolerance when testing "scrolled to bottom"
pub const PAGE_HEIGHT_VH: f32 = 100.0;

// Wheel delta normalisation (WheelEvent.deltaMode 1 = lines, 2 = pages)
pub const WHEEL_LINE_PX: f64 = 16.0;

// Particle field
pub const PARTICLE_COUNT: usize = 1500;
pub const PARTICLE_SPREAD: f32 = 50.0; // half extent of the cube volume
pub const PARTICLE_SIZE: f32 = 0.15; // world units
pub const PARTICLE_OPACITY: f32 = 0.6;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 30.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Idle drift (radians per second)
pub const IDLE_SPIN_Y: f32 = 0.05;
pub const IDLE_SPIN_X: f32 = 0.02;

// Parallax
pub const PARALLAX_SCALE: f32 = 0.001; // radians per px of pointer offset
pub const PARALLAX_SMOOTHING: f32 = 0.05; // per-frame low-pass factor

// Theme cross-fade
pub const THEME_SMOOTHING: f32 = 0.03; // per-frame low-pass factor

// Default per-page palette and camera depths
pub const DEFAULT_PAGE_COLORS: [u32; 3] = [
    0xffffff, // white
    0x00d2ff, // cyan
    0x9d4edd, // violet
];
pub const DEFAULT_PAGE_DEPTHS: [f32; 3] = [30.0, 15.0, 45.0];
