pub mod camera;
pub mod constants;
pub mod gesture;
pub mod pager;
pub mod particles;
pub mod settings;
pub mod shortcuts;
pub mod starfield;
pub mod theme;
pub mod viewport;

pub use camera::*;
pub use constants::*;
pub use gesture::*;
pub use pager::*;
pub use particles::*;
pub use settings::*;
pub use shortcuts::*;
pub use starfield::*;
pub use theme::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
