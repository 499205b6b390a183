pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod motion;
pub mod piano;
pub mod placement;
pub mod scene;
pub mod state;

/// WGSL source for the scene pipeline.
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use error::*;
pub use motion::*;
pub use piano::*;
pub use scene::*;
pub use state::*;
