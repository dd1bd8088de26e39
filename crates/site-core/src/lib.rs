pub mod constants;
pub mod effects;
pub mod form;
pub mod interact;
pub mod reveal;
pub mod scene;
pub mod theme;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static WAVE_WGSL: &str = include_str!("../shaders/wave.wgsl");

pub use constants::*;
pub use effects::*;
pub use form::*;
pub use interact::*;
pub use reveal::*;
pub use scene::*;
pub use theme::*;
