pub mod assets;
pub mod camera;
pub mod constants;
pub mod content;
pub mod navbar;
pub mod navigation;
pub mod orbit;
pub mod overlay;
pub mod planets;
pub mod scene;
pub mod section;

pub use assets::*;
pub use camera::*;
pub use constants::*;
pub use navbar::*;
pub use navigation::*;
pub use orbit::*;
pub use overlay::*;
pub use planets::*;
pub use scene::*;
pub use section::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
