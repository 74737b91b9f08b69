// Front-end tuning constants: DOM ids, picking and draw colours.
//
// Scene, camera and timing constants live in `folio_core::constants`.
// DOM anchors expected in index.html
pub const CANVAS_ID: &str = "app-canvas";
pub const NAV_ID: &str = "nav";
pub const OVERLAY_ROOT_ID: &str = "overlay-root";

// CSS classes toggled by the front-end
pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEALED_CLASS: &str = "revealed";

// Picking: hit sphere is a little larger than the drawn body
pub const PICK_RADIUS_SCALE: f32 = 1.2;

// Color adjustments
pub const HOVER_BRIGHTEN: f32 = 1.4;
pub const ORBIT_PATH_RGBA: [f32; 4] = [1.0, 1.0, 1.0, 0.4];
pub const CLEAR_RGB: [f64; 3] = [0.0, 0.0, 0.02];

// Sphere tessellation
pub const SPHERE_STACKS: u32 = 24;
pub const SPHERE_SLICES: u32 = 32;
