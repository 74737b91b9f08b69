use glam::Vec3;
use std::time::Duration;

// Shared scene, camera and timing constants for the solar-system front-end.

// Orbiting bodies
pub const BODY_SELF_SPIN_PER_FRAME: f32 = 0.002; // independent of orbital speed
pub const MAX_ORBIT_TILT: f32 = 0.15; // tilt drawn from [-MAX, MAX)
pub const BODY_LIGHT_INTENSITY: f32 = 0.3;
pub const BODY_LIGHT_RANGE: f32 = 8.0;

// Central body
pub const CENTRAL_SCALE: f32 = 3.0;
pub const CENTRAL_SPIN_PER_FRAME: f32 = 0.001;
pub const CENTRAL_LIGHT_COLOR: [f32; 3] = [1.0, 0.42, 0.21]; // #FF6B35
pub const CENTRAL_LIGHT_INTENSITY: f32 = 2.0;
pub const CENTRAL_LIGHT_RANGE: f32 = 60.0;

pub const AMBIENT_INTENSITY: f32 = 0.3;

// Orbit path indicators
pub const RING_SEGMENTS: usize = 64;

// Starfield shell
pub const STAR_COUNT: usize = 8000;
pub const STAR_RADIUS: f32 = 150.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_MIN_BRIGHTNESS: f32 = 0.4;

// Camera framing
pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 15.0, 20.0);
pub const HOME_LOOK_AT: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Camera director
pub const CLOSEUP_DISTANCE: f32 = 2.0; // horizontal, along origin -> target
pub const CLOSEUP_HEIGHT: f32 = 0.4;
pub const TARGET_EASE: f32 = 0.03; // per-frame smoothing toward a targeted body
pub const HOME_EASE: f32 = 0.04; // per-frame smoothing on the way home
pub const POSITION_SNAP: f32 = 0.1;
pub const AUTO_ROTATE_STEP: f32 = 0.0002; // azimuth decrement per frame

// User orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 8.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per pixel dragged
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // per wheel delta unit
pub const ORBIT_PAN_SPEED: f32 = 0.001; // world units per pixel per unit of distance
pub const ORBIT_POLAR_MARGIN: f32 = 0.01; // keeps the eye off the poles

// Navigation
pub const OVERLAY_OPEN_DELAY: Duration = Duration::from_millis(1500);

// Overlay animations
pub const TYPEWRITER_STEP: Duration = Duration::from_millis(50);
pub const SCRAMBLE_STEP: Duration = Duration::from_millis(35);
pub const SCRAMBLE_FRAMES_PER_CHAR: usize = 6;
pub const SCRAMBLE_LOOKAHEAD: usize = 4; // unresolved glyphs shown past the resolved prefix
pub const SCRAMBLE_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%&";
pub const CONTACT_HEADLINE_DELAY: Duration = Duration::from_millis(200);
pub const REVEAL_STAGGER: Duration = Duration::from_millis(80);

#[inline]
pub fn home_orbit_radius() -> f32 {
    (HOME_POSITION.x * HOME_POSITION.x + HOME_POSITION.z * HOME_POSITION.z).sqrt()
}
