//! Camera pose and the per-frame director that moves it.
//!
//! The director is stateless beyond the camera pose itself: every frame it
//! looks at the current target and eases toward it, so retargeting mid-flight
//! is always safe.

use crate::constants::*;
use crate::navigation::TargetPlanet;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::home(16.0 / 9.0)
    }
}

impl Camera {
    /// Camera at the home framing, looking at the origin.
    pub fn home(aspect: f32) -> Self {
        Self {
            eye: HOME_POSITION,
            target: HOME_LOOK_AT,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Which branch the director took on a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Approach,
    Return,
    AutoRotate,
    Idle,
}

/// Close-up anchor for a targeted body: pushed out along the horizontal
/// direction from the origin, slightly raised.
pub fn closeup_anchor(target: Vec3) -> Vec3 {
    let angle = target.z.atan2(target.x);
    Vec3::new(
        target.x + angle.cos() * CLOSEUP_DISTANCE,
        target.y + CLOSEUP_HEIGHT,
        target.z + angle.sin() * CLOSEUP_DISTANCE,
    )
}

/// Distance from `eye` to the circle the home framing auto-rotates along.
pub fn distance_to_home_orbit(eye: Vec3) -> f32 {
    let horizontal = (eye.x * eye.x + eye.z * eye.z).sqrt();
    let dr = horizontal - home_orbit_radius();
    let dy = eye.y - HOME_POSITION.y;
    (dr * dr + dy * dy).sqrt()
}

#[derive(Clone, Debug)]
pub struct CameraDirector {
    pub auto_rotate: bool,
    pub target_ease: f32,
    pub home_ease: f32,
}

impl Default for CameraDirector {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            target_ease: TARGET_EASE,
            home_ease: HOME_EASE,
        }
    }
}

impl CameraDirector {
    pub fn update(&self, camera: &mut Camera, target: Option<TargetPlanet>) -> CameraMode {
        if let Some(t) = target {
            let anchor = closeup_anchor(t.position);
            camera.eye = camera.eye.lerp(anchor, self.target_ease);
            camera.target = camera.target.lerp(t.position, self.target_ease);
            return CameraMode::Approach;
        }
        if distance_to_home_orbit(camera.eye) > POSITION_SNAP {
            camera.eye = camera.eye.lerp(HOME_POSITION, self.home_ease);
            camera.target = camera.target.lerp(HOME_LOOK_AT, self.home_ease);
            return CameraMode::Return;
        }
        if !self.auto_rotate {
            return CameraMode::Idle;
        }
        let radius = (camera.eye.x * camera.eye.x + camera.eye.z * camera.eye.z).sqrt();
        let angle = camera.eye.z.atan2(camera.eye.x) - AUTO_ROTATE_STEP;
        camera.eye.x = angle.cos() * radius;
        camera.eye.z = angle.sin() * radius;
        camera.target = HOME_LOOK_AT;
        CameraMode::AutoRotate
    }
}

/// Drag-to-orbit, wheel zoom and pan around the camera's look-at point.
///
/// Rotation is refused while `frozen` is set (an overlay is open); zoom keeps
/// the eye between `min_distance` and `max_distance` from the look-at point.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

impl OrbitControls {
    /// Orbit the eye by a pointer drag of `(dx, dy)` pixels. Returns whether
    /// the camera moved.
    pub fn rotate(&self, camera: &mut Camera, dx: f32, dy: f32, frozen: bool) -> bool {
        if frozen {
            return false;
        }
        let offset = camera.eye - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let azimuth = offset.x.atan2(offset.z) - dx * self.rotate_speed;
        let polar = ((offset.y / radius).clamp(-1.0, 1.0).acos() - dy * self.rotate_speed)
            .clamp(ORBIT_POLAR_MARGIN, std::f32::consts::PI - ORBIT_POLAR_MARGIN);
        camera.eye = camera.target
            + Vec3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            );
        true
    }

    /// Wheel zoom: positive `delta` moves the eye away from the look-at point.
    pub fn zoom(&self, camera: &mut Camera, delta: f32) {
        let offset = camera.eye - camera.target;
        let distance = offset.length();
        let dir = if distance > f32::EPSILON {
            offset / distance
        } else {
            (HOME_POSITION - HOME_LOOK_AT).normalize()
        };
        let next = (distance * (1.0 + delta * self.zoom_speed))
            .clamp(self.min_distance, self.max_distance);
        camera.eye = camera.target + dir * next;
    }

    /// Slide eye and look-at point together across the view plane.
    pub fn pan(&self, camera: &mut Camera, dx: f32, dy: f32) {
        let forward = (camera.target - camera.eye).normalize_or_zero();
        let right = forward.cross(camera.up).normalize_or_zero();
        let up = right.cross(forward);
        let scale = camera.eye.distance(camera.target) * self.pan_speed;
        let shift = (up * dy - right * dx) * scale;
        camera.eye += shift;
        camera.target += shift;
    }
}
