use crate::assets::Appearance;
use crate::constants::{BODY_SELF_SPIN_PER_FRAME, CENTRAL_SCALE, CENTRAL_SPIN_PER_FRAME};
use crate::planets::PlanetConfig;
use glam::{Quat, Vec3};

/// Per-body animation state. Only the owning [`OrbitingBody`] writes it.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitingBodyState {
    pub current_orbit_angle: f32,
    pub current_self_rotation: f32,
    /// Republished every tick; `None` until the first tick after mount.
    pub last_world_position: Option<Vec3>,
    pub initialized: bool,
}

impl OrbitingBodyState {
    pub fn new(start_angle: f32) -> Self {
        Self {
            current_orbit_angle: start_angle,
            current_self_rotation: 0.0,
            last_world_position: None,
            initialized: true,
        }
    }
}

/// World position of a body on a tilted circular orbit.
///
/// `(radius, 0, 0)` is rotated about Y by `angle`, then about X by `tilt`.
#[inline]
pub fn orbit_world_position(radius: f32, angle: f32, tilt: f32) -> Vec3 {
    Quat::from_rotation_x(tilt) * (Quat::from_rotation_y(angle) * Vec3::new(radius, 0.0, 0.0))
}

#[derive(Clone, Debug)]
pub struct OrbitingBody {
    pub config: PlanetConfig,
    pub appearance: Appearance,
    state: OrbitingBodyState,
}

impl OrbitingBody {
    pub fn new(config: PlanetConfig, appearance: Appearance) -> Self {
        let state = OrbitingBodyState::new(config.start_angle);
        Self {
            config,
            appearance,
            state,
        }
    }

    #[inline]
    pub fn state(&self) -> &OrbitingBodyState {
        &self.state
    }

    #[inline]
    pub fn last_world_position(&self) -> Option<Vec3> {
        self.state.last_world_position
    }

    /// Advance one rendered frame.
    ///
    /// Angles hold still while `frozen`, but the world position is always
    /// republished so consumers keep a valid last-known location.
    pub fn tick(&mut self, frozen: bool) {
        if !frozen {
            self.state.current_orbit_angle += self.config.angular_speed;
            self.state.current_self_rotation += BODY_SELF_SPIN_PER_FRAME;
        }
        self.state.last_world_position = Some(orbit_world_position(
            self.config.orbit_radius,
            self.state.current_orbit_angle,
            self.config.orbit_tilt,
        ));
    }
}

/// The body at the scene origin; spins in place, never orbits.
#[derive(Clone, Debug)]
pub struct CentralBody {
    pub appearance: Appearance,
    pub scale: f32,
    pub self_rotation: f32,
}

impl CentralBody {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            scale: CENTRAL_SCALE,
            self_rotation: 0.0,
        }
    }

    pub fn tick(&mut self, frozen: bool) {
        if !frozen {
            self.self_rotation += CENTRAL_SPIN_PER_FRAME;
        }
    }
}
