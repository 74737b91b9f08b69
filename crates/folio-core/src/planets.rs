use crate::constants::MAX_ORBIT_TILT;
use crate::section::Section;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Orbital parameters for one navigable section's planet.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanetConfig {
    pub model: &'static str,
    pub orbit_radius: f32,
    /// Radians per rendered frame; the sign sets the orbit direction.
    pub angular_speed: f32,
    pub visual_scale: f32,
    pub section: Section,
    pub start_angle: f32,
    pub orbit_tilt: f32,
}

impl PlanetConfig {
    #[inline]
    pub fn label(&self) -> &'static str {
        self.section.label()
    }
}

struct PlanetRow {
    section: Section,
    model: &'static str,
    orbit_radius: f32,
    angular_speed: f32,
    visual_scale: f32,
}

const PLANET_TABLE: [PlanetRow; 4] = [
    PlanetRow {
        section: Section::About,
        model: "/models/planet3.glb",
        orbit_radius: 12.0,
        angular_speed: 0.0006,
        visual_scale: 1.2,
    },
    PlanetRow {
        section: Section::Projects,
        model: "/models/planet4.glb",
        orbit_radius: 16.0,
        angular_speed: 0.0005,
        visual_scale: 1.1,
    },
    PlanetRow {
        section: Section::Experience,
        model: "/models/planet5.glb",
        orbit_radius: 20.0,
        angular_speed: 0.0004,
        visual_scale: 1.3,
    },
    PlanetRow {
        section: Section::Contact,
        model: "/models/planet6.glb",
        orbit_radius: 24.0,
        angular_speed: 0.0003,
        visual_scale: 1.0,
    },
];

/// Build the planet table for one scene mount.
///
/// Start angle and tilt are drawn once here and stay fixed for the session.
pub fn generate_configs<R: Rng + ?Sized>(rng: &mut R) -> Vec<PlanetConfig> {
    PLANET_TABLE
        .iter()
        .map(|row| PlanetConfig {
            model: row.model,
            orbit_radius: row.orbit_radius,
            angular_speed: row.angular_speed,
            visual_scale: row.visual_scale,
            section: row.section,
            start_angle: rng.gen_range(0.0..TAU),
            orbit_tilt: rng.gen_range(-MAX_ORBIT_TILT..MAX_ORBIT_TILT),
        })
        .collect()
}
