//! Scene graph composition: central body, orbiting bodies, orbit paths,
//! lights and the starfield backdrop.

use crate::assets::{ModelCatalog, CENTRAL_MODEL};
use crate::constants::*;
use crate::navigation::{BodyLocator, TargetPlanet};
use crate::orbit::{orbit_world_position, CentralBody, OrbitingBody};
use crate::planets::PlanetConfig;
use crate::section::Section;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Closed polyline tracing one body's orbit.
#[derive(Clone, Debug)]
pub struct OrbitRing {
    pub radius: f32,
    pub tilt: f32,
    pub points: Vec<Vec3>,
}

impl OrbitRing {
    pub fn new(radius: f32, tilt: f32) -> Self {
        let points = (0..=RING_SEGMENTS)
            .map(|i| {
                let angle = (i as f32 / RING_SEGMENTS as f32) * TAU;
                orbit_world_position(radius, angle, tilt)
            })
            .collect();
        Self {
            radius,
            tilt,
            points,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient: f32,
    pub sun: PointLight,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub brightness: f32,
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter `count` stars uniformly over directions in the shell
    /// `[radius, radius + depth]`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32, depth: f32) -> Self {
        let stars = (0..count)
            .map(|_| {
                let z: f32 = rng.gen_range(-1.0..1.0);
                let phi: f32 = rng.gen_range(0.0..TAU);
                let r_xy = (1.0 - z * z).max(0.0).sqrt();
                let dir = Vec3::new(r_xy * phi.cos(), z, r_xy * phi.sin());
                let dist = radius + rng.gen_range(0.0..depth);
                Star {
                    position: dir * dist,
                    brightness: rng.gen_range(STAR_MIN_BRIGHTNESS..1.0),
                }
            })
            .collect();
        Self { stars }
    }
}

pub struct SceneRoot {
    pub central: CentralBody,
    pub bodies: Vec<OrbitingBody>,
    pub rings: Vec<OrbitRing>,
    pub lighting: Lighting,
    pub starfield: Starfield,
}

impl SceneRoot {
    pub fn new<R: Rng + ?Sized>(configs: Vec<PlanetConfig>, catalog: &ModelCatalog, rng: &mut R) -> Self {
        let rings = configs
            .iter()
            .map(|c| OrbitRing::new(c.orbit_radius, c.orbit_tilt))
            .collect();
        let bodies = configs
            .into_iter()
            .map(|c| {
                let appearance = catalog.load_or_fallback(c.model);
                OrbitingBody::new(c, appearance)
            })
            .collect::<Vec<_>>();
        log::info!("[scene] mounted {} orbiting bodies", bodies.len());
        Self {
            central: CentralBody::new(catalog.load_or_fallback(CENTRAL_MODEL)),
            bodies,
            rings,
            lighting: Lighting {
                ambient: AMBIENT_INTENSITY,
                sun: PointLight {
                    position: Vec3::ZERO,
                    color: CENTRAL_LIGHT_COLOR,
                    intensity: CENTRAL_LIGHT_INTENSITY,
                    range: CENTRAL_LIGHT_RANGE,
                },
            },
            starfield: Starfield::generate(rng, STAR_COUNT, STAR_RADIUS, STAR_DEPTH),
        }
    }

    /// Advance every body by one rendered frame.
    pub fn tick(&mut self, frozen: bool) {
        self.central.tick(frozen);
        for body in &mut self.bodies {
            body.tick(frozen);
        }
    }

    pub fn body_for(&self, section: Section) -> Option<&OrbitingBody> {
        self.bodies.iter().find(|b| b.config.section == section)
    }

    /// Point lights carried by each published body.
    pub fn body_lights(&self) -> impl Iterator<Item = PointLight> + '_ {
        self.bodies.iter().filter_map(|b| {
            b.last_world_position().map(|position| PointLight {
                position,
                color: [1.0, 1.0, 1.0],
                intensity: BODY_LIGHT_INTENSITY,
                range: BODY_LIGHT_RANGE,
            })
        })
    }
}

impl BodyLocator for SceneRoot {
    fn locate(&self, section: Section) -> Option<TargetPlanet> {
        self.bodies.as_slice().locate(section)
    }
}

impl BodyLocator for [OrbitingBody] {
    fn locate(&self, section: Section) -> Option<TargetPlanet> {
        let body = self.iter().find(|b| b.config.section == section)?;
        body.last_world_position().map(|position| TargetPlanet {
            position,
            radius: body.config.visual_scale,
        })
    }
}
