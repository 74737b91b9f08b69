//! Procedural stand-ins for the planet model references.
//!
//! Each model reference resolves to an [`Appearance`] the renderer can draw
//! without any file I/O. Unknown references degrade to a visible fallback
//! primitive instead of failing the frame loop.

use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshKind {
    Sphere,
    /// Low-poly placeholder used when a model cannot be resolved.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub base_rgb: [f32; 3],
    pub band_rgb: [f32; 3],
    /// Number of latitude bands across the sphere; 0 disables banding.
    pub band_frequency: f32,
    pub emissive: f32,
    pub mesh: MeshKind,
}

impl Appearance {
    pub const fn fallback() -> Self {
        Self {
            base_rgb: [0.55, 0.55, 0.58],
            band_rgb: [0.55, 0.55, 0.58],
            band_frequency: 0.0,
            emissive: 0.0,
            mesh: MeshKind::Fallback,
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.mesh == MeshKind::Fallback
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("unknown model reference `{0}`")]
    UnknownModel(String),
}

pub const CENTRAL_MODEL: &str = "/models/planet1.glb";

const fn sphere(base_rgb: [f32; 3], band_rgb: [f32; 3], band_frequency: f32, emissive: f32) -> Appearance {
    Appearance {
        base_rgb,
        band_rgb,
        band_frequency,
        emissive,
        mesh: MeshKind::Sphere,
    }
}

pub struct ModelCatalog {
    entries: FnvHashMap<&'static str, Appearance>,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModelCatalog {
    pub fn empty() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }

    /// Catalog covering every model the planet table references.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(CENTRAL_MODEL, sphere([1.0, 0.55, 0.2], [1.0, 0.35, 0.1], 5.0, 1.0));
        catalog.insert("/models/planet2.glb", sphere([0.85, 0.75, 0.55], [0.7, 0.6, 0.4], 3.0, 0.0));
        catalog.insert("/models/planet3.glb", sphere([0.45, 0.75, 0.95], [0.85, 0.95, 1.0], 4.0, 0.0));
        catalog.insert("/models/planet4.glb", sphere([0.3, 0.75, 0.4], [0.15, 0.45, 0.25], 6.0, 0.0));
        catalog.insert("/models/planet5.glb", sphere([0.95, 0.6, 0.3], [0.75, 0.35, 0.2], 8.0, 0.0));
        catalog.insert("/models/planet6.glb", sphere([0.65, 0.5, 0.9], [0.4, 0.3, 0.7], 5.0, 0.0));
        catalog
    }

    pub fn insert(&mut self, reference: &'static str, appearance: Appearance) {
        self.entries.insert(reference, appearance);
    }

    pub fn load(&self, reference: &str) -> Result<Appearance, AssetError> {
        self.entries
            .get(reference)
            .copied()
            .ok_or_else(|| AssetError::UnknownModel(reference.to_string()))
    }

    pub fn load_or_fallback(&self, reference: &str) -> Appearance {
        match self.load(reference) {
            Ok(a) => a,
            Err(e) => {
                log::warn!("[assets] {}; using fallback primitive", e);
                Appearance::fallback()
            }
        }
    }
}
