// Host-side tests for front-end constants and their relationship to the core.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn picking_is_at_least_as_large_as_the_drawn_body() {
    assert!(PICK_RADIUS_SCALE >= 1.0);
    assert!(HOVER_BRIGHTEN > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn colours_are_normalised() {
    assert!(ORBIT_PATH_RGBA.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(CLEAR_RGB.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(ORBIT_PATH_RGBA[3] < 1.0, "orbit paths are translucent");
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [CANVAS_ID, NAV_ID, OVERLAY_ROOT_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sphere_mesh_fits_u16_indices() {
    assert!((SPHERE_STACKS + 1) * (SPHERE_SLICES + 1) <= u16::MAX as u32);
}
