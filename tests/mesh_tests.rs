// Host-side tests for CPU-side mesh generation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod mesh {
    include!("../src/render/mesh.rs");
}

use folio_core::{OrbitRing, Starfield, RING_SEGMENTS};
use mesh::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn uv_sphere_is_unit_and_indexed_in_range() {
    let m = uv_sphere(8, 12);
    assert_eq!(m.vertices.len(), 9 * 13);
    assert_eq!(m.indices.len(), 8 * 12 * 6);
    for v in &m.vertices {
        let len = glam::Vec3::from_array(v.position).length();
        assert!((len - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
    }
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn octahedron_has_eight_faces() {
    let m = octahedron();
    assert_eq!(m.vertices.len(), 6);
    assert_eq!(m.indices.len(), 24);
    assert!(m.indices.iter().all(|&i| i < 6));
}

#[test]
fn ring_becomes_line_list_pairs() {
    let ring = OrbitRing::new(12.0, 0.1);
    let lines = polyline_segments(&ring.points, [1.0, 1.0, 1.0, 0.4]);
    assert_eq!(lines.len(), RING_SEGMENTS * 2);
    assert_eq!(lines[1].position, lines[2].position);
    assert!(lines.iter().all(|v| v.color[3] == 0.4));
}

#[test]
fn star_vertices_mirror_the_field() {
    let mut rng = StdRng::seed_from_u64(9);
    let field = Starfield::generate(&mut rng, 100, 150.0, 50.0);
    let verts = star_vertices(&field);
    assert_eq!(verts.len(), 100);
    assert_eq!(verts[0].brightness, field.stars[0].brightness);
}
