// Planet table generation, asset fallback and scene composition.

use folio_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn planet_table_covers_every_navigable_section_once() {
    let configs = generate_configs(&mut rng());
    assert_eq!(configs.len(), 4);
    let sections: Vec<_> = configs.iter().map(|c| c.section).collect();
    assert_eq!(
        sections,
        vec![Section::About, Section::Projects, Section::Experience, Section::Contact]
    );
    let radii: Vec<_> = configs.iter().map(|c| c.orbit_radius).collect();
    assert_eq!(radii, vec![12.0, 16.0, 20.0, 24.0]);
    assert_eq!(configs[2].model, "/models/planet5.glb");
    assert_eq!(configs[2].label(), "Experience");
}

#[test]
fn random_draws_stay_in_range() {
    let mut r = rng();
    for _ in 0..200 {
        for c in generate_configs(&mut r) {
            assert!((0.0..std::f32::consts::TAU).contains(&c.start_angle));
            assert!(c.orbit_tilt >= -MAX_ORBIT_TILT && c.orbit_tilt < MAX_ORBIT_TILT);
        }
    }
}

#[test]
fn same_seed_gives_same_layout() {
    assert_eq!(generate_configs(&mut rng()), generate_configs(&mut rng()));
}

#[test]
fn builtin_catalog_resolves_all_referenced_models() {
    let catalog = ModelCatalog::builtin();
    assert!(catalog.load(CENTRAL_MODEL).is_ok());
    for c in generate_configs(&mut rng()) {
        let a = catalog.load(c.model).expect("model present");
        assert!(!a.is_fallback());
    }
}

#[test]
fn unknown_model_falls_back_to_primitive() {
    let catalog = ModelCatalog::builtin();
    assert_eq!(
        catalog.load("/models/missing.glb"),
        Err(AssetError::UnknownModel("/models/missing.glb".into()))
    );
    assert!(catalog.load_or_fallback("/models/missing.glb").is_fallback());
}

#[test]
fn scene_mounts_with_empty_catalog() {
    let mut r = rng();
    let configs = generate_configs(&mut r);
    let scene = SceneRoot::new(configs, &ModelCatalog::empty(), &mut r);
    assert_eq!(scene.bodies.len(), 4);
    assert!(scene.central.appearance.is_fallback());
    assert!(scene.bodies.iter().all(|b| b.appearance.is_fallback()));
}

#[test]
fn rings_trace_closed_tilted_orbits() {
    let mut r = rng();
    let configs = generate_configs(&mut r);
    let scene = SceneRoot::new(configs.clone(), &ModelCatalog::builtin(), &mut r);
    assert_eq!(scene.rings.len(), configs.len());
    for (ring, c) in scene.rings.iter().zip(&configs) {
        assert_eq!(ring.points.len(), RING_SEGMENTS + 1);
        let first = ring.points[0];
        let last = ring.points[RING_SEGMENTS];
        assert!((first - last).length() < 1e-3);
        for p in &ring.points {
            assert!((p.length() - c.orbit_radius).abs() < 1e-3);
        }
        assert_eq!(ring.tilt, c.orbit_tilt);
    }
}

#[test]
fn starfield_fills_the_backdrop_shell() {
    let mut r = rng();
    let field = Starfield::generate(&mut r, STAR_COUNT, STAR_RADIUS, STAR_DEPTH);
    assert_eq!(field.stars.len(), STAR_COUNT);
    for s in &field.stars {
        let d = s.position.length();
        assert!(d >= STAR_RADIUS - 1e-2 && d <= STAR_RADIUS + STAR_DEPTH + 1e-2);
        assert!(s.brightness >= STAR_MIN_BRIGHTNESS && s.brightness < 1.0);
    }
}

#[test]
fn bodies_publish_after_first_tick() {
    let mut r = rng();
    let configs = generate_configs(&mut r);
    let mut scene = SceneRoot::new(configs, &ModelCatalog::builtin(), &mut r);
    assert_eq!(scene.locate(Section::About), None);
    assert_eq!(scene.body_lights().count(), 0);

    scene.tick(false);
    let about = scene.locate(Section::About).expect("published");
    assert_eq!(about.radius, 1.2);
    assert!((about.position.length() - 12.0).abs() < 1e-3);
    assert_eq!(scene.locate(Section::Home), None);
    assert_eq!(scene.body_lights().count(), 4);
    assert_eq!(scene.lighting.sun.position, glam::Vec3::ZERO);
}

#[test]
fn frozen_scene_keeps_every_body_in_place() {
    let mut r = rng();
    let configs = generate_configs(&mut r);
    let mut scene = SceneRoot::new(configs, &ModelCatalog::builtin(), &mut r);
    scene.tick(false);
    let before: Vec<_> = scene.bodies.iter().map(|b| b.last_world_position()).collect();
    let spin = scene.central.self_rotation;
    for _ in 0..30 {
        scene.tick(true);
    }
    let after: Vec<_> = scene.bodies.iter().map(|b| b.last_world_position()).collect();
    assert_eq!(before, after);
    assert_eq!(scene.central.self_rotation, spin);
}
