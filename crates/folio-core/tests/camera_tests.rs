// Camera director: approach convergence, return home, auto-rotation.

use folio_core::*;
use glam::Vec3;

fn target(x: f32, y: f32, z: f32) -> TargetPlanet {
    TargetPlanet {
        position: Vec3::new(x, y, z),
        radius: 1.3,
    }
}

#[test]
fn closeup_anchor_sits_beyond_target_along_origin_ray() {
    let anchor = closeup_anchor(Vec3::new(12.0, 0.0, 5.0));
    let expected = Vec3::new(
        12.0 + CLOSEUP_DISTANCE * 12.0 / 13.0,
        CLOSEUP_HEIGHT,
        5.0 + CLOSEUP_DISTANCE * 5.0 / 13.0,
    );
    assert!((anchor - expected).length() < 1e-4);
}

#[test]
fn approach_converges_monotonically() {
    let director = CameraDirector::default();
    let mut camera = Camera::home(1.5);
    let t = target(12.0, 0.0, 5.0);
    let anchor = closeup_anchor(t.position);

    let mut prev = camera.eye.distance(anchor);
    for _ in 0..600 {
        let mode = director.update(&mut camera, Some(t));
        assert_eq!(mode, CameraMode::Approach);
        let d = camera.eye.distance(anchor);
        assert!(d <= prev + 1e-5, "distance grew: {} -> {}", prev, d);
        prev = d;
    }
    assert!(prev < 0.01);
    assert!(camera.target.distance(t.position) < 0.01);
}

#[test]
fn retargeting_mid_flight_converges_to_new_anchor() {
    let director = CameraDirector::default();
    let mut camera = Camera::home(1.5);
    for _ in 0..40 {
        director.update(&mut camera, Some(target(12.0, 0.0, 5.0)));
    }
    let next = target(-16.0, 1.0, -3.0);
    for _ in 0..800 {
        director.update(&mut camera, Some(next));
    }
    assert!(camera.eye.distance(closeup_anchor(next.position)) < 0.01);
}

#[test]
fn no_target_returns_home_then_auto_rotates() {
    let director = CameraDirector::default();
    let mut camera = Camera::home(1.5);
    camera.eye = Vec3::new(20.0, 0.4, 7.0);
    camera.target = Vec3::new(12.0, 0.0, 5.0);

    let mut prev = camera.eye.distance(HOME_POSITION);
    let mut mode = director.update(&mut camera, None);
    assert_eq!(mode, CameraMode::Return);
    let mut frames = 0;
    while mode == CameraMode::Return {
        let d = camera.eye.distance(HOME_POSITION);
        assert!(d <= prev + 1e-5);
        prev = d;
        mode = director.update(&mut camera, None);
        frames += 1;
        assert!(frames < 2_000, "never settled home");
    }
    assert_eq!(mode, CameraMode::AutoRotate);
    assert!(distance_to_home_orbit(camera.eye) <= POSITION_SNAP);
}

#[test]
fn auto_rotation_keeps_radius_and_height() {
    let director = CameraDirector::default();
    let mut camera = Camera::home(1.5);
    let radius = home_orbit_radius();
    let start_angle = camera.eye.z.atan2(camera.eye.x);
    for _ in 0..5_000 {
        assert_eq!(director.update(&mut camera, None), CameraMode::AutoRotate);
    }
    let r = (camera.eye.x * camera.eye.x + camera.eye.z * camera.eye.z).sqrt();
    assert!((r - radius).abs() < 1e-2);
    assert!((camera.eye.y - HOME_POSITION.y).abs() < 1e-6);
    assert_eq!(camera.target, HOME_LOOK_AT);
    let angle = camera.eye.z.atan2(camera.eye.x);
    assert!(angle < start_angle);
}

#[test]
fn disabled_auto_rotate_idles_at_home() {
    let director = CameraDirector {
        auto_rotate: false,
        ..CameraDirector::default()
    };
    let mut camera = Camera::home(1.5);
    assert_eq!(director.update(&mut camera, None), CameraMode::Idle);
    assert_eq!(camera.eye, HOME_POSITION);
}

#[test]
fn camera_matrices_are_invertible() {
    let camera = Camera::home(16.0 / 9.0);
    let vp = camera.view_projection();
    assert!(vp.determinant().abs() > 1e-8);
}

#[test]
fn home_is_judged_against_the_auto_rotate_circle() {
    let director = CameraDirector::default();
    let mut camera = Camera::home(1.5);
    camera.eye = Vec3::new(home_orbit_radius(), HOME_POSITION.y, 0.0);
    assert!(camera.eye.distance(HOME_POSITION) > POSITION_SNAP);
    assert_eq!(director.update(&mut camera, None), CameraMode::AutoRotate);
}

#[test]
fn zoom_clamps_eye_distance() {
    let controls = OrbitControls::default();
    let mut camera = Camera::home(1.5);
    controls.zoom(&mut camera, -1.0e6);
    assert!((camera.eye.distance(camera.target) - ORBIT_MIN_DISTANCE).abs() < 1e-4);
    controls.zoom(&mut camera, 1.0e6);
    assert!((camera.eye.distance(camera.target) - ORBIT_MAX_DISTANCE).abs() < 1e-3);

    // direction from the look-at point is preserved
    let dir = camera.eye.normalize();
    assert!(dir.distance((HOME_POSITION - HOME_LOOK_AT).normalize()) < 1e-5);
}

#[test]
fn drag_rotation_keeps_distance_and_moves_eye() {
    let controls = OrbitControls::default();
    let mut camera = Camera::home(1.5);
    let before = camera.eye;
    assert!(controls.rotate(&mut camera, 120.0, -40.0, false));
    assert!(camera.eye.distance(before) > 0.1);
    assert!((camera.eye.distance(camera.target) - before.length()).abs() < 1e-3);
    assert_eq!(camera.target, HOME_LOOK_AT);
}

#[test]
fn drag_rotation_stays_off_the_poles() {
    let controls = OrbitControls::default();
    let mut camera = Camera::home(1.5);
    controls.rotate(&mut camera, 0.0, 1.0e5, false);
    let offset = camera.eye - camera.target;
    assert!(offset.x.abs() + offset.z.abs() > 1e-3);
    assert!(camera.eye.is_finite());
}

struct OneBody;

impl BodyLocator for OneBody {
    fn locate(&self, _section: Section) -> Option<TargetPlanet> {
        Some(target(12.0, 0.0, 5.0))
    }
}

#[test]
fn rotation_refused_while_an_overlay_freezes_orbits() {
    let controls = OrbitControls::default();
    let mut nav = NavigationState::new();
    let t0 = instant::Instant::now();
    nav.navigate(Section::About, &OneBody, t0);
    nav.poll(t0 + OVERLAY_OPEN_DELAY + std::time::Duration::from_millis(1));
    assert!(nav.freeze_orbits());

    let mut camera = Camera::home(1.5);
    assert!(!controls.rotate(&mut camera, 200.0, 50.0, nav.freeze_orbits()));
    assert_eq!(camera.eye, HOME_POSITION);

    nav.return_to_system();
    assert!(controls.rotate(&mut camera, 200.0, 50.0, nav.freeze_orbits()));
}

#[test]
fn pan_moves_eye_and_look_at_together() {
    let controls = OrbitControls::default();
    let mut camera = Camera::home(1.5);
    let offset = camera.eye - camera.target;
    controls.pan(&mut camera, 100.0, 30.0);
    assert!(camera.target.length() > 1e-3);
    assert!((camera.eye - camera.target).distance(offset) < 1e-4);
}
