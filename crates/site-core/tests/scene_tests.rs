use glam::{Vec2, Vec3};
use site_core::{
    advance, build_scene, camera_target, damp_toward, recolor, SceneObjectKind, Theme,
    CAMERA_SMOOTHING, CAMERA_Z, EMBLEM_CLONES, FIELD_PARTICLE_COUNT, FLOAT_AMPLITUDE,
};

#[test]
fn catalog_has_the_fixed_population() {
    let objects = build_scene(7, Theme::Light);
    let shapes = objects
        .iter()
        .filter(|o| matches!(o.kind, SceneObjectKind::Shape { .. }))
        .count();
    let emblems = objects
        .iter()
        .filter(|o| matches!(o.kind, SceneObjectKind::Emblem { .. }))
        .count();
    assert_eq!(shapes, 5);
    assert_eq!(emblems, 1 + EMBLEM_CLONES);
    assert!(objects
        .iter()
        .any(|o| matches!(o.kind, SceneObjectKind::WaveGrid)));
    let field_points = objects
        .iter()
        .find_map(|o| match &o.kind {
            SceneObjectKind::ParticleField { offsets } => Some(offsets.len()),
            _ => None,
        })
        .unwrap();
    assert_eq!(field_points, FIELD_PARTICLE_COUNT);
}

#[test]
fn float_oscillation_stays_bounded() {
    let mut objects = build_scene(7, Theme::Light);
    let mut t = 0.0f32;
    for _ in 0..10_000 {
        advance(&mut objects, t, Vec2::ZERO);
        t += 1.0 / 60.0;
    }
    for o in &objects {
        if let (SceneObjectKind::Shape { .. }, Some(m)) = (&o.kind, o.motion) {
            let dy = (o.position.y - m.base_position.y).abs();
            assert!(dy <= FLOAT_AMPLITUDE + 1e-3, "drifted by {dy}");
            // Pointer at rest pulls x toward 0, never away past the base.
            assert!(o.position.x.abs() <= m.base_position.x.abs() + 1e-3);
        }
    }
}

#[test]
fn rotation_accumulates_per_frame() {
    let mut objects = build_scene(3, Theme::Light);
    let before: Vec<Vec3> = objects.iter().map(|o| o.rotation).collect();
    advance(&mut objects, 0.016, Vec2::ZERO);
    advance(&mut objects, 0.033, Vec2::ZERO);
    for (o, b) in objects.iter().zip(&before) {
        match o.kind {
            SceneObjectKind::WaveGrid => assert_eq!(o.rotation, *b),
            _ => assert_ne!(o.rotation, *b),
        }
    }
}

#[test]
fn recolor_skips_emblems_and_is_idempotent() {
    let mut objects = build_scene(11, Theme::Light);
    let emblem_colors: Vec<[f32; 3]> = objects
        .iter()
        .filter(|o| o.theme_invariant())
        .map(|o| o.color)
        .collect();

    recolor(&mut objects, Theme::Dark);
    let after_once: Vec<[f32; 3]> = objects.iter().map(|o| o.color).collect();
    recolor(&mut objects, Theme::Dark);
    let after_twice: Vec<[f32; 3]> = objects.iter().map(|o| o.color).collect();
    assert_eq!(after_once, after_twice);

    for o in objects.iter().filter(|o| !o.theme_invariant()) {
        assert_eq!(o.color, Theme::Dark.scene_tint());
    }
    let emblems_after: Vec<[f32; 3]> = objects
        .iter()
        .filter(|o| o.theme_invariant())
        .map(|o| o.color)
        .collect();
    assert_eq!(emblem_colors, emblems_after);
}

#[test]
fn camera_damping_converges_without_snapping() {
    let target = camera_target(Vec2::new(1.0, -0.5));
    let mut eye = Vec3::new(0.0, 0.0, CAMERA_Z);
    let first = damp_toward(eye, target, CAMERA_SMOOTHING);
    // One step moves only a fraction of the distance.
    assert!(eye.distance(first) < eye.distance(target));
    for _ in 0..2_000 {
        eye = damp_toward(eye, target, CAMERA_SMOOTHING);
    }
    assert!(eye.distance(target) < 1e-3);
}

#[test]
fn build_is_deterministic_per_seed() {
    let a = build_scene(42, Theme::Dark);
    let b = build_scene(42, Theme::Dark);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.color, y.color);
    }
}
