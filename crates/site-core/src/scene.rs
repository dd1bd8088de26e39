//! Decorative scene objects and their per-frame motion.
//!
//! Objects are tagged variants with a fixed field set per kind; the
//! animation step dispatches on the kind in a single typed match
//! instead of probing ad-hoc metadata. All motion is bounded sine or
//! cosine oscillation around a base position, so positions never
//! drift, plus fixed per-frame rotation increments.

use crate::constants::*;
use crate::theme::Theme;
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cone,
    Octahedron,
    Torus,
}

/// Oscillation parameters shared by every floating object.
#[derive(Clone, Copy, Debug)]
pub struct FloatMotion {
    pub base_position: Vec3,
    pub rotation_rate: Vec3,
    pub float_speed: f32,
    pub float_phase: f32,
}

#[derive(Clone, Debug)]
pub enum SceneObjectKind {
    /// One of the five floating geometric meshes.
    Shape { shape: ShapeKind },
    /// The 100-point starfield; rotates slowly as a whole.
    ParticleField { offsets: Vec<Vec3> },
    /// Wireframe plane displaced by a travelling sine field; the
    /// displacement itself is evaluated in the wave shader.
    WaveGrid,
    /// Two-tone decorative emblem. Its colors are part of its identity
    /// and are never retinted on theme changes.
    Emblem { scale: f32, spin_rate: f32 },
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub kind: SceneObjectKind,
    pub motion: Option<FloatMotion>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: [f32; 3],
}

impl SceneObject {
    #[inline]
    pub fn theme_invariant(&self) -> bool {
        matches!(self.kind, SceneObjectKind::Emblem { .. })
    }
}

/// Build the fixed catalog of decorative objects. Rotation rates,
/// float speeds and field positions are jittered once at setup; the
/// layout itself is fixed.
pub fn build_scene(seed: u64, theme: Theme) -> Vec<SceneObject> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let tint = theme.scene_tint();
    let mut objects = Vec::with_capacity(5 + 1 + 1 + 1 + EMBLEM_CLONES);

    let shapes = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Octahedron,
        ShapeKind::Torus,
    ];
    for (index, shape) in shapes.into_iter().enumerate() {
        let base = Vec3::from(SHAPE_BASE_POSITIONS[index]);
        objects.push(SceneObject {
            kind: SceneObjectKind::Shape { shape },
            motion: Some(FloatMotion {
                base_position: base,
                rotation_rate: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 0.02,
                    (rng.gen::<f32>() - 0.5) * 0.02,
                    (rng.gen::<f32>() - 0.5) * 0.02,
                ),
                float_speed: rng.gen::<f32>() * 0.01 + 0.005,
                float_phase: index as f32 * std::f32::consts::PI / 3.0,
            }),
            position: base,
            rotation: Vec3::ZERO,
            color: tint,
        });
    }

    let offsets = (0..FIELD_PARTICLE_COUNT)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
                (rng.gen::<f32>() - 0.5) * FIELD_EXTENT,
            )
        })
        .collect();
    objects.push(SceneObject {
        kind: SceneObjectKind::ParticleField { offsets },
        motion: None,
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        color: tint,
    });

    objects.push(SceneObject {
        kind: SceneObjectKind::WaveGrid,
        motion: None,
        position: Vec3::new(0.0, 0.0, -8.0),
        rotation: Vec3::new(-std::f32::consts::FRAC_PI_4, 0.0, 0.0),
        color: tint,
    });

    // Large background emblem plus three small floating clones.
    objects.push(SceneObject {
        kind: SceneObjectKind::Emblem {
            scale: 1.0,
            spin_rate: EMBLEM_SPIN,
        },
        motion: None,
        position: emblem_home(),
        rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
        color: [1.0, 1.0, 1.0],
    });
    for i in 0..EMBLEM_CLONES {
        let base = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 15.0,
            (rng.gen::<f32>() - 0.5) * 10.0,
            -15.0 - rng.gen::<f32>() * 5.0,
        );
        objects.push(SceneObject {
            kind: SceneObjectKind::Emblem {
                scale: EMBLEM_CLONE_SCALE,
                spin_rate: 0.01 + rng.gen::<f32>() * 0.02,
            },
            motion: Some(FloatMotion {
                base_position: base,
                rotation_rate: Vec3::new(0.002, 0.003, 0.0),
                float_speed: 0.002 + rng.gen::<f32>() * 0.005,
                float_phase: i as f32 * std::f32::consts::PI / 1.5,
            }),
            position: base,
            rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
            color: [1.0, 1.0, 1.0],
        });
    }

    objects
}

/// Advance every object by one frame.
///
/// `time` is elapsed seconds since start, `pointer` the normalized
/// pointer position in [-1, 1] with +y up. Rotation increments are
/// per-frame, matching the original presentation cadence.
pub fn advance(objects: &mut [SceneObject], time: f32, pointer: Vec2) {
    for object in objects.iter_mut() {
        match &object.kind {
            SceneObjectKind::Shape { .. } => {
                if let Some(m) = object.motion {
                    object.rotation += m.rotation_rate;
                    let float_y = (time * m.float_speed + m.float_phase).sin() * FLOAT_AMPLITUDE;
                    object.position.y = m.base_position.y + float_y;
                    object.position.x +=
                        (pointer.x * POINTER_INFLUENCE - object.position.x) * POSITION_SMOOTHING;
                    object.rotation.y += pointer.x * POINTER_SPIN;
                }
            }
            SceneObjectKind::ParticleField { .. } => {
                object.rotation.y += FIELD_SPIN_Y;
                object.rotation.x += FIELD_SPIN_X;
            }
            SceneObjectKind::WaveGrid => {
                // Displacement is time-driven in the shader; nothing to
                // integrate here.
            }
            SceneObjectKind::Emblem { spin_rate, .. } => {
                object.rotation.z += *spin_rate;
                if let Some(m) = object.motion {
                    let fy = (time * m.float_speed + m.float_phase).sin() * 2.0;
                    let fx = (time * m.float_speed * 0.7 + m.float_phase).cos();
                    object.position.x = m.base_position.x + fx;
                    object.position.y = m.base_position.y + fy;
                    object.rotation.x += m.rotation_rate.x;
                    object.rotation.y += m.rotation_rate.y;
                }
            }
        }
    }
}

/// Retint every theme-sensitive object for `theme`. Emblems keep their
/// identity colors. Applying the same theme twice is a no-op after the
/// first call.
pub fn recolor(objects: &mut [SceneObject], theme: Theme) {
    let tint = theme.scene_tint();
    for object in objects.iter_mut() {
        if object.theme_invariant() {
            continue;
        }
        object.color = tint;
    }
}

/// Exponentially damp `current` toward `target`; the camera uses this
/// to follow the pointer without snapping.
#[inline]
pub fn damp_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}

/// Camera offset the pointer is pulling toward.
#[inline]
pub fn camera_target(pointer: Vec2) -> Vec3 {
    Vec3::new(pointer.x * CAMERA_PULL, -pointer.y * CAMERA_PULL, CAMERA_Z)
}
