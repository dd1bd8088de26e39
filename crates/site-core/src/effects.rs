//! Transient effect particles.
//!
//! A particle created at time `T` with lifetime `L` is alive for every
//! query in `[T, T + L)` and dead at or after `T + L`. Removal happens
//! exactly once per particle; `retain_alive` is the single teardown
//! path for loop-managed particles.

use glam::Vec2;
use instant::Duration;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleKind {
    Spark,
    Heart,
    ConfettiPiece,
    FireworkSpark,
    Ripple,
    EmojiFloat,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Seconds since the effect clock's origin.
    pub spawned_at: f64,
    pub lifetime: Duration,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Particle {
    pub fn new(
        kind: ParticleKind,
        spawned_at: f64,
        lifetime: Duration,
        position: Vec2,
        velocity: Vec2,
    ) -> Self {
        Self {
            kind,
            spawned_at,
            lifetime,
            position,
            velocity,
        }
    }

    /// Alive on the half-open interval `[spawned_at, spawned_at + lifetime)`.
    #[inline]
    pub fn is_alive(&self, now: f64) -> bool {
        now >= self.spawned_at && now < self.spawned_at + self.lifetime.as_secs_f64()
    }

    /// Position after `age` seconds of straight-line travel.
    #[inline]
    pub fn position_at(&self, now: f64) -> Vec2 {
        let age = (now - self.spawned_at).max(0.0) as f32;
        self.position + self.velocity * age
    }

    /// Remaining life as a [0, 1] fraction; effects map this to opacity.
    #[inline]
    pub fn life_fraction(&self, now: f64) -> f32 {
        let total = self.lifetime.as_secs_f64();
        if total <= 0.0 {
            return 0.0;
        }
        let left = (self.spawned_at + total - now) / total;
        left.clamp(0.0, 1.0) as f32
    }
}

/// Drop every particle whose lifetime has elapsed. Each dead particle
/// leaves the collection exactly once; survivors keep their order.
pub fn retain_alive(particles: &mut Vec<Particle>, now: f64) {
    particles.retain(|p| p.is_alive(now));
}

/// Velocities for a radial burst of `count` particles at `speed`.
pub fn radial_burst(count: usize, speed: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            Vec2::new(angle.cos(), angle.sin()) * speed
        })
        .collect()
}
