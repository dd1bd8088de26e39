use glam::Vec2;
use instant::Duration;
use site_core::{radial_burst, retain_alive, Particle, ParticleKind};

fn spark(spawned_at: f64, lifetime_secs: f64) -> Particle {
    Particle::new(
        ParticleKind::Spark,
        spawned_at,
        Duration::from_secs_f64(lifetime_secs),
        Vec2::ZERO,
        Vec2::new(1.0, 0.0),
    )
}

#[test]
fn alive_on_half_open_interval() {
    let p = spark(10.0, 1.5);
    assert!(p.is_alive(10.0));
    assert!(p.is_alive(10.7));
    assert!(p.is_alive(11.499));
    assert!(!p.is_alive(11.5));
    assert!(!p.is_alive(12.0));
    assert!(!p.is_alive(9.9));
}

#[test]
fn retain_removes_dead_exactly_once() {
    let mut particles = vec![spark(0.0, 1.0), spark(0.5, 1.0), spark(0.9, 1.0)];
    retain_alive(&mut particles, 1.2);
    assert_eq!(particles.len(), 2);
    // Idempotent at the same clock value: nothing more to remove.
    retain_alive(&mut particles, 1.2);
    assert_eq!(particles.len(), 2);
    retain_alive(&mut particles, 5.0);
    assert!(particles.is_empty());
}

#[test]
fn life_fraction_decays_to_zero() {
    let p = spark(0.0, 2.0);
    assert!((p.life_fraction(0.0) - 1.0).abs() < 1e-6);
    assert!((p.life_fraction(1.0) - 0.5).abs() < 1e-6);
    assert_eq!(p.life_fraction(2.0), 0.0);
    assert_eq!(p.life_fraction(99.0), 0.0);
}

#[test]
fn position_follows_velocity() {
    let p = spark(1.0, 2.0);
    let at = p.position_at(1.5);
    assert!((at.x - 0.5).abs() < 1e-6);
    assert_eq!(at.y, 0.0);
}

#[test]
fn radial_burst_is_evenly_spread() {
    let vels = radial_burst(12, 2.0);
    assert_eq!(vels.len(), 12);
    for v in &vels {
        assert!((v.length() - 2.0).abs() < 1e-4);
    }
    // Opposite indices cancel out for an even count.
    let sum: Vec2 = vels.iter().copied().sum();
    assert!(sum.length() < 1e-3);
}
