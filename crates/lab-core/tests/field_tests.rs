// Host-side tests for the particle field simulation.

use glam::Vec2;
use lab_core::{
    ParticleField, ATTRACTION_GAIN, ATTRACTION_RADIUS, PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN,
    PARTICLE_SPEED_RANGE,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(width: f32, height: f32, count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(42);
    ParticleField::new(width, height, count, &mut rng)
}

#[test]
fn initialize_respects_ranges() {
    let field = make_field(800.0, 400.0, 50);
    assert_eq!(field.particles.len(), 50);
    for p in &field.particles {
        assert!(p.position.x >= 0.0 && p.position.x <= 800.0);
        assert!(p.position.y >= 0.0 && p.position.y <= 400.0);
        assert!(
            p.size >= PARTICLE_SIZE_MIN && p.size < PARTICLE_SIZE_MAX,
            "size {} out of [{}, {})",
            p.size,
            PARTICLE_SIZE_MIN,
            PARTICLE_SIZE_MAX
        );
        assert!(p.velocity.x.abs() <= PARTICLE_SPEED_RANGE);
        assert!(p.velocity.y.abs() <= PARTICLE_SPEED_RANGE);
        assert!(p.hue >= 0.0 && p.hue < 360.0);
    }
}

#[test]
fn particle_color_is_fixed_hsl() {
    let field = make_field(100.0, 100.0, 1);
    let p = &field.particles[0];
    let color = p.color();
    assert!(color.starts_with("hsl("), "unexpected color {color}");
    assert!(color.ends_with(", 70%, 50%)"), "unexpected color {color}");
}

// Property: for particles away from every wall and with attraction off, a
// tick moves each particle by exactly its prior velocity and leaves the
// velocity alone.
#[test]
fn tick_adds_velocity_to_position() {
    let mut field = make_field(1000.0, 1000.0, 20);
    for p in &mut field.particles {
        // Pull everything well inside the bounds so no wall is touched.
        p.position = Vec2::new(
            p.position.x.clamp(10.0, 990.0),
            p.position.y.clamp(10.0, 990.0),
        );
    }
    let before: Vec<_> = field
        .particles
        .iter()
        .map(|p| (p.position, p.velocity))
        .collect();
    field.tick();
    for (p, (pos, vel)) in field.particles.iter().zip(before) {
        let expected = pos + vel;
        assert!(
            (p.position - expected).length() < 1e-6,
            "expected {expected:?}, got {:?}",
            p.position
        );
        assert_eq!(p.velocity, vel, "velocity changed without wall contact");
    }
}

#[test]
fn wall_contact_flips_velocity_sign_exactly_once() {
    let mut field = make_field(100.0, 100.0, 1);
    let p = &mut field.particles[0];
    p.position = Vec2::new(99.5, 50.0);
    p.velocity = Vec2::new(2.0, 0.0);
    field.tick();
    let p = &field.particles[0];
    // Position advanced past the wall and was not clamped back.
    assert!((p.position.x - 101.5).abs() < 1e-6);
    assert_eq!(p.velocity.x, -2.0, "x velocity should flip once");
    assert_eq!(p.velocity.y, 0.0);

    // Next tick brings it back inside; no second flip while outbound.
    field.tick();
    let p = &field.particles[0];
    assert!((p.position.x - 99.5).abs() < 1e-6);
    assert_eq!(p.velocity.x, -2.0, "no double flip once back inside");
}

#[test]
fn wall_contact_flips_y_independently() {
    let mut field = make_field(100.0, 100.0, 1);
    let p = &mut field.particles[0];
    p.position = Vec2::new(50.0, 0.5);
    p.velocity = Vec2::new(0.0, -1.0);
    field.tick();
    let p = &field.particles[0];
    assert_eq!(p.velocity.y, 1.0);
    assert_eq!(p.velocity.x, 0.0);
}

#[test]
fn attraction_pulls_velocity_toward_point() {
    let mut field = make_field(200.0, 200.0, 1);
    {
        let p = &mut field.particles[0];
        p.position = Vec2::new(40.0, 50.0);
        p.velocity = Vec2::ZERO;
    }
    field.set_attraction_point(Vec2::new(50.0, 50.0));
    field.set_attraction_active(true);
    field.tick();
    let p = &field.particles[0];
    // dx = 10 units, gain 0.001 -> exactly (0.01, 0).
    assert!((p.velocity.x - 0.01).abs() < 1e-7, "got {:?}", p.velocity);
    assert!(p.velocity.y.abs() < 1e-7);
    // Position had zero velocity this tick, so it has not moved yet.
    assert_eq!(p.position, Vec2::new(40.0, 50.0));
}

#[test]
fn attraction_inactive_leaves_velocity_alone() {
    let mut field = make_field(200.0, 200.0, 1);
    {
        let p = &mut field.particles[0];
        p.position = Vec2::new(40.0, 50.0);
        p.velocity = Vec2::ZERO;
    }
    field.set_attraction_point(Vec2::new(50.0, 50.0));
    field.set_attraction_active(false);
    field.tick();
    assert_eq!(field.particles[0].velocity, Vec2::ZERO);
}

#[test]
fn attraction_ignores_particles_outside_radius() {
    let mut field = make_field(500.0, 500.0, 1);
    {
        let p = &mut field.particles[0];
        p.position = Vec2::new(50.0 + ATTRACTION_RADIUS + 1.0, 50.0);
        p.velocity = Vec2::ZERO;
    }
    field.set_attraction_point(Vec2::new(50.0, 50.0));
    field.set_attraction_active(true);
    field.tick();
    assert_eq!(field.particles[0].velocity, Vec2::ZERO);
}

// The attraction term is a positive feedback with no damping: holding the
// point fixed near a particle keeps adding velocity every tick.
#[test]
fn sustained_attraction_accumulates_velocity() {
    let mut field = make_field(500.0, 500.0, 1);
    {
        let p = &mut field.particles[0];
        p.position = Vec2::new(240.0, 250.0);
        p.velocity = Vec2::ZERO;
    }
    field.set_attraction_point(Vec2::new(250.0, 250.0));
    field.set_attraction_active(true);
    field.tick();
    let after_one = field.particles[0].velocity.length();
    assert!((after_one - 10.0 * ATTRACTION_GAIN).abs() < 1e-6);
    for _ in 0..10 {
        field.tick();
    }
    let after_many = field.particles[0].velocity.length();
    assert!(
        after_many > after_one,
        "velocity should keep growing under a held press"
    );
}

#[test]
fn resize_updates_bounds_only() {
    let mut field = make_field(800.0, 400.0, 10);
    let before: Vec<_> = field.particles.iter().map(|p| p.position).collect();
    field.resize(200.0, 100.0);
    assert_eq!(field.width, 200.0);
    assert_eq!(field.height, 100.0);
    assert_eq!(field.particles.len(), 10);
    for (p, pos) in field.particles.iter().zip(before) {
        assert_eq!(p.position, pos, "resize must not reposition particles");
    }
}

#[test]
fn particle_outside_new_bounds_reflects_back_in() {
    let mut field = make_field(800.0, 400.0, 1);
    {
        let p = &mut field.particles[0];
        p.position = Vec2::new(500.0, 50.0);
        p.velocity = Vec2::new(1.0, 0.0);
    }
    field.resize(200.0, 100.0);
    field.tick();
    // Stranded outside the shrunk bounds: the wall check flips the velocity
    // so the particle heads back in.
    assert_eq!(field.particles[0].velocity.x, -1.0);
}
