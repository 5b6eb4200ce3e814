//! Particle field simulation shared with the web frontend.
//!
//! The field owns a fixed set of particles and advances them one discrete
//! step per rendered frame. All state here is platform-independent; the web
//! frontend only draws the result and feeds pointer coordinates in.

use crate::constants::{
    ATTRACTION_GAIN, ATTRACTION_RADIUS, PARTICLE_LIGHTNESS_PCT, PARTICLE_SATURATION_PCT,
    PARTICLE_SIZE_MAX, PARTICLE_SIZE_MIN, PARTICLE_SPEED_RANGE,
};
use glam::Vec2;
use rand::Rng;

/// One particle. Size and hue are fixed at creation; only position and
/// velocity change over the particle's life.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub hue: f32,
}

impl Particle {
    /// CSS color string for the particle's fixed hue.
    pub fn color(&self) -> String {
        format!(
            "hsl({:.0}, {}%, {}%)",
            self.hue, PARTICLE_SATURATION_PCT, PARTICLE_LIGHTNESS_PCT
        )
    }
}

/// Simulation area sized to the drawing surface. Bounds are enforced by
/// reflecting velocity on wall contact, not by clamping position, so a
/// particle may sit outside the bounds for a single frame.
pub struct ParticleField {
    pub width: f32,
    pub height: f32,
    pub particles: Vec<Particle>,
    pub attraction_point: Option<Vec2>,
    pub attraction_active: bool,
}

impl ParticleField {
    /// Populate `count` particles with uniform random position inside the
    /// bounds, size in `[1,4)`, velocity components in `[-1,1)` and a random
    /// hue in `[0,360)`.
    pub fn new(width: f32, height: f32, count: usize, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                velocity: Vec2::new(
                    (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_SPEED_RANGE,
                    (rng.gen::<f32>() * 2.0 - 1.0) * PARTICLE_SPEED_RANGE,
                ),
                size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * (PARTICLE_SIZE_MAX - PARTICLE_SIZE_MIN),
                hue: rng.gen::<f32>() * 360.0,
            })
            .collect();
        Self {
            width,
            height,
            particles,
            attraction_point: None,
            attraction_active: false,
        }
    }

    /// Update the field bounds after the drawing surface changed size.
    /// Existing particles are neither moved nor re-counted; anything left
    /// outside the new bounds reflects back in on its next wall contact.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Record the pointer position in field space. Kept fresh on every move
    /// so the point is already correct when a press activates attraction.
    pub fn set_attraction_point(&mut self, point: Vec2) {
        self.attraction_point = Some(point);
    }

    pub fn set_attraction_active(&mut self, active: bool) {
        self.attraction_active = active;
    }

    /// One physics step: advance by velocity, reflect velocity sign on wall
    /// contact (once per axis), then apply pointer attraction to particles
    /// within [`ATTRACTION_RADIUS`] of the attraction point.
    ///
    /// The attraction term is an unbounded positive feedback: velocity can
    /// grow without limit under a sustained press. That matches the observed
    /// behavior this simulation reproduces and is kept as-is.
    pub fn tick(&mut self) {
        let attraction = if self.attraction_active {
            self.attraction_point
        } else {
            None
        };
        for p in &mut self.particles {
            p.position += p.velocity;
            if p.position.x < 0.0 || p.position.x > self.width {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > self.height {
                p.velocity.y = -p.velocity.y;
            }
            if let Some(target) = attraction {
                let delta = target - p.position;
                if delta.length() < ATTRACTION_RADIUS {
                    p.velocity += delta * ATTRACTION_GAIN;
                }
            }
        }
    }
}
