use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::VisualConfig;
use crate::forces::pointer_repulsion;
use crate::particle::ParticleSet;

/// Fixed collection of drifting particles plus the RNG that resamples
/// them. Particles do not interact with each other, only with the
/// pointer, so update order is irrelevant.
pub struct ParticleField {
    pub particles: ParticleSet,
    rng: SmallRng,
}

impl ParticleField {
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut particles = ParticleSet::new(count);
        for i in 0..count {
            particles.respawn(i, bounds, &mut rng);
        }
        Self { particles, rng }
    }

    /// Advance every particle one frame: pointer repulsion, drift, life
    /// decay, then respawn any slot whose life ran out or that left the
    /// surface by more than the configured margin. Respawn is the sole
    /// lifecycle-termination path; no slot is ever removed.
    pub fn step(&mut self, pointer: Vec2, bounds: Vec2, config: &VisualConfig) {
        let margin = config.respawn_margin;
        for i in 0..self.particles.count {
            let mut pos = self.particles.position[i];
            pos += pointer_repulsion(pos, pointer, config.repel_radius, config.repel_strength);
            pos += self.particles.velocity[i];
            self.particles.position[i] = pos;
            self.particles.life[i] -= config.life_decay;

            if self.particles.life[i] <= 0.0 || out_of_bounds(pos, bounds, margin) {
                self.particles.respawn(i, bounds, &mut self.rng);
            }
        }
    }
}

fn out_of_bounds(pos: Vec2, bounds: Vec2, margin: f32) -> bool {
    pos.x < -margin || pos.x > bounds.x + margin || pos.y < -margin || pos.y > bounds.y + margin
}
