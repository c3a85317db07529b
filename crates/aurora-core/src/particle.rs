use glam::Vec2;
use rand::Rng;

/// Particle render opacity at full life.
pub const MAX_ALPHA: f32 = 0.8;

const SIZE_MIN: f32 = 0.5;
const SIZE_MAX: f32 = 3.0;
const DRIFT_MAX: f32 = 0.25;
const LIFE_MAX: f32 = 100.0;
// One decay step: a fresh particle always survives its first update,
// so `0 < life` holds after every step.
const LIFE_MIN: f32 = 0.2;

/// SoA particle storage. Fixed cardinality; slots are respawned in place,
/// never removed or reallocated.
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    pub size: Vec<f32>,
    pub life: Vec<f32>,
    pub max_life: Vec<f32>,
}

impl ParticleSet {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec2::ZERO; count],
            velocity: vec![Vec2::ZERO; count],
            size: vec![SIZE_MIN; count],
            life: vec![LIFE_MIN; count],
            max_life: vec![LIFE_MIN; count],
        }
    }

    /// Reinitialize one slot with fresh random attributes. Used both at
    /// field construction and as the respawn path; `max_life` varies per
    /// draw so the population expires staggered rather than in lockstep.
    pub fn respawn<R: Rng>(&mut self, i: usize, bounds: Vec2, rng: &mut R) {
        self.position[i] = Vec2::new(
            rng.gen_range(0.0..bounds.x),
            rng.gen_range(0.0..bounds.y),
        );
        self.velocity[i] = Vec2::new(
            rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
            rng.gen_range(-DRIFT_MAX..DRIFT_MAX),
        );
        self.size[i] = rng.gen_range(SIZE_MIN..SIZE_MAX);
        let life = rng.gen_range(LIFE_MIN..LIFE_MAX);
        self.life[i] = life;
        self.max_life[i] = life;
    }

    /// Render opacity: fades with consumed life, capped at `MAX_ALPHA`.
    pub fn alpha(&self, i: usize) -> f32 {
        (self.life[i] / self.max_life[i]).clamp(0.0, 1.0) * MAX_ALPHA
    }
}
