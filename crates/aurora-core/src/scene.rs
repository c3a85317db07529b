use glam::Vec2;

use crate::aurora;
use crate::color::Rgba;
use crate::config::VisualConfig;
use crate::field::ParticleField;
use crate::pointer::PointerTracker;

/// Fixed vertical background gradient, top to bottom.
pub const BACKGROUND_STOPS: [(f32, &str); 3] =
    [(0.0, "#0a0e27"), (0.5, "#1a1535"), (1.0, "#0d1b2a")];

/// Radial glow painted under the pointer, center outward.
pub const GLOW_STOPS: [(f32, Rgba); 3] = [
    (0.0, Rgba::new(100, 200, 255, 0.3)),
    (0.5, Rgba::new(150, 100, 255, 0.15)),
    (1.0, Rgba::new(200, 100, 255, 0.0)),
];

/// The whole per-frame simulation context: frame clock, surface bounds,
/// pointer tracker, particle field. The renderer ticks this once per
/// frame and then reads it to paint; nothing here touches a surface.
pub struct Scene {
    pub config: VisualConfig,
    pub bounds: Vec2,
    pub time: f32,
    pub pointer: PointerTracker,
    pub field: ParticleField,
}

impl Scene {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(VisualConfig::default(), width, height, seed)
    }

    pub fn with_config(config: VisualConfig, width: f32, height: f32, seed: u64) -> Self {
        let bounds = Vec2::new(width, height);
        Self {
            pointer: PointerTracker::new(bounds, config.pointer_smoothing),
            field: ParticleField::new(config.particle_count, bounds, seed),
            config,
            bounds,
            time: 0.0,
        }
    }

    /// Resize handler: adopt the new bounds and recenter the pointer.
    /// Existing particles keep their state; only future bound checks use
    /// the new dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width, height);
        self.pointer.recenter(self.bounds);
    }

    /// Raw pointer position from the host input layer.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.set_target(Vec2::new(x, y));
    }

    /// One frame of simulation: advance the clock, smooth the pointer,
    /// step every particle. Painting is a separate, read-only pass.
    pub fn tick(&mut self) {
        self.time += 1.0;
        self.pointer.tick();
        self.field
            .step(self.pointer.position(), self.bounds, &self.config);
    }

    /// Bulge modulation for the aurora bands this frame.
    pub fn pointer_influence(&self) -> f32 {
        aurora::pointer_influence(self.pointer.position().y, self.bounds.y)
    }
}
