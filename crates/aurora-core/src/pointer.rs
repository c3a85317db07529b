use glam::Vec2;

/// Smoothed pointer state: renderers read `position()`, the host input
/// layer writes `set_target()`.
pub struct PointerTracker {
    current: Vec2,
    target: Vec2,
    smoothing: f32,
}

impl PointerTracker {
    /// Start centered in the surface so the first frames do not chase a
    /// stale position.
    pub fn new(bounds: Vec2, smoothing: f32) -> Self {
        let center = bounds * 0.5;
        Self {
            current: center,
            target: center,
            smoothing,
        }
    }

    /// Record the latest raw pointer position. Non-finite coordinates are
    /// ignored; finiteness is the only validation applied.
    pub fn set_target(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Resize handler: snap both current and target to the new center.
    pub fn recenter(&mut self, bounds: Vec2) {
        let center = bounds * 0.5;
        self.current = center;
        self.target = center;
    }

    /// One exponential smoothing step toward the target. Called exactly
    /// once per frame, before any draw call reads `position()`.
    pub fn tick(&mut self) {
        self.current += (self.target - self.current) * self.smoothing;
    }

    pub fn position(&self) -> Vec2 {
        self.current
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }
}
