pub struct VisualConfig {
    /// Fixed particle field cardinality; slots are respawned, never removed.
    pub particle_count: usize,
    /// Pointer repulsion cutoff distance in surface units.
    pub repel_radius: f32,
    /// Repulsion impulse at zero distance (linear falloff to the cutoff).
    pub repel_strength: f32,
    /// Life drained from every particle each frame.
    pub life_decay: f32,
    /// How far a particle may leave the surface before it is respawned.
    pub respawn_margin: f32,
    /// Exponential smoothing factor applied to the pointer each frame.
    pub pointer_smoothing: f32,
    /// Radius of the radial glow painted under the pointer.
    pub glow_radius: f32,
    /// Horizontal sampling stride of the aurora band curves.
    pub band_stride: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            particle_count: 150,
            repel_radius: 200.0,
            repel_strength: 3.0,
            life_decay: 0.2,
            respawn_margin: 50.0,
            pointer_smoothing: 0.1,
            glow_radius: 250.0,
            band_stride: 5.0,
        }
    }
}
