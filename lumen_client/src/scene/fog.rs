/// Exponential distance fog.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub active: bool,
    pub color: Vec3,
    pub density: f32,
}

impl Fog {
    /// Disabled fog
    pub const NONE: Fog = Fog {
        active: false,
        color: Vec3::ZERO,
        density: 0.0,
    };

    pub fn new(color: Vec3, density: f32) -> Self {
        Self {
            active: true,
            color,
            density: density.max(0.0),
        }
    }

    /// Density the shader should apply, 0 when disabled
    pub fn effective_density(&self) -> f32 {
        if self.active { self.density } else { 0.0 }
    }
}

impl Default for Fog {
    fn default() -> Self {
        Self::NONE
    }
}
