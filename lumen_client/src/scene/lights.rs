/// Scene lighting: one directional light (the sun) plus ambient.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use super::fog::Fog;

/// Unit direction of a sun at `angle_degrees` elevation.
///
/// Rotation about the X axis: `(0, sin, cos)`, normalized.
pub fn light_direction(angle_degrees: f32) -> Vec3 {
    let radians = angle_degrees.to_radians();
    Vec3::new(0.0, radians.sin(), radians.cos()).normalize()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    /// Unit vector pointing towards the light
    pub direction: Vec3,
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            direction: light_direction(45.0),
            intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SceneLights {
    pub directional: DirectionalLight,
    pub specular_power: f32,
    pub ambient: Vec3,
}

impl SceneLights {
    pub fn new(directional: DirectionalLight, specular_power: f32, ambient: Vec3) -> Self {
        Self {
            directional,
            specular_power,
            ambient,
        }
    }

    /// Point the directional light at `angle_degrees` elevation
    pub fn set_elevation(&mut self, angle_degrees: f32) {
        self.directional.direction = light_direction(angle_degrees);
    }

    /// GPU layout of the lights and `fog`
    pub fn uniform(&self, fog: &Fog) -> SceneUniform {
        let d = self.directional.direction;
        let c = self.directional.color;
        SceneUniform {
            light_direction: [d.x, d.y, d.z, self.directional.intensity],
            light_color: [c.x, c.y, c.z, self.specular_power],
            ambient: [self.ambient.x, self.ambient.y, self.ambient.z, 0.0],
            fog: [fog.color.x, fog.color.y, fog.color.z, fog.effective_density()],
        }
    }
}

/// Uniform block uploaded before the world pass (std140 compatible).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SceneUniform {
    /// xyz: direction, w: intensity
    pub light_direction: [f32; 4],
    /// rgb: color, w: specular power
    pub light_color: [f32; 4],
    pub ambient: [f32; 4],
    /// rgb: color, w: density (0 = no fog)
    pub fog: [f32; 4],
}

#[cfg(test)]
#[path = "lights_tests.rs"]
mod tests;
