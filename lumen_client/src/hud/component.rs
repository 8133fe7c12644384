/// Always-drawn HUD components.
///
/// Components have no open/closed state and no key bindings. The manager
/// draws them after the registered HUDs in both passes.

use glam::{Vec2, Vec4};
use crate::error::Result;
use crate::input::InputProvider;
use crate::render::{Quad2D, RenderBackend, ShaderHandle, Viewport};

pub trait HudComponent {
    /// Called once per frame
    fn update(&mut self, _input: &dyn InputProvider) {}

    fn draw_2d(&self, shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()>;

    fn draw_3d(
        &self,
        _shader: ShaderHandle,
        _viewport: &Viewport,
        _backend: &mut dyn RenderBackend,
    ) -> Result<()> {
        Ok(())
    }

    fn cleanup(&mut self) {}
}

/// Cross drawn at the center of the screen
#[derive(Debug, Clone)]
pub struct CrosshairComponent {
    /// Arm length in pixels
    pub size: f32,
    /// Arm width in pixels
    pub thickness: f32,
    pub color: Vec4,
    screen: Vec2,
}

impl CrosshairComponent {
    pub fn new(size: f32, thickness: f32, color: Vec4) -> Self {
        Self {
            size,
            thickness,
            color,
            screen: Vec2::ZERO,
        }
    }

    /// Horizontal then vertical arm
    pub fn quads(&self) -> [Quad2D; 2] {
        let center = self.screen * 0.5;
        let horizontal = Vec2::new(self.size, self.thickness);
        let vertical = Vec2::new(self.thickness, self.size);
        [
            Quad2D::colored(center - horizontal * 0.5, horizontal, self.color),
            Quad2D::colored(center - vertical * 0.5, vertical, self.color),
        ]
    }
}

impl Default for CrosshairComponent {
    fn default() -> Self {
        Self::new(16.0, 2.0, Vec4::ONE)
    }
}

impl HudComponent for CrosshairComponent {
    fn update(&mut self, input: &dyn InputProvider) {
        let (width, height) = input.effective_size();
        self.screen = Vec2::new(width as f32, height as f32);
    }

    fn draw_2d(&self, _shader: ShaderHandle, backend: &mut dyn RenderBackend) -> Result<()> {
        for quad in &self.quads() {
            backend.draw_quad(quad)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "component_tests.rs"]
mod tests;
