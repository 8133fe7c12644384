/// Skybox pass.

use crate::error::Result;
use crate::render::{RenderBackend, ShaderHandle, MeshHandle, TextureId, SHADER_SKYBOX, require_shader};

/// Draws a cube-mapped mesh around the camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyboxRenderer {
    shader: ShaderHandle,
    mesh: MeshHandle,
    texture: TextureId,
}

impl SkyboxRenderer {
    /// Fails with `InvalidResource` when the backend has no skybox shader
    pub fn new(backend: &dyn RenderBackend, mesh: MeshHandle, texture: TextureId) -> Result<Self> {
        let shader = require_shader(backend, SHADER_SKYBOX)?;
        Ok(Self { shader, mesh, texture })
    }

    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    pub fn render(&self, backend: &mut dyn RenderBackend) -> Result<()> {
        backend.attach_shader(self.shader)?;
        backend.attach_mesh(self.mesh)?;
        backend.attach_texture(self.texture)?;
        backend.draw_mesh(self.mesh)?;
        backend.detach_texture()?;
        backend.detach_mesh()?;
        backend.detach_shader()
    }
}

#[cfg(test)]
#[path = "skybox_tests.rs"]
mod tests;
