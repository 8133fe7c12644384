/// Recording render backend for unit tests (no GPU required)
///
/// Every call is appended to `commands` as a short string so tests can
/// assert on exact submission order.

use glam::{IVec3, Vec3, Vec4};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_bail;
use super::{RenderBackend, ShaderHandle, MeshHandle, TextureId, Rect2D, Quad2D, Model3D};

#[derive(Debug, Default)]
pub struct MockBackend {
    pub commands: Vec<String>,
    shaders: FxHashMap<String, ShaderHandle>,
    /// Calls whose recorded command starts with this prefix fail
    fail_on: Option<String>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend knowing the given shader names
    pub fn with_shaders(names: &[&str]) -> Self {
        let mut backend = Self::new();
        for name in names {
            backend.add_shader(name);
        }
        backend
    }

    pub fn add_shader(&mut self, name: &str) -> ShaderHandle {
        let handle = ShaderHandle(self.shaders.len() as u32);
        self.shaders.insert(name.to_string(), handle);
        handle
    }

    /// Make every command starting with `prefix` fail
    pub fn fail_on(&mut self, prefix: &str) {
        self.fail_on = Some(prefix.to_string());
    }

    /// Recorded commands starting with `prefix`
    pub fn commands_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter(|c| c.starts_with(prefix))
            .map(|c| c.as_str())
            .collect()
    }

    /// Index of the first command equal to `command`
    pub fn position(&self, command: &str) -> Option<usize> {
        self.commands.iter().position(|c| c == command)
    }

    fn shader_name(&self, handle: ShaderHandle) -> &str {
        self.shaders
            .iter()
            .find(|(_, h)| **h == handle)
            .map(|(name, _)| name.as_str())
            .unwrap_or("?")
    }

    fn record(&mut self, command: String) -> Result<()> {
        if let Some(prefix) = &self.fail_on {
            if command.starts_with(prefix.as_str()) {
                engine_bail!("lumen::MockBackend", "Injected failure on '{}'", command);
            }
        }
        self.commands.push(command);
        Ok(())
    }
}

impl RenderBackend for MockBackend {
    fn shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders.get(name).copied()
    }

    fn attach_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        let name = self.shader_name(shader).to_string();
        self.record(format!("attach_shader:{}", name))
    }

    fn detach_shader(&mut self) -> Result<()> {
        self.record("detach_shader".to_string())
    }

    fn begin_2d(&mut self) -> Result<()> {
        self.record("begin_2d".to_string())
    }

    fn end_2d(&mut self) -> Result<()> {
        self.record("end_2d".to_string())
    }

    fn set_scissor(&mut self, rect: Rect2D, enabled: bool) -> Result<()> {
        self.record(format!(
            "scissor:{},{},{},{}:{}",
            rect.x, rect.y, rect.width, rect.height,
            if enabled { "on" } else { "off" }
        ))
    }

    fn set_viewport(&mut self, rect: Rect2D) -> Result<()> {
        self.record(format!("viewport:{},{},{},{}", rect.x, rect.y, rect.width, rect.height))
    }

    fn clear(&mut self, _color: Vec4) -> Result<()> {
        self.record("clear".to_string())
    }

    fn draw_quad(&mut self, quad: &Quad2D) -> Result<()> {
        self.record(format!("quad@{},{}", quad.position.x, quad.position.y))
    }

    fn draw_model(&mut self, model: &Model3D) -> Result<()> {
        self.record(format!("model:{}", model.mesh.0))
    }

    fn attach_mesh(&mut self, mesh: MeshHandle) -> Result<()> {
        self.record(format!("attach_mesh:{}", mesh.0))
    }

    fn detach_mesh(&mut self) -> Result<()> {
        self.record("detach_mesh".to_string())
    }

    fn attach_texture(&mut self, texture: TextureId) -> Result<()> {
        self.record(format!("attach_texture:{}", texture.0))
    }

    fn detach_texture(&mut self) -> Result<()> {
        self.record("detach_texture".to_string())
    }

    fn draw_mesh(&mut self, mesh: MeshHandle) -> Result<()> {
        self.record(format!("draw_mesh:{}", mesh.0))
    }

    fn update_uniform(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.record(format!("uniform:{}:{}", name, data.len()))
    }

    fn draw_chunk(&mut self, chunk: IVec3) -> Result<()> {
        self.record(format!("chunk:{},{},{}", chunk.x, chunk.y, chunk.z))
    }

    fn draw_particles(&mut self, positions: &[Vec3]) -> Result<()> {
        self.record(format!("particles:{}", positions.len()))
    }
}

#[cfg(test)]
#[path = "mock_backend_tests.rs"]
mod tests;
