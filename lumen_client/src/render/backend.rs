/// Render backend trait.
///
/// Implemented by the GPU layer of the client. Calls are issued in the
/// order the passes require; the backend must not reorder them.

use glam::{IVec3, Vec3, Vec4};
use crate::error::{Error, Result};
use super::types::{ShaderHandle, MeshHandle, TextureId, Rect2D, Quad2D, Model3D};

/// Shader for screen-space HUD quads
pub const SHADER_2D_IN_3D: &str = "2Din3D";
/// Shader projecting HUD models into screen rectangles
pub const SHADER_3D_TO_2D: &str = "Shader3DTo2D";
pub const SHADER_SKYBOX: &str = "skybox";
/// Lit world chunks
pub const SHADER_WORLD: &str = "world";
/// Depth visualisation of world chunks
pub const SHADER_DEPTH: &str = "depth";
pub const SHADER_PARTICLES: &str = "particles";

/// Uniform block receiving `SceneUniform` (lights and fog)
pub const UNIFORM_SCENE: &str = "scene";

pub trait RenderBackend {
    /// Look up a compiled shader by name
    fn shader(&self, name: &str) -> Option<ShaderHandle>;

    /// Make `shader` the active program
    fn attach_shader(&mut self, shader: ShaderHandle) -> Result<()>;

    /// Unbind the active program
    fn detach_shader(&mut self) -> Result<()>;

    /// Switch to screen-space rendering (orthographic, blending on)
    fn begin_2d(&mut self) -> Result<()>;

    /// Leave screen-space rendering
    fn end_2d(&mut self) -> Result<()>;

    fn set_scissor(&mut self, rect: Rect2D, enabled: bool) -> Result<()>;

    fn set_viewport(&mut self, rect: Rect2D) -> Result<()>;

    /// Clear color and depth
    fn clear(&mut self, color: Vec4) -> Result<()>;

    /// Draw a quad with the active 2D shader
    fn draw_quad(&mut self, quad: &Quad2D) -> Result<()>;

    /// Draw a model with the active 3D-to-2D shader
    fn draw_model(&mut self, model: &Model3D) -> Result<()>;

    fn attach_mesh(&mut self, mesh: MeshHandle) -> Result<()>;

    fn detach_mesh(&mut self) -> Result<()>;

    fn attach_texture(&mut self, texture: TextureId) -> Result<()>;

    fn detach_texture(&mut self) -> Result<()>;

    /// Draw the attached mesh
    fn draw_mesh(&mut self, mesh: MeshHandle) -> Result<()>;

    /// Upload raw bytes into a named uniform block of the active shader
    fn update_uniform(&mut self, name: &str, data: &[u8]) -> Result<()>;

    /// Draw the chunk at integer chunk position `chunk`
    fn draw_chunk(&mut self, chunk: IVec3) -> Result<()>;

    /// Draw camera-facing particle billboards
    fn draw_particles(&mut self, positions: &[Vec3]) -> Result<()>;
}

/// Resolve a shader by name, failing with `InvalidResource` if absent
pub fn require_shader(backend: &dyn RenderBackend, name: &str) -> Result<ShaderHandle> {
    backend
        .shader(name)
        .ok_or_else(|| Error::InvalidResource(format!("Shader '{}' not found", name)))
}
