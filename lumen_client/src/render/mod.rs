//! Draw-submission seam.
//!
//! Everything that touches the GPU goes through `RenderBackend`. HUDs, the
//! skybox and the scene renderer only issue ordered commands against it;
//! shader compilation, buffers and rasterization live behind the trait.

mod types;
mod backend;
#[cfg(test)]
pub(crate) mod mock_backend;

pub use types::{
    ShaderHandle, MeshHandle, TextureId,
    Viewport, Rect2D, Quad2D, Model3D,
    RenderPasses,
};
pub use backend::{
    RenderBackend,
    SHADER_2D_IN_3D, SHADER_3D_TO_2D, SHADER_SKYBOX, SHADER_WORLD, SHADER_DEPTH,
    SHADER_PARTICLES,
    UNIFORM_SCENE,
    require_shader,
};
