/// Plain data handed to the render backend.

use bitflags::bitflags;
use glam::{Mat4, Vec2, Vec4};

/// Backend-side shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Backend-side vertex array / mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Backend-side texture object, allocated by `TextureManager`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// Framebuffer size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rectangle covering the whole window
    pub fn full_rect(&self) -> Rect2D {
        Rect2D {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// Width / height, 1.0 for a degenerate viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Screen-space quad drawn by the 2D HUD pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad2D {
    /// Top-left corner in pixels
    pub position: Vec2,
    /// Size in pixels
    pub size: Vec2,
    /// RGBA tint
    pub color: Vec4,
    pub texture: Option<TextureId>,
}

impl Quad2D {
    pub fn colored(position: Vec2, size: Vec2, color: Vec4) -> Self {
        Self { position, size, color, texture: None }
    }

    pub fn textured(position: Vec2, size: Vec2, texture: TextureId) -> Self {
        Self { position, size, color: Vec4::ONE, texture: Some(texture) }
    }
}

/// Model projected into a screen rectangle by the 3D-to-2D HUD pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Model3D {
    pub mesh: MeshHandle,
    pub transform: Mat4,
    pub texture: Option<TextureId>,
    /// Screen rectangle the model is projected into
    pub target: Rect2D,
}

bitflags! {
    /// Passes a `SceneRenderer` submits each frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RenderPasses: u32 {
        const HUDS      = 1 << 0;
        const SKYBOX    = 1 << 1;
        const WORLD     = 1 << 2;
        const PARTICLES = 1 << 3;
    }
}

impl Default for RenderPasses {
    fn default() -> Self {
        Self::all()
    }
}
