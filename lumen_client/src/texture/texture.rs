/// Texture types and the backend trait the cache drives.

use std::path::Path;
use crate::error::Result;
use crate::render::TextureId;

/// Sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureFilter {
    Nearest,
    #[default]
    Linear,
}

/// Addressing mode outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureWrap {
    #[default]
    Repeat,
    ClampToEdge,
    MirroredRepeat,
}

/// Upload parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSettings {
    pub filter: TextureFilter,
    pub wrap: TextureWrap,
    pub mipmaps: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            filter: TextureFilter::Linear,
            wrap: TextureWrap::Repeat,
            mipmaps: true,
        }
    }
}

impl TextureSettings {
    /// Nearest filtering, clamped, no mipmaps (HUD sprites, pixel art)
    pub fn pixelated() -> Self {
        Self {
            filter: TextureFilter::Nearest,
            wrap: TextureWrap::ClampToEdge,
            mipmaps: false,
        }
    }
}

/// Decoded RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self { pixels, width, height }
    }
}

/// Cached texture descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
    /// 1 for a 2D texture, 6 for a cube map, N for an array
    pub layers: u32,
    pub settings: TextureSettings,
}

/// Image decoding and GPU upload, provided by the platform layer
pub trait TextureBackend {
    /// Decode the image at `path`, None if it cannot be read
    fn decode(&mut self, path: &Path) -> Option<TextureData>;

    /// Free a decoded buffer once uploaded, false on failure
    fn release(&mut self, data: TextureData) -> bool;

    /// Upload `layers` into the GPU texture `id`
    fn create(&mut self, id: TextureId, settings: &TextureSettings, layers: &[TextureData]) -> Result<()>;

    /// Destroy the GPU texture `id`
    fn delete(&mut self, id: TextureId);
}
