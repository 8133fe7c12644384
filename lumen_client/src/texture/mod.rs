//! Name-keyed texture cache over an external decoder/uploader.

mod texture;
mod texture_manager;

pub use texture::{
    Texture, TextureData, TextureSettings, TextureFilter, TextureWrap,
    TextureBackend,
};
pub use texture_manager::TextureManager;

#[cfg(test)]
pub(crate) mod mock_texture_backend;
