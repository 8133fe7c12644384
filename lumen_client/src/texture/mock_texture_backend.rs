/// Recording texture backend for unit tests
///
/// Decoded buffers carry their source path as pixel bytes so `release`
/// can tell which image it is freeing.

use std::path::{Path, PathBuf};
use rustc_hash::FxHashSet;
use crate::error::Result;
use crate::engine_bail;
use crate::render::TextureId;
use super::{TextureBackend, TextureData, TextureSettings};

#[derive(Debug, Default)]
pub struct MockTextureBackend {
    /// Paths that fail to decode
    pub missing: FxHashSet<PathBuf>,
    /// Paths whose decoded buffer fails to release
    pub sticky: FxHashSet<PathBuf>,
    /// Reject every upload
    pub fail_create: bool,
    pub decoded: Vec<PathBuf>,
    pub released: usize,
    /// (id, layer count)
    pub created: Vec<(TextureId, usize)>,
    pub deleted: Vec<TextureId>,
}

impl MockTextureBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(mut self, path: impl Into<PathBuf>) -> Self {
        self.missing.insert(path.into());
        self
    }

    pub fn with_sticky(mut self, path: impl Into<PathBuf>) -> Self {
        self.sticky.insert(path.into());
        self
    }
}

impl TextureBackend for MockTextureBackend {
    fn decode(&mut self, path: &Path) -> Option<TextureData> {
        self.decoded.push(path.to_path_buf());
        if self.missing.contains(path) {
            return None;
        }
        let tag = path.to_string_lossy().into_owned().into_bytes();
        Some(TextureData::new(tag, 16, 16))
    }

    fn release(&mut self, data: TextureData) -> bool {
        self.released += 1;
        match String::from_utf8(data.pixels) {
            Ok(path) => !self.sticky.contains(Path::new(&path)),
            Err(_) => true,
        }
    }

    fn create(&mut self, id: TextureId, _settings: &TextureSettings, layers: &[TextureData]) -> Result<()> {
        if self.fail_create {
            engine_bail!("lumen::MockTextureBackend", "Upload rejected for id {}", id.0);
        }
        self.created.push((id, layers.len()));
        Ok(())
    }

    fn delete(&mut self, id: TextureId) {
        self.deleted.push(id);
    }
}
