/// Texture cache.
///
/// Loads are idempotent by name: the first successful load wins and later
/// loads under the same name return the cached texture without touching
/// the backend, even if the path or settings differ.

use std::path::{Path, PathBuf};
use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::render::TextureId;
use crate::utils::IdAllocator;
use crate::{engine_debug, engine_error, engine_info, engine_warn};
use super::texture::{Texture, TextureData, TextureSettings, TextureBackend};

const SOURCE: &str = "lumen::TextureManager";

pub struct TextureManager<B: TextureBackend> {
    backend: B,
    textures: FxHashMap<String, Texture>,
    ids: IdAllocator,
    /// Relative paths are resolved against this directory
    root: PathBuf,
}

impl<B: TextureBackend> TextureManager<B> {
    pub fn new(backend: B, root: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            textures: FxHashMap::default(),
            ids: IdAllocator::new(),
            root: root.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Path a relative resource path resolves to
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    // ===== LOADING =====

    /// Load the image at `path` under `path` itself as name
    pub fn load_path(&mut self, path: &str, settings: TextureSettings) -> Result<Texture> {
        self.load(path, path, settings)
    }

    /// Load the image at `path` under `name`
    ///
    /// # Errors
    ///
    /// - `TextureLoadFailed` if the image cannot be decoded. Nothing is cached.
    /// - `TextureReleaseFailed` if the decoded buffer cannot be freed after
    ///   upload. The texture is cached and usable anyway.
    pub fn load(&mut self, name: &str, path: &str, settings: TextureSettings) -> Result<Texture> {
        if let Some(texture) = self.textures.get(name) {
            engine_debug!(SOURCE, "Texture '{}' already loaded", name);
            return Ok(*texture);
        }

        let resolved = self.resolve(path);
        let data = match self.backend.decode(&resolved) {
            Some(data) => data,
            None => return Err(load_failed(&resolved)),
        };

        let uploaded = self.upload(name, settings, std::slice::from_ref(&data));
        let released = self.backend.release(data);
        let texture = uploaded?;
        if !released {
            return Err(release_failed(&resolved));
        }
        Ok(texture)
    }

    /// Load several images as the layers of one texture (cube map, array)
    ///
    /// Every layer is decoded before anything is uploaded: if one fails,
    /// the already-decoded layers are released and nothing is cached.
    pub fn load_layers(&mut self, name: &str, settings: TextureSettings, paths: &[&str]) -> Result<Texture> {
        if let Some(texture) = self.textures.get(name) {
            engine_debug!(SOURCE, "Texture '{}' already loaded", name);
            return Ok(*texture);
        }
        if paths.is_empty() {
            return Err(Error::InvalidResource(format!(
                "Texture '{}' has no layer", name
            )));
        }

        let mut layers = Vec::with_capacity(paths.len());
        for path in paths {
            let resolved = self.resolve(path);
            match self.backend.decode(&resolved) {
                Some(data) => layers.push((resolved, data)),
                None => {
                    for (_, data) in layers {
                        self.backend.release(data);
                    }
                    return Err(load_failed(&resolved));
                }
            }
        }

        let (resolved, layers): (Vec<PathBuf>, Vec<TextureData>) = layers.into_iter().unzip();
        let uploaded = self.upload(name, settings, &layers);

        let mut first_failure = None;
        for (path, data) in resolved.iter().zip(layers) {
            if !self.backend.release(data) && first_failure.is_none() {
                first_failure = Some(path);
            }
        }
        let texture = uploaded?;
        match first_failure {
            Some(path) => Err(release_failed(path)),
            None => Ok(texture),
        }
    }

    /// Upload already-decoded RGBA8 pixels under `name`
    pub fn load_from_pixels(
        &mut self,
        name: &str,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
        settings: TextureSettings,
    ) -> Result<Texture> {
        if let Some(texture) = self.textures.get(name) {
            engine_debug!(SOURCE, "Texture '{}' already loaded", name);
            return Ok(*texture);
        }

        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidResource(format!(
                "Texture '{}': {} bytes for {}x{} RGBA8 (expected {})",
                name, pixels.len(), width, height, expected
            )));
        }

        let data = TextureData::new(pixels, width, height);
        let uploaded = self.upload(name, settings, std::slice::from_ref(&data));
        let released = self.backend.release(data);
        let texture = uploaded?;
        if !released {
            return Err(release_failed(Path::new(name)));
        }
        Ok(texture)
    }

    fn upload(&mut self, name: &str, settings: TextureSettings, layers: &[TextureData]) -> Result<Texture> {
        let id = TextureId(self.ids.alloc());
        if let Err(e) = self.backend.create(id, &settings, layers) {
            self.ids.free(id.0);
            return Err(e);
        }

        let first = &layers[0];
        let texture = Texture {
            id,
            width: first.width,
            height: first.height,
            layers: layers.len() as u32,
            settings,
        };
        self.textures.insert(name.to_string(), texture);
        engine_debug!(
            SOURCE,
            "Loaded texture '{}' ({}x{}, {} layer(s), id {})",
            name, texture.width, texture.height, texture.layers, id.0
        );
        Ok(texture)
    }

    // ===== REGISTRY =====

    /// Register an externally created texture, returning the one it replaces
    pub fn add(&mut self, name: &str, texture: Texture) -> Option<Texture> {
        let previous = self.textures.insert(name.to_string(), texture);
        if previous.is_some() {
            engine_warn!(SOURCE, "Texture '{}' replaced", name);
        }
        previous
    }

    pub fn has(&self, name: &str) -> bool {
        self.textures.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Texture> {
        self.textures.get(name).copied()
    }

    /// Forget `name` without deleting the GPU texture
    pub fn remove(&mut self, name: &str) -> Option<Texture> {
        self.textures.remove(name)
    }

    /// Forget every texture without deleting the GPU textures
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Cached names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.textures.keys().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Delete every cached GPU texture, then forget them all
    pub fn cleanup(&mut self) {
        let mut ids: Vec<TextureId> = self.textures.values().map(|t| t.id).collect();
        // Two names can share one texture through `add`
        ids.sort_unstable();
        ids.dedup();

        for &id in &ids {
            self.backend.delete(id);
            self.ids.free(id.0);
        }
        self.textures.clear();
        engine_info!(SOURCE, "Deleted {} texture(s)", ids.len());
    }
}

fn load_failed(path: &Path) -> Error {
    let path = path.display().to_string();
    engine_error!(SOURCE, "Unable to load texture : \"{}\"", path);
    Error::TextureLoadFailed { path }
}

fn release_failed(path: &Path) -> Error {
    let path = path.display().to_string();
    engine_error!(SOURCE, "Unable to unload texture buffer : \"{}\"", path);
    Error::TextureReleaseFailed { path }
}

#[cfg(test)]
#[path = "texture_manager_tests.rs"]
mod tests;
