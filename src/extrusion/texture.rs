use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FloorplanError, Result};

/// Encoded image bytes, shared between materials.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub path: PathBuf,
    pub bytes: Arc<[u8]>,
}

/// Source of texture images.
pub trait TextureLoader {
    /// Loads the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Texture`] if the image cannot be read.
    fn load(&self, path: &Path) -> Result<TextureImage>;
}

/// Reads textures from disk, relative to an asset root.
#[derive(Debug, Clone)]
pub struct FsTextureLoader {
    root: PathBuf,
}

impl FsTextureLoader {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureLoader for FsTextureLoader {
    fn load(&self, path: &Path) -> Result<TextureImage> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|e| texture_error(&full, &e.to_string()))?;
        if bytes.is_empty() {
            return Err(texture_error(&full, "file is empty"));
        }
        Ok(TextureImage {
            path: path.to_path_buf(),
            bytes: bytes.into(),
        })
    }
}

/// Serves textures from memory. Unknown paths fail like missing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryTextureLoader {
    images: HashMap<PathBuf, Arc<[u8]>>,
}

impl MemoryTextureLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `bytes` under `path`, replacing any previous image.
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) {
        self.images.insert(path.into(), bytes.into());
    }
}

impl TextureLoader for MemoryTextureLoader {
    fn load(&self, path: &Path) -> Result<TextureImage> {
        self.images
            .get(path)
            .map(|bytes| TextureImage {
                path: path.to_path_buf(),
                bytes: Arc::clone(bytes),
            })
            .ok_or_else(|| texture_error(path, "not found"))
    }
}

fn texture_error(path: &Path, reason: &str) -> FloorplanError {
    FloorplanError::Texture {
        path: path.display().to_string(),
        reason: reason.to_owned(),
    }
}
