//! PNG export of synthesized textures for offline inspection.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::synth::TextureSet;
use crate::texture::SurfaceTexture;

/// Errors that can occur while writing textures to disk.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The output directory could not be created.
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding or writing the PNG failed.
    #[error("failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Write one texture as a PNG file.
pub fn export_png(texture: &SurfaceTexture, path: &Path) -> Result<(), ExportError> {
    texture
        .image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Write every texture in `set` into `dir` as `<name>_<category>.png`,
/// creating the directory if needed. Returns the written paths, surface first.
pub fn export_set(name: &str, set: &TextureSet, dir: &Path) -> Result<Vec<PathBuf>, ExportError> {
    std::fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for texture in set.iter() {
        let path = dir.join(format!("{}_{}.png", name, texture.category().label()));
        export_png(texture, &path)?;
        written.push(path);
    }
    info!(body = name, count = written.len(), dir = %dir.display(), "textures exported");
    Ok(written)
}
