use std::path::Path;

use image::RgbaImage;

use crate::error::EngineError;

/// Decode an image file into straight-alpha RGBA8.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage, EngineError> {
    let path = path.as_ref();
    let image = image::open(path).map_err(|source| EngineError::Asset {
        path: path.to_path_buf(),
        source,
    })?;
    let rgba = image.to_rgba8();
    log::info!(
        "loaded {} ({}x{})",
        path.display(),
        rgba.width(),
        rgba.height()
    );
    Ok(rgba)
}
