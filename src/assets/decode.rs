use std::path::Path;

use anyhow::Context;
use image::RgbImage;

use crate::foundation::error::{FadeError, FadeResult};

/// Decode encoded image bytes into 8-bit RGB. Any alpha channel is dropped.
pub fn decode_image(bytes: &[u8]) -> FadeResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgb8())
}

/// Load an image file from disk as 8-bit RGB.
///
/// `path` must name a regular file; anything else is a validation error.
pub fn load_image(path: &Path) -> FadeResult<RgbImage> {
    if !path.is_file() {
        return Err(FadeError::validation(format!(
            "'{}' does not point to a file",
            path.display()
        )));
    }
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    decode_image(&bytes).map_err(|e| match e {
        FadeError::Other(err) => {
            FadeError::Other(err.context(format!("decode image '{}'", path.display())))
        }
        other => other,
    })
}

/// Write `img` as a PNG file.
pub fn save_png(path: &Path, img: &RgbImage) -> FadeResult<()> {
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
