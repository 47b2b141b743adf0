use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::premultiply_rgba8_in_place;
use crate::foundation::error::{StudioError, StudioResult};

#[derive(Clone, Debug)]
/// Decoded raster source in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl PreparedImage {
    /// Build from straight RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, mut rgba: Vec<u8>) -> StudioResult<Self> {
        if width == 0 || height == 0 {
            return Err(StudioError::validation("image dimensions must be non-zero"));
        }
        if rgba.len() != (width as usize) * (height as usize) * 4 {
            return Err(StudioError::validation("image byte length mismatch"));
        }
        premultiply_rgba8_in_place(&mut rgba);
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba),
        })
    }

    /// Fails when either side exceeds what the raster backend can sample (`u16::MAX`).
    pub fn check_raster_limits(&self) -> StudioResult<()> {
        let max = u32::from(u16::MAX);
        if self.width > max || self.height > max {
            return Err(StudioError::validation(format!(
                "image {}x{} exceeds the {max}px raster limit",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Solid-color image, handy for previews and tests.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> StudioResult<Self> {
        Self::from_rgba8(width, height, rgba.repeat((width as usize) * (height as usize)))
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> StudioResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    PreparedImage::from_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
