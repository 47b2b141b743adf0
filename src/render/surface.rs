use std::io::Cursor;

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, unpremultiply_rgba8_in_place};
use crate::foundation::error::{StudioError, StudioResult};

/// A rendered frame in RGBA8 format.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major RGBA8 order.
    pub data: Vec<u8>,
    /// Whether RGB channels are premultiplied by alpha.
    pub premultiplied: bool,
}

/// Exclusively owned raster drawing surface (premultiplied RGBA8).
pub struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    /// Transparent surface of `size` pixels.
    pub fn new(size: Canvas) -> StudioResult<Self> {
        let size = size.validate()?;
        let width: u16 = size
            .width
            .try_into()
            .map_err(|_| StudioError::surface("surface width exceeds u16"))?;
        let height: u16 = size
            .height
            .try_into()
            .map_err(|_| StudioError::surface("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Pixel dimensions.
    pub fn size(&self) -> Canvas {
        Canvas::new(u32::from(self.width), u32::from(self.height))
    }

    pub(crate) fn dims_u16(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut vello_cpu::Pixmap {
        &mut self.pixmap
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Straight-alpha color of one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return None;
        }
        let idx = ((y as usize) * usize::from(self.width) + (x as usize)) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixmap.data_as_u8_slice()[idx..idx + 4]);
        unpremultiply_rgba8_in_place(&mut px);
        Some(Rgba8::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Copy the pixels out as a premultiplied frame.
    pub fn to_frame(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Encode the current contents as a lossless PNG blob.
    pub fn encode_png(&self) -> StudioResult<Vec<u8>> {
        let mut rgba = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut rgba);
        let img = image::RgbaImage::from_raw(u32::from(self.width), u32::from(self.height), rgba)
            .ok_or_else(|| StudioError::encode("surface byte length mismatch"))?;

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| StudioError::encode(format!("png: {e}")))?;
        Ok(buf)
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
