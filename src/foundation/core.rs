use crate::foundation::error::{StudioError, StudioResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Logical drawing space in drawing units (not necessarily output pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in drawing units.
    pub width: u32,
    /// Height in drawing units.
    pub height: u32,
}

impl Canvas {
    /// Canvas of `width` x `height` units.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `SurfaceUnavailable` for zero sides or sides above `u16::MAX`.
    pub fn validate(self) -> StudioResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(StudioError::surface(format!(
                "surface {}x{} has a zero dimension",
                self.width, self.height
            )));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(StudioError::surface(format!(
                "surface {}x{} exceeds u16 limits",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    /// Geometric center.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full-canvas rectangle at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Uniform scale mapping this logical canvas onto `target` pixels.
    pub fn viewport_scale(self, target: Canvas) -> f64 {
        let sx = f64::from(target.width) / f64::from(self.width.max(1));
        let sy = f64::from(target.height) / f64::from(self.height.max(1));
        sx.min(sy)
    }
}

/// Convert straight RGBA8 pixels to premultiplied alpha.
pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Convert premultiplied RGBA8 pixels back to straight alpha.
pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        let unpremul = |c: u8| -> u8 { ((c as u16 * 255 + a / 2) / a).min(255) as u8 };
        px[0] = unpremul(px[0]);
        px[1] = unpremul(px[1]);
        px[2] = unpremul(px[2]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
