//! Per-theme background gradients and overlays.

use crate::foundation::color::Rgba8;
use crate::foundation::core::{Canvas, Rect};
use crate::video::settings::Theme;
use crate::video::timing::dynamic_hues;

/// Fraction of the frame height covered by each cinematic bar.
pub const LETTERBOX_FRACTION: f64 = 0.1;
/// Translucent black of the cinematic bars.
pub const LETTERBOX_COLOR: Rgba8 = Rgba8::rgba(0, 0, 0, 77);

const DYNAMIC_SATURATION: f64 = 0.7;
const DYNAMIC_START_LIGHTNESS: f64 = 0.2;
const DYNAMIC_END_LIGHTNESS: f64 = 0.1;

/// Start and end stops of the diagonal background gradient at global frame `k`.
pub fn background_stops(theme: Theme, k: u64) -> (Rgba8, Rgba8) {
    match theme {
        Theme::Dynamic => {
            let (h0, h1) = dynamic_hues(k);
            (
                Rgba8::from_hsl(h0, DYNAMIC_SATURATION, DYNAMIC_START_LIGHTNESS),
                Rgba8::from_hsl(h1, DYNAMIC_SATURATION, DYNAMIC_END_LIGHTNESS),
            )
        }
        Theme::Cinematic => (Rgba8::from_u24(0x1A1A1A), Rgba8::from_u24(0x000000)),
        Theme::Minimal => (Rgba8::from_u24(0xFFFFFF), Rgba8::from_u24(0xF0F0F0)),
        Theme::Sports => (Rgba8::from_u24(0x0066FF), Rgba8::from_u24(0x00C896)),
        Theme::Elegant => (Rgba8::from_u24(0x2C1810), Rgba8::from_u24(0x0A0E27)),
    }
}

/// Overlay rectangles drawn after the image; only cinematic has any.
pub fn overlay_bars(theme: Theme, canvas: Canvas) -> Vec<Rect> {
    if theme != Theme::Cinematic {
        return Vec::new();
    }
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    let bar = h * LETTERBOX_FRACTION;
    vec![
        Rect::new(0.0, 0.0, w, bar),
        Rect::new(0.0, h - bar, w, h),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/video/theme.rs"]
mod tests;
