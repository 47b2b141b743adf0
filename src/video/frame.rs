//! Per-frame and summary display lists for the compositor.

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, Canvas, Point, Rect, Vec2};
use crate::render::plan::{DisplayList, DrawOp, FontWeight};
use crate::video::settings::{Transition, VideoSettings};
use crate::video::theme::{LETTERBOX_COLOR, background_stops, overlay_bars};
use crate::video::timing::{breathing_scale, opacity_at, slide_offset};

/// Heading of the summary frame.
pub const SUMMARY_TITLE: &str = "4K Video Created";
/// Hint line under the summary.
pub const SUMMARY_FOOTER: &str = "Click download to save your video";

const SUMMARY_BACKGROUND: Rgba8 = Rgba8::from_u24(0x0A0E27);
const SUMMARY_SUBTITLE_COLOR: Rgba8 = Rgba8::from_u24(0x00C896);
const SUMMARY_FOOTER_COLOR: Rgba8 = Rgba8::from_u24(0x666666);

/// Position within the whole sequence: `local` indexes the image block, `global` the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameClock {
    /// Frame within the current image, `0..60`.
    pub local: u32,
    /// Frame since the run started.
    pub global: u64,
}

/// Where and how the source image lands on the canvas for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    /// Scaled image rectangle, centered on the canvas.
    pub dest: Rect,
    /// Transition transform applied on top of `dest`.
    pub transform: Affine,
}

/// Centered image at the breathing scale, plus the per-transition adjustment.
pub fn image_placement(
    canvas: Canvas,
    image_size: (u32, u32),
    transition: Transition,
    local: u32,
) -> ImagePlacement {
    let scale = breathing_scale(local);
    let w = f64::from(image_size.0) * scale;
    let h = f64::from(image_size.1) * scale;
    let center = canvas.center();
    let centered = Rect::from_center_size(center, (w, h));

    match transition {
        Transition::Slide => ImagePlacement {
            dest: centered + Vec2::new(slide_offset(local), 0.0),
            transform: Affine::IDENTITY,
        },
        Transition::Zoom => ImagePlacement {
            dest: centered,
            transform: Affine::scale_about(scale, center),
        },
        Transition::Fade | Transition::Wipe | Transition::Dissolve => ImagePlacement {
            dest: centered,
            transform: Affine::IDENTITY,
        },
    }
}

/// Background, gated image, then theme overlay for one frame.
pub fn compile_frame(
    canvas: Canvas,
    image: &PreparedImage,
    settings: &VideoSettings,
    clock: FrameClock,
) -> DisplayList {
    let mut list = DisplayList::new(canvas);
    let (start, end) = background_stops(settings.theme, clock.global);
    list.gradient(
        canvas.rect(),
        Point::ZERO,
        Point::new(f64::from(canvas.width), f64::from(canvas.height)),
        start,
        end,
    );

    let placement = image_placement(
        canvas,
        (image.width, image.height),
        settings.transition,
        clock.local,
    );
    list.push(DrawOp::Image {
        image: image.clone(),
        dest: placement.dest,
        transform: placement.transform,
        opacity: opacity_at(clock.local),
    });

    for bar in overlay_bars(settings.theme, canvas) {
        list.fill_rect(bar, LETTERBOX_COLOR);
    }
    list
}

/// Text lines printed on the summary frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryText {
    /// Always [`SUMMARY_TITLE`].
    pub title: String,
    /// `<n> images • <resolution> • <transition>`.
    pub subtitle: String,
    /// Always [`SUMMARY_FOOTER`].
    pub footer: String,
}

impl SummaryText {
    /// Summary lines for `image_count` images under `settings`.
    pub fn new(image_count: usize, settings: &VideoSettings) -> Self {
        Self {
            title: SUMMARY_TITLE.to_string(),
            subtitle: format!(
                "{image_count} images • {} • {}",
                settings.resolution.label(),
                settings.transition.label()
            ),
            footer: SUMMARY_FOOTER.to_string(),
        }
    }
}

/// Solid dark placeholder frame with centered title, subtitle and footer.
pub fn compile_summary(canvas: Canvas, text: &SummaryText) -> DisplayList {
    let mut list = DisplayList::new(canvas);
    list.fill_rect(canvas.rect(), SUMMARY_BACKGROUND);

    let c = canvas.center();
    list.text(
        text.title.as_str(),
        120.0,
        FontWeight::Bold,
        Point::new(c.x, c.y - 60.0),
        Rgba8::WHITE,
    );
    list.text(
        text.subtitle.as_str(),
        60.0,
        FontWeight::Regular,
        Point::new(c.x, c.y + 40.0),
        SUMMARY_SUBTITLE_COLOR,
    );
    list.text(
        text.footer.as_str(),
        40.0,
        FontWeight::Regular,
        Point::new(c.x, c.y + 120.0),
        SUMMARY_FOOTER_COLOR,
    );
    list
}

#[cfg(test)]
#[path = "../../tests/unit/video/frame.rs"]
mod tests;
