use tokio_util::sync::CancellationToken;

use crate::export;
use crate::foundation::config::{COMPOSITE_CANVAS, StudioConfig};
use crate::foundation::core::Canvas;
use crate::foundation::error::{StudioError, StudioResult};
use crate::render::cpu::CpuRasterizer;
use crate::render::surface::Surface;
use crate::render::text::FontLibrary;
use crate::video::frame::{FrameClock, SummaryText, compile_frame, compile_summary};
use crate::video::settings::VideoSettings;
use crate::video::timing::{FRAMES_PER_IMAGE, progress_percent};
use crate::video::uploads::PendingImage;

/// The only persisted output of a composition run.
#[derive(Clone, Debug)]
pub struct FinalSummary {
    /// PNG of the placeholder summary frame.
    pub png: Vec<u8>,
    /// Download name, `video-4k-<ms>.png`.
    pub file_name: String,
    /// Summary heading.
    pub title: String,
    /// Image count and settings line.
    pub subtitle: String,
    /// Download hint.
    pub footer: String,
    /// Images submitted, including skipped ones.
    pub image_count: usize,
    /// Frames actually drawn; skipped images contribute none.
    pub frames_composited: u64,
    /// Input indices whose decode failed.
    pub skipped: Vec<usize>,
}

/// Counters scoped to one `compose` call.
struct RunState {
    global_frame: u64,
    total_frames: u64,
    last_reported: Option<u8>,
    frames_composited: u64,
    skipped: Vec<usize>,
}

impl RunState {
    fn new(image_count: usize) -> Self {
        Self {
            global_frame: 0,
            total_frames: image_count as u64 * u64::from(FRAMES_PER_IMAGE),
            last_reported: None,
            frames_composited: 0,
            skipped: Vec::new(),
        }
    }

    /// Advance the global counter and report progress when the rounded percentage changes.
    fn advance(&mut self, frames: u64, on_progress: &mut impl FnMut(u8)) {
        self.global_frame += frames;
        let pct = progress_percent(self.global_frame, self.total_frames);
        if self.last_reported != Some(pct) {
            self.last_reported = Some(pct);
            on_progress(pct);
        }
    }
}

/// Draws every frame of a multi-image sequence onto one owned surface and
/// encodes the closing summary frame.
pub struct FrameCompositor {
    surface: Surface,
    raster: CpuRasterizer,
}

impl FrameCompositor {
    /// Compositor at the native 3840x2160 output size.
    pub fn new(fonts: FontLibrary) -> StudioResult<Self> {
        Self::with_surface(COMPOSITE_CANVAS, fonts)
    }

    /// Compositor drawing the logical 4K canvas scaled into `size`.
    pub fn with_surface(size: Canvas, fonts: FontLibrary) -> StudioResult<Self> {
        Ok(Self {
            surface: Surface::new(size)?,
            raster: CpuRasterizer::new(fonts),
        })
    }

    /// Compositor sized and fonted from `cfg`.
    pub fn from_config(cfg: &StudioConfig) -> StudioResult<Self> {
        let fonts = FontLibrary::resolve(cfg.font_path.as_deref())?;
        Self::with_surface(cfg.composite_surface, fonts)
    }

    /// Last composited frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Composite `images` in order and return the encoded summary frame.
    ///
    /// Images are decoded one at a time; awaiting a decode is the only suspension
    /// point, and `cancel` is observed there. Frames within an image block are drawn
    /// synchronously. An undecodable image is skipped but still advances progress by
    /// its full frame allotment.
    #[tracing::instrument(
        skip_all,
        fields(images = images.len(), theme = %settings.theme, transition = %settings.transition)
    )]
    pub async fn compose<F>(
        &mut self,
        images: Vec<PendingImage>,
        settings: &VideoSettings,
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> StudioResult<FinalSummary>
    where
        F: FnMut(u8),
    {
        if images.is_empty() {
            return Err(StudioError::EmptyInput);
        }
        let image_count = images.len();
        let mut state = RunState::new(image_count);
        tracing::info!(
            total_frames = state.total_frames,
            estimated_secs = settings.estimated_duration_secs(image_count),
            "composition started"
        );

        for (index, pending) in images.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(StudioError::Cancelled);
            }
            let decoded = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(StudioError::Cancelled),
                res = pending.decode(index) => res,
            };
            let image = match decoded {
                Ok(image) => image,
                Err(err @ StudioError::DecodeFailure { .. }) => {
                    tracing::warn!(index, error = %err, "skipping image");
                    state.skipped.push(index);
                    state.advance(u64::from(FRAMES_PER_IMAGE), &mut on_progress);
                    continue;
                }
                Err(err) => return Err(err),
            };
            tracing::debug!(index, width = image.width, height = image.height, "compositing image");

            for local in 0..FRAMES_PER_IMAGE {
                let clock = FrameClock {
                    local,
                    global: state.global_frame,
                };
                let list = compile_frame(COMPOSITE_CANVAS, &image, settings, clock);
                self.raster.execute(&list, &mut self.surface)?;
                state.frames_composited += 1;
                state.advance(1, &mut on_progress);
            }
            tokio::task::yield_now().await;
        }

        let text = SummaryText::new(image_count, settings);
        let list = compile_summary(COMPOSITE_CANVAS, &text);
        self.raster.execute(&list, &mut self.surface)?;
        let png = self.surface.encode_png()?;

        tracing::info!(
            frames = state.frames_composited,
            skipped = state.skipped.len(),
            bytes = png.len(),
            "composition finished"
        );
        Ok(FinalSummary {
            png,
            file_name: export::video_file_name(export::unix_millis_now()),
            title: text.title,
            subtitle: text.subtitle,
            footer: text.footer,
            image_count,
            frames_composited: state.frames_composited,
            skipped: state.skipped,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/video/compositor.rs"]
mod tests;
