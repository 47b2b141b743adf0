//! pitchstudio draws procedural football player cards and composites
//! uploaded images into themed 4K frame sequences.
//!
//! Both pipelines compile a backend-agnostic [`DisplayList`] and execute it
//! on the CPU rasterizer:
//!
//! - [`FigureRenderer`] turns [`PlayerAttributes`] into a 400x600 figure PNG
//! - [`FrameCompositor`] runs the per-image frame blocks for a [`VideoSettings`]
//!   and returns the encoded [`FinalSummary`] frame
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod export;
pub(crate) mod player;
pub(crate) mod render;
pub(crate) mod video;

pub use crate::assets::decode::{PreparedImage, decode_image};
pub use crate::export::{gallery_file_name, player_file_name, unix_millis_now, video_file_name};
pub use crate::foundation::color::Rgba8;
pub use crate::foundation::config::{
    COMPOSITE_CANVAS, DEFAULT_GALLERY_CAPACITY, FIGURE_CANVAS, StudioConfig,
};
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2};
pub use crate::foundation::error::{StudioError, StudioResult};

pub use crate::player::attributes::{
    Gender, HAIR_COLORS, HairStyle, PlayerAttributes, Position, SKIN_TONES, TEAM_NAMES, TeamName,
    clamp_shirt_number,
};
pub use crate::player::figure::{FigureRenderer, build_figure, figure_anchor};
pub use crate::player::gallery::{GeneratedImage, RecentGallery};

pub use crate::render::cpu::CpuRasterizer;
pub use crate::render::plan::{DisplayList, DrawOp, FontWeight, TextAlign};
pub use crate::render::surface::{FrameRGBA, Surface};
pub use crate::render::text::{FontFace, FontLibrary};

pub use crate::video::compositor::{FinalSummary, FrameCompositor};
pub use crate::video::frame::{
    FrameClock, ImagePlacement, SummaryText, compile_frame, compile_summary, image_placement,
};
pub use crate::video::settings::{
    MusicStyle, Resolution, Theme, Transition, VideoSettings, clamp_duration,
};
pub use crate::video::timing::{
    FRAMES_PER_IMAGE, TRANSITION_FRAMES, breathing_scale, dynamic_hues, opacity_at,
    progress_percent, slide_offset,
};
pub use crate::video::uploads::{PendingImage, Upload, UploadedImages};

pub use tokio_util::sync::CancellationToken;
