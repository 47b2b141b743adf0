//! Procedural player figure: attributes -> display list -> raster -> PNG.

use kurbo::{Circle, RoundedRect};

use crate::export;
use crate::foundation::color::Rgba8;
use crate::foundation::config::{FIGURE_CANVAS, StudioConfig};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::StudioResult;
use crate::player::attributes::{HairStyle, PlayerAttributes};
use crate::player::gallery::GeneratedImage;
use crate::render::cpu::CpuRasterizer;
use crate::render::plan::{DisplayList, FontWeight, upper_half_ellipse};
use crate::render::surface::Surface;
use crate::render::text::FontLibrary;

const BACKGROUND_TOP: Rgba8 = Rgba8::from_u24(0x1A1F3A);
const BACKGROUND_BOTTOM: Rgba8 = Rgba8::from_u24(0x0A0E27);
const SHOE_COLOR: Rgba8 = Rgba8::from_u24(0x1A1A1A);
const BADGE_ALPHA: f64 = 0.9;
const SHORTS_ALPHA: f64 = 0.8;

const HEAD_RADIUS: f64 = 40.0;
const FOREARM_RADIUS: f64 = 15.0;
const CURL_RADIUS: f64 = 12.0;
const BADGE_CORNER: f64 = 4.0;

const NUMBER_SIZE: f32 = 40.0;
const POSITION_SIZE: f32 = 16.0;
const TEAM_SIZE: f32 = 14.0;

/// Figure anchor: horizontally centered, 40 units below vertical center.
pub fn figure_anchor(canvas: Canvas) -> Point {
    let c = canvas.center();
    Point::new(c.x, c.y + 40.0)
}

/// Compile the figure for `attrs` on the 400x600 logical canvas.
///
/// Layers are pushed strictly back to front; later shapes overdraw earlier ones.
pub fn build_figure(attrs: &PlayerAttributes) -> DisplayList {
    let canvas = FIGURE_CANVAS;
    let mut list = DisplayList::new(canvas);
    let a = figure_anchor(canvas);
    let at = |dx: f64, dy: f64| Point::new(a.x + dx, a.y + dy);
    let rect = |dx: f64, dy: f64, w: f64, h: f64| {
        Rect::new(a.x + dx, a.y + dy, a.x + dx + w, a.y + dy + h)
    };

    list.gradient(
        canvas.rect(),
        Point::ZERO,
        Point::new(0.0, f64::from(canvas.height)),
        BACKGROUND_TOP,
        BACKGROUND_BOTTOM,
    );

    list.fill_shape(&Circle::new(at(0.0, -100.0), HEAD_RADIUS), attrs.skin_tone);
    push_hair(&mut list, attrs.hair_style, attrs.hair_color, a);

    let jersey = attrs.jersey_color;
    list.fill_polygon(
        &[at(-60.0, -60.0), at(60.0, -60.0), at(70.0, 40.0), at(-70.0, 40.0)],
        jersey,
    );
    list.fill_polygon(
        &[at(-60.0, -60.0), at(-100.0, -40.0), at(-90.0, 20.0), at(-70.0, 10.0)],
        jersey,
    );
    list.fill_polygon(
        &[at(60.0, -60.0), at(100.0, -40.0), at(90.0, 20.0), at(70.0, 10.0)],
        jersey,
    );
    for dx in [-95.0, 95.0] {
        list.fill_shape(&Circle::new(at(dx, -10.0), FOREARM_RADIUS), attrs.skin_tone);
    }

    list.text(
        attrs.shirt_number.to_string(),
        NUMBER_SIZE,
        FontWeight::Bold,
        a,
        Rgba8::WHITE,
    );

    let badge = RoundedRect::from_rect(rect(-30.0, 50.0, 60.0, 25.0), BADGE_CORNER);
    list.fill_shape(&badge, Rgba8::WHITE.with_alpha(BADGE_ALPHA));
    list.text(
        attrs.position.code(),
        POSITION_SIZE,
        FontWeight::Bold,
        at(0.0, 68.0),
        jersey,
    );

    list.text(
        attrs.team_name.as_str(),
        TEAM_SIZE,
        FontWeight::Bold,
        at(0.0, -70.0),
        Rgba8::WHITE,
    );

    list.fill_rect(
        rect(-50.0, 40.0, 100.0, 60.0),
        jersey.with_alpha(SHORTS_ALPHA * f64::from(jersey.a) / 255.0),
    );

    for dx in [-40.0, 10.0] {
        list.fill_rect(rect(dx, 100.0, 30.0, 80.0), attrs.skin_tone);
    }
    for dx in [-40.0, 10.0] {
        list.fill_rect(rect(dx, 160.0, 30.0, 40.0), jersey);
    }
    for dx in [-45.0, 10.0] {
        list.fill_rect(rect(dx, 195.0, 35.0, 15.0), SHOE_COLOR);
    }

    list
}

fn push_hair(list: &mut DisplayList, style: HairStyle, color: Rgba8, a: Point) {
    match style {
        HairStyle::Short => {
            list.fill_path(upper_half_ellipse(Point::new(a.x, a.y - 110.0), 42.0, 42.0), color);
        }
        HairStyle::Medium => {
            list.fill_path(upper_half_ellipse(Point::new(a.x, a.y - 115.0), 45.0, 45.0), color);
        }
        HairStyle::Long => {
            list.fill_path(upper_half_ellipse(Point::new(a.x, a.y - 110.0), 45.0, 55.0), color);
        }
        HairStyle::Curly => {
            for i in 0..5 {
                let c = Point::new(a.x - 30.0 + 15.0 * f64::from(i), a.y - 120.0);
                list.fill_shape(&Circle::new(c, CURL_RADIUS), color);
            }
        }
        HairStyle::Bald => {}
    }
}

/// Owns the figure surface and draws [`PlayerAttributes`] onto it.
///
/// The surface always holds the most recent render; exporting never re-renders.
pub struct FigureRenderer {
    surface: Surface,
    raster: CpuRasterizer,
}

impl FigureRenderer {
    /// Renderer at the native 400x600 output size.
    pub fn new(fonts: FontLibrary) -> StudioResult<Self> {
        Self::with_surface(FIGURE_CANVAS, fonts)
    }

    /// Renderer drawing the logical figure canvas scaled into `size`.
    pub fn with_surface(size: Canvas, fonts: FontLibrary) -> StudioResult<Self> {
        Ok(Self {
            surface: Surface::new(size)?,
            raster: CpuRasterizer::new(fonts),
        })
    }

    /// Renderer sized and fonted from `cfg`.
    pub fn from_config(cfg: &StudioConfig) -> StudioResult<Self> {
        let fonts = FontLibrary::resolve(cfg.font_path.as_deref())?;
        Self::with_surface(cfg.figure_surface, fonts)
    }

    #[tracing::instrument(
        skip(self, attrs),
        fields(number = attrs.shirt_number, hair = %attrs.hair_style)
    )]
    /// Clear the surface and draw the figure for `attrs`.
    pub fn render(&mut self, attrs: &PlayerAttributes) -> StudioResult<()> {
        let list = build_figure(attrs);
        self.raster.execute(&list, &mut self.surface)
    }

    /// Surface holding the last render.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// PNG of the current surface contents.
    pub fn export_png(&self) -> StudioResult<Vec<u8>> {
        self.surface.encode_png()
    }

    /// Render, export and stamp the result with a download name.
    pub fn generate(&mut self, attrs: &PlayerAttributes) -> StudioResult<GeneratedImage> {
        self.render(attrs)?;
        let png = self.export_png()?;
        let image = GeneratedImage::new(png, export::unix_millis_now());
        tracing::debug!(
            file = %image.file_name,
            bytes = image.png.len(),
            "generated player figure"
        );
        Ok(image)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/player/figure.rs"]
mod tests;
